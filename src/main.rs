use std::io::{self, Read};
use std::process::ExitCode;

use flowscene::{render, render_builtin_preset, ColorScheme, RenderConfig, SceneError, SceneSpec, BUILTIN_PRESETS};
use log::{error, info};
use thiserror::Error;

/// Failures of the command line wrapper. Scene problems pass through as
/// [`SceneError`]; reading input and parsing arguments are handled here.
#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// The value following `short`/`long`, if the flag is present.
fn flag_value<'a>(args: &'a [String], short: &str, long: &str) -> Option<Result<&'a str, CliError>> {
    let pos = args.iter().position(|a| a == short || a == long)?;
    Some(
        args.get(pos + 1)
            .map(String::as_str)
            .ok_or_else(|| CliError::Usage(format!("{long} needs a name"))),
    )
}

fn color_scheme(args: &[String]) -> Result<ColorScheme, CliError> {
    match flag_value(args, "-s", "--scheme") {
        Some(name) => {
            let name = name?;
            ColorScheme::from_name(name).ok_or_else(|| CliError::Usage(format!("unknown color scheme `{name}`")))
        }
        None if args.iter().any(|a| a == "-d" || a == "--dark") => Ok(ColorScheme::dark()),
        None => Ok(ColorScheme::light()),
    }
}

fn print_help() {
    println!("flowscene - Render scene specifications to SVG");
    println!();
    println!("Usage: flowscene [OPTIONS] [SCENE.json]");
    println!();
    println!("Reads a scene as JSON from a file or stdin and writes SVG to stdout.");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message");
    println!("  -p, --preset NAME    Render a built-in preset instead of a scene");
    println!("  -l, --list           List built-in presets");
    println!("  -s, --scheme NAME    Color scheme: light or dark");
    println!("  -d, --dark           Same as --scheme dark");
    println!("  -t, --transparent    Omit the background");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}

fn run(args: &[String]) -> Result<String, CliError> {
    let mut config = RenderConfig::new(color_scheme(args)?);
    if args.iter().any(|a| a == "-t" || a == "--transparent") {
        config = config.with_transparent(true);
    }

    if let Some(name) = flag_value(args, "-p", "--preset") {
        return Ok(render_builtin_preset(name?, &config)?);
    }

    let json = match scene_path(args) {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|source| CliError::Io {
                path: "stdin".to_string(),
                source,
            })?;
            buf
        }
    };
    let spec = SceneSpec::from_json(&json)?;
    info!(elements = spec.elements.len(); "Loaded scene");
    Ok(render(&spec, &config)?)
}

/// First positional argument, skipping the values of flags that take one.
fn scene_path(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-p" | "--preset" | "-s" | "--scheme" => {
                iter.next();
            }
            a if a.starts_with('-') => {}
            a => return Some(a),
        }
    }
    None
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "-l" || a == "--list") {
        for name in BUILTIN_PRESETS.names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(svg) => {
            println!("{svg}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(err:err = e; "Render failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scheme_flag() {
        assert_eq!(color_scheme(&args(&["--scheme", "dark"])).unwrap(), ColorScheme::dark());
        assert_eq!(color_scheme(&args(&["-d"])).unwrap(), ColorScheme::dark());
        assert_eq!(color_scheme(&args(&[])).unwrap(), ColorScheme::light());
        let err = color_scheme(&args(&["-s", "sepia"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown color scheme `sepia`");
        assert!(matches!(color_scheme(&args(&["--scheme"])), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_scene_path_skips_flag_values() {
        assert_eq!(scene_path(&args(&["-s", "dark", "scene.json"])), Some("scene.json"));
        assert_eq!(scene_path(&args(&["-t", "--scheme", "light"])), None);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = run(&args(&["/nonexistent/flowscene/scene.json"])).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/flowscene/scene.json: "));
    }

    #[test]
    fn test_scene_errors_pass_through() {
        let err = run(&args(&["--preset", "no_such_preset"])).unwrap_err();
        assert!(matches!(err, CliError::Scene(SceneError::UnknownPreset(_))));
    }
}
