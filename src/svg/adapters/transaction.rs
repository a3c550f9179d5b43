use super::status_color;
use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::{FontSizes, FontWeights, Radii, StrokeWidths};
use crate::svg::theme::ThemeTokens;
use crate::svg::util::{line, rect, text, Anchor, TextStyle};
use crate::types::Element;

const TRANSACTION_SIZE: (f64, f64) = (360.0, 64.0);
const ICON_SIZE: f64 = 36.0;

fn format_amount(currency: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{currency}{:.2}", amount.abs())
}

/// A single transaction row: merchant, date, amount and status.
pub(super) fn transaction(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let merchant = el.require_str("merchant")?;
    let amount = el.require_f64("amount")?;
    let currency = el.str_prop("currency").unwrap_or("$");
    let w = el.width_or(TRANSACTION_SIZE.0);
    let h = el.height_or(TRANSACTION_SIZE.1);
    let (x, y) = (el.x, el.y);
    let mid = y + h / 2.0;

    let initial: String = merchant
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    let mut parts = vec![
        rect(x, y, w, h, Radii::CARD, &tokens.surface_primary, &tokens.border_light),
        rect(
            x + 14.0,
            mid - ICON_SIZE / 2.0,
            ICON_SIZE,
            ICON_SIZE,
            Radii::CONTROL * 1.5,
            &tokens.accent_tint,
            "none",
        ),
        text(
            x + 14.0 + ICON_SIZE / 2.0,
            mid,
            &initial,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::TITLE,
                fill: &tokens.accent_primary,
                anchor: Anchor::Middle,
            },
        ),
    ];

    let text_x = x + 14.0 + ICON_SIZE + 12.0;
    let date = el.str_prop("date");
    let merchant_y = if date.is_some() { mid - 9.0 } else { mid };
    parts.push(text(
        text_x,
        merchant_y,
        merchant,
        TextStyle {
            size: FontSizes::BODY,
            weight: FontWeights::LABEL,
            fill: &tokens.text_primary,
            anchor: Anchor::Start,
        },
    ));
    if let Some(date) = date {
        parts.push(text(
            text_x,
            mid + 9.0,
            date,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::BODY,
                fill: &tokens.text_tertiary,
                anchor: Anchor::Start,
            },
        ));
    }

    let status = el.str_prop("status");
    let amount_y = if status.is_some() { mid - 9.0 } else { mid };
    let amount_fill = if amount < 0.0 {
        &tokens.text_primary
    } else {
        &tokens.accent_success
    };
    parts.push(text(
        x + w - 14.0,
        amount_y,
        &format_amount(currency, amount),
        TextStyle {
            size: FontSizes::BODY,
            weight: FontWeights::TITLE,
            fill: amount_fill,
            anchor: Anchor::End,
        },
    ));
    if let Some(status) = status {
        parts.push(text(
            x + w - 14.0,
            mid + 9.0,
            status,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::LABEL,
                fill: status_color(tokens, status),
                anchor: Anchor::End,
            },
        ));
    }
    parts.push(line(
        Point::new(text_x, y + h),
        Point::new(x + w - 14.0, y + h),
        &tokens.border_light,
        StrokeWidths::DIVIDER,
    ));

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::super::render_builtin;
    use super::format_amount;
    use crate::svg::ThemeTokens;
    use crate::types::Element;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 12.5), "$12.50");
        assert_eq!(format_amount("€", -3.0), "-€3.00");
    }

    #[test]
    fn test_transaction_row() {
        let tokens = ThemeTokens::default();
        let el = Element::new("transaction", 0.0, 0.0)
            .with_prop("merchant", "blue bottle")
            .with_prop("amount", -4.75)
            .with_prop("date", "Mar 3")
            .with_prop("status", "declined");
        let out = render_builtin(&el).unwrap();
        assert!(out.contains(">B<"));
        assert!(out.contains(">-$4.75<"));
        assert!(out.contains(">Mar 3<"));
        assert!(out.contains(&tokens.accent_error));
    }

    #[test]
    fn test_transaction_requires_numeric_amount() {
        let el = Element::new("transaction", 0.0, 0.0)
            .with_prop("merchant", "Shop")
            .with_prop("amount", "12");
        let err = render_builtin(&el).unwrap_err().to_string();
        assert!(err.contains("amount"));
    }
}
