//! Price formatting for minor-unit integer prices.
//!
//! Prices render as the currency symbol followed by `price / 100` written the
//! way the storefront has always shown them: no trailing zeros, so 2300 is
//! "£23" and 2350 is "£23.5".

/// Symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Formats a minor-unit price with the given currency symbol.
#[must_use]
pub fn format_price(symbol: &str, price: i64) -> String {
    let sign = if price < 0 { "-" } else { "" };
    let magnitude = price.unsigned_abs();
    let whole = magnitude / 100;
    let cents = magnitude % 100;

    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{c:02}"),
    };

    format!("{symbol}{sign}{whole}{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_default(price: i64) -> String {
        format_price(DEFAULT_CURRENCY_SYMBOL, price)
    }

    #[test]
    fn test_whole_amount_has_no_decimals() {
        assert_eq!(format_default(2300), "£23");
        assert_eq!(format_default(0), "£0");
    }

    #[test]
    fn test_trailing_zero_is_dropped() {
        assert_eq!(format_default(2350), "£23.5");
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_default(2399), "£23.99");
        assert_eq!(format_default(5), "£0.05");
    }

    #[test]
    fn test_negative_and_custom_symbol() {
        assert_eq!(format_price("$", -150), "$-1.5");
    }
}
