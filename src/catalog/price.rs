//! Price text handling
//!
//! Catalog prices are free text such as "1,200 G". Anything that is not a
//! number (missing, "N/A", "Unique", junk) sorts as negative infinity so it
//! always collects at the cheap end of a price sort.

/// Label shown for items without a usable price
pub const NO_PRICE_LABEL: &str = "No Price";

/// Sort key shown for items without a usable price
pub const NO_PRICE_KEY: &str = "NO_PRICE";

/// Currency unit suffix used by the catalog
const CURRENCY_SUFFIX: &str = " G";

/// Check if a price is one of the "no price" sentinels
pub fn is_unpriced(price: Option<&str>) -> bool {
    matches!(price, None | Some("") | Some("N/A") | Some("Unique"))
}

/// Numeric value used to order items by price
pub fn price_sort_value(price: Option<&str>) -> f64 {
    match price {
        Some(text) if !is_unpriced(price) => {
            let cleaned = text.replace(',', "").replace(CURRENCY_SUFFIX, "");
            parse_leading_integer(&cleaned).unwrap_or(f64::NEG_INFINITY)
        }
        _ => f64::NEG_INFINITY,
    }
}

/// Price as it should be shown to the user
pub fn price_display(price: Option<&str>) -> &str {
    match price {
        Some(text) if !is_unpriced(price) => text,
        _ => NO_PRICE_LABEL,
    }
}

/// Price key used for tooltips, "NO_PRICE" for the sentinels
pub fn price_sort_key(price: Option<&str>) -> &str {
    match price {
        Some(text) if !is_unpriced(price) => text,
        _ => NO_PRICE_KEY,
    }
}

/// Parse the integer at the start of `text`, ignoring anything after it
fn parse_leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    rest[..end].parse::<f64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_prices() {
        assert_eq!(price_sort_value(None), f64::NEG_INFINITY);
        assert_eq!(price_sort_value(Some("N/A")), f64::NEG_INFINITY);
        assert_eq!(price_sort_value(Some("Unique")), f64::NEG_INFINITY);
        assert_eq!(price_sort_value(Some("")), f64::NEG_INFINITY);
    }

    #[test]
    fn test_grouped_prices() {
        assert_eq!(price_sort_value(Some("120 G")), 120.0);
        assert_eq!(price_sort_value(Some("1,200 G")), 1200.0);
        assert_eq!(price_sort_value(Some("12,345,678 G")), 12_345_678.0);
        assert_eq!(price_sort_value(Some("75")), 75.0);
    }

    #[test]
    fn test_malformed_prices_sort_as_unknown() {
        assert_eq!(price_sort_value(Some("Free")), f64::NEG_INFINITY);
        assert_eq!(price_sort_value(Some("G 100")), f64::NEG_INFINITY);
        // Trailing text after the number is ignored
        assert_eq!(price_sort_value(Some("300 G each")), 300.0);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(price_display(Some("1,200 G")), "1,200 G");
        assert_eq!(price_display(Some("N/A")), NO_PRICE_LABEL);
        assert_eq!(price_display(Some("Unique")), NO_PRICE_LABEL);
        assert_eq!(price_display(None), NO_PRICE_LABEL);
    }

    #[test]
    fn test_price_sort_key() {
        assert_eq!(price_sort_key(Some("80 G")), "80 G");
        assert_eq!(price_sort_key(None), NO_PRICE_KEY);
    }
}
