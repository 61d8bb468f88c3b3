/// One product offering, rendered as a card in the catalog grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Display name
    pub name: &'static str,
    /// Monthly price in whole rupiah
    pub monthly_price: u64,
    /// Icon glyph shown above the name
    pub icon: &'static str,
    /// Feature bullet points, in display order
    pub features: &'static [&'static str],
}

/// Format a rupiah amount with Indonesian digit grouping, e.g. `50000`
/// becomes `"50.000"`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(50_000), "50.000");
        assert_eq!(format_rupiah(25_000), "25.000");
        assert_eq!(format_rupiah(1_500_000), "1.500.000");
    }

    #[test]
    fn test_format_rupiah_no_grouping_below_one_thousand() {
        assert_eq!(format_rupiah(0), "0");
        assert_eq!(format_rupiah(999), "999");
    }

    #[test]
    fn test_format_rupiah_boundary_values() {
        assert_eq!(format_rupiah(1_000), "1.000");
        assert_eq!(format_rupiah(100_000), "100.000");
        assert_eq!(format_rupiah(1_000_000), "1.000.000");
    }
}
