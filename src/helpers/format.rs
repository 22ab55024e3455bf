pub fn format_number(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, ch) in raw.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Render a millisecond count the way the explain panel displays it.
pub fn format_millis(value: u64) -> String {
    format!("{value}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(56_000), "56,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_millis_is_literal_suffix() {
        assert_eq!(format_millis(15), "15ms");
        assert_eq!(format_millis(0), "0ms");
        assert_eq!(format_millis(1_200), "1200ms");
    }
}
