//! The fixed catalog of weekly mission texts.

use crate::constants::{MISSION_CATALOG_SIZE, STATIC_MISSIONS};

/// Mission text for the mission at 0-based `index`.
///
/// Catalog slot `index % MISSION_CATALOG_SIZE` is used. Slot 0 carries the
/// weekly savings figure; every other slot is a fixed prompt.
pub fn mission_text(index: usize, weekly_savings: f64) -> String {
    match index % MISSION_CATALOG_SIZE {
        0 => format!("Save {} this week", format_amount(weekly_savings)),
        slot => STATIC_MISSIONS[slot - 1].to_string(),
    }
}

/// Formats an amount with thousands separators and at most three
/// fraction digits, dropping trailing zeros (`50000.0` -> `"50,000"`,
/// `1234.5` -> `"1,234.5"`).
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Past 1e15 the scaled value loses its fraction bits or overflows.
    let rounded = if value.abs() > 1e15 {
        value
    } else {
        (value * 1000.0).round() / 1000.0
    };
    let negative = rounded < 0.0;
    let fixed = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(50_000.0), "50,000");
        assert_eq!(format_amount(2_000_000.0), "2,000,000");
    }

    #[test]
    fn test_format_amount_fraction_digits() {
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(8.333333), "8.333");
        assert_eq!(format_amount(0.0005), "0.001");
        assert_eq!(format_amount(-1500.25), "-1,500.25");
    }

    #[test]
    fn test_mission_text_interpolates_slot_zero_only() {
        assert_eq!(mission_text(0, 50_000.0), "Save 50,000 this week");
        assert_eq!(mission_text(1, 50_000.0), STATIC_MISSIONS[0]);
        assert_eq!(mission_text(11, 50_000.0), STATIC_MISSIONS[10]);
        for index in 1..MISSION_CATALOG_SIZE {
            assert!(!mission_text(index, 50_000.0).contains("50,000"));
        }
    }

    #[test]
    fn test_mission_text_cycles_through_catalog() {
        assert_eq!(mission_text(12, 10.0), mission_text(0, 10.0));
        assert_eq!(mission_text(13, 10.0), STATIC_MISSIONS[0]);
        assert_eq!(mission_text(39, 10.0), STATIC_MISSIONS[2]);
    }

    #[test]
    fn test_format_amount_huge_values_stay_finite() {
        let text = format_amount(2.5e307);
        assert!(!text.contains("inf"));
        assert!(text.starts_with(|c: char| c.is_ascii_digit()));
        assert!(text.contains(','));

        assert_eq!(format_amount(-1e16), "-10,000,000,000,000,000");
        assert!(!mission_text(0, f64::MAX / 2.0).contains("inf"));
    }
}
