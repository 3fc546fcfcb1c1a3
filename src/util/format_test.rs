use super::*;

// =============================================================
// format_brl
// =============================================================

#[test]
fn brl_small_amount() {
    assert_eq!(format_brl(12.5), "R$ 12,50");
}

#[test]
fn brl_groups_thousands_with_dots() {
    assert_eq!(format_brl(1234.56), "R$ 1.234,56");
    assert_eq!(format_brl(1_000_000.5), "R$ 1.000.000,50");
}

#[test]
fn brl_zero() {
    assert_eq!(format_brl(0.0), "R$ 0,00");
}

#[test]
fn brl_rounds_to_cents() {
    assert_eq!(format_brl(0.005), "R$ 0,01");
    assert_eq!(format_brl(99.999), "R$ 100,00");
}

#[test]
fn brl_negative() {
    assert_eq!(format_brl(-1234.56), "-R$ 1.234,56");
}

// =============================================================
// initials
// =============================================================

#[test]
fn initials_two_words() {
    assert_eq!(initials("Maria Silva"), "MS");
}

#[test]
fn initials_caps_at_two() {
    assert_eq!(initials("ana beatriz costa lima"), "AB");
}

#[test]
fn initials_single_word() {
    assert_eq!(initials("Maria"), "M");
}

#[test]
fn initials_empty() {
    assert_eq!(initials(""), "");
}
