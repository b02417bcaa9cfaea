use super::*;

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(0.0, 0), "0");
    assert_eq!(format_number(999.0, 0), "999");
    assert_eq!(format_number(1000.0, 0), "1,000");
    assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
}

#[test]
fn format_number_applies_precision() {
    assert_eq!(format_number(300.0, 2), "300.00");
    assert_eq!(format_number(1234.567, 2), "1,234.57");
}

#[test]
fn format_number_handles_negatives() {
    assert_eq!(format_number(-1500.5, 1), "-1,500.5");
    assert_eq!(format_number(-0.001, 2), "0.00");
}

#[test]
fn format_number_non_finite_is_dash() {
    assert_eq!(format_number(f64::NAN, 2), "-");
    assert_eq!(format_number(f64::INFINITY, 0), "-");
}

#[test]
fn format_auto_drops_decimals_for_whole_numbers() {
    assert_eq!(format_auto(1200.0), "1,200");
    assert_eq!(format_auto(12.5), "12.50");
}

#[test]
fn short_date_drops_year() {
    assert_eq!(short_date("2024-01-02"), "01/02");
    assert_eq!(short_date("2024-12"), "12");
    assert_eq!(short_date("Monday"), "Monday");
}

#[test]
fn finite_sum_skips_nan() {
    assert_eq!(finite_sum(&[1.0, f64::NAN, 2.5]), 3.5);
    assert_eq!(finite_sum(&[]), 0.0);
}
