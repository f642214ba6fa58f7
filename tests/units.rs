use station_keeping::units::{
    LengthUnit, format_length, format_significant, parse_length, sanitize_numeric,
};

#[test]
fn typed_lengths_scale_by_unit() {
    assert_eq!(parse_length("12.5", LengthUnit::Mm), 12_500_000.0);
    assert_eq!(parse_length("429", LengthUnit::Km), 429_000.0);
    assert_eq!(parse_length("3", LengthUnit::Gm), 3.0e9);
    assert_eq!(parse_length("7", LengthUnit::default()), 7.0e6);
}

#[test]
fn stray_characters_are_dropped_before_parsing() {
    assert_eq!(sanitize_numeric("-1,234.5.6 km"), "1234.56");
    let metres = parse_length("-1,234.5.6 km", LengthUnit::Km);
    assert!((metres - 1_234_560.0).abs() < 1e-6);
    assert_eq!(parse_length(".5", LengthUnit::Mm), 500_000.0);
    assert_eq!(parse_length("12.", LengthUnit::Km), 12_000.0);
}

#[test]
fn empty_input_parses_as_zero() {
    assert_eq!(parse_length("", LengthUnit::Mm), 0.0);
    assert_eq!(parse_length(".", LengthUnit::Gm), 0.0);
    assert_eq!(parse_length("abc", LengthUnit::Km), 0.0);
}

#[test]
fn units_parse_from_their_symbols() {
    assert_eq!("km".parse::<LengthUnit>(), Ok(LengthUnit::Km));
    assert_eq!("Mm".parse::<LengthUnit>(), Ok(LengthUnit::Mm));
    assert_eq!("GM".parse::<LengthUnit>(), Ok(LengthUnit::Gm));
    assert!("AU".parse::<LengthUnit>().is_err());
    assert_eq!(LengthUnit::Gm.to_string(), "Gm");
}

#[test]
fn lengths_use_the_largest_prefix_above_one_thousand() {
    assert_eq!(format_length(0.0), "0 m");
    assert_eq!(format_length(500.0), "500 m");
    assert_eq!(format_length(1_000.0), "1000 m");
    assert_eq!(format_length(429_000.0), "429 km");
    assert_eq!(format_length(1_234_567.0), "1.235 Mm");
    assert_eq!(format_length(2_863_334.04), "2.863 Mm");
    assert_eq!(format_length(6.9e6), "6.9 Mm");
    assert_eq!(format_length(1.2e10), "12 Gm");
}

#[test]
fn prefixes_stop_at_tera() {
    assert_eq!(format_length(3.0e16), "3E+04 Tm");
}

#[test]
fn significant_digits_switch_to_scientific_at_the_extremes() {
    assert_eq!(format_significant(0.000_012_34, 4), "0.00001234");
    assert_eq!(format_significant(0.000_001_2, 4), "1.2E-06");
    assert_eq!(format_significant(9_999.0, 4), "9999");
    assert_eq!(format_significant(12_346.0, 4), "1.235E+04");
    assert_eq!(format_significant(-42.5, 4), "-42.5");
}

#[test]
fn exact_ties_round_away_from_zero() {
    assert_eq!(format_length(0.015_625), "0.01563 m");
    assert_eq!(format_significant(2.5, 1), "3");
    assert_eq!(format_significant(-0.125, 2), "-0.13");
    assert_eq!(format_significant(9.999_5, 4), "10");
    assert_eq!(format_significant(99_995.0, 4), "1E+05");
}
