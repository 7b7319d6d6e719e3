//! Tests for the linear conversion rule and the unit table

use unicon::convert::{ConversionRule, ConvertError, LinearUnit, Rounding};

#[test]
fn test_truncates_toward_zero() {
    let samples = [0.0, 1.0, 2.5, 10.0, 33.3, 99.99, 1234.5678, -7.0, -0.5];
    let factors = [1.0, 2.54, 3.0, 25.4, 453.6, 0.4536];

    for &f in &factors {
        let rule = ConversionRule::linear(f, "u");
        for &v in &samples {
            let got = rule.apply(&[v]).unwrap()[0];
            let expected = (v / f * 100.0).trunc() / 100.0;
            assert_eq!(got, expected, "v={} f={}", v, f);
            assert!(got.abs() <= (v / f).abs() * (1.0 + 1e-12), "v={} f={}", v, f);
        }
    }
}

#[test]
fn test_one_third_truncates_down() {
    let rule = ConversionRule::linear(3.0, "u");
    assert_eq!(rule.convert_and_format(&[1.0]).unwrap(), "0.33 u");
}

#[test]
fn test_zero_factor_never_panics() {
    let rule = ConversionRule::linear(0.0, "in");
    assert_eq!(rule.apply(&[]), Err(ConvertError::ZeroFactor));
    assert_eq!(rule.apply(&[5.0]), Err(ConvertError::ZeroFactor));
    assert_eq!(rule.convert_and_format(&[5.0]), Err(ConvertError::ZeroFactor));
}

#[test]
fn test_centimeter_dimensions() {
    let rule = LinearUnit::Centimeters.rule();
    assert_eq!(
        rule.convert_and_format(&[10.0, 20.0, 5.0]).unwrap(),
        "3.93 x 7.87 x 1.96 in"
    );
}

#[test]
fn test_grams_to_pounds() {
    let rule = LinearUnit::Grams.rule();
    assert_eq!(rule.convert_and_format(&[453.6]).unwrap(), "1.0 lbs");
    assert_eq!(rule.convert_and_format(&[1000.0]).unwrap(), "2.2 lbs");
}

#[test]
fn test_rounding_is_configurable() {
    let rule = ConversionRule::linear(3.0, "u").with_rounding(Rounding::TwoDecimalPlaces);
    assert_eq!(rule.convert_and_format(&[2.0]).unwrap(), "0.67 u");
}

#[test]
fn test_overflowing_input_is_out_of_range() {
    use unicon::cli::convert_line;

    let huge = "1".repeat(400);
    assert_eq!(
        convert_line(LinearUnit::Centimeters, &huge),
        Err(ConvertError::OutOfRange)
    );
}

#[test]
fn test_large_result_uses_shortest_form() {
    use unicon::cli::convert_line;

    let rendered = convert_line(LinearUnit::Centimeters, "100000000000000000000").unwrap();
    assert!(rendered.starts_with("3.93700787401574"), "{}", rendered);
    assert!(rendered.ends_with("e19 in"), "{}", rendered);
}
