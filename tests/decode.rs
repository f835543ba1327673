use placard::decode;
use placard::split::{Field, SplitError, fields, split_first};

#[test]
fn decode_empty_input() {
    assert_eq!(decode("").unwrap(), "");
}

#[test]
fn decode_single_fixed_field() {
    assert_eq!(decode("0112345678901231").unwrap(), "(01)12345678901231");
}

#[test]
fn decode_single_variable_field() {
    // AI 10 allows up to twenty characters; the six remaining are all taken.
    assert_eq!(decode("10ABC123").unwrap(), "(10)ABC123");
}

#[test]
fn decode_chained_fixed_fields() {
    assert_eq!(
        decode("011234567890123117250101").unwrap(),
        "(01)12345678901231(17)250101",
    );
}

#[test]
fn decode_four_digit_ai() {
    assert_eq!(decode("800412345").unwrap(), "(8004)12345");
}

#[test]
fn variable_field_takes_at_least_one_character() {
    assert_eq!(decode("101").unwrap(), "(10)1");
}

#[test]
fn variable_field_stops_at_declared_maximum() {
    // Twenty-five characters follow AI 10; only twenty belong to it, and
    // decoding resumes at the next AI.
    let input = "10ABCDEFGHIJKLMNOPQRST0112345678901231";
    assert_eq!(
        decode(input).unwrap(),
        "(10)ABCDEFGHIJKLMNOPQRST(01)12345678901231",
    );
}

#[test]
fn variable_field_fills_declared_maximum_exactly() {
    // AI 7010 caps at two characters, and exactly two remain.
    assert_eq!(decode("7010AB").unwrap(), "(7010)AB");
}

#[test]
fn variant_digit_joins_the_ai_code() {
    // 310x is a four-character AI with a six-digit fixed field, whatever
    // the fourth digit is.
    for variant in '0'..='9' {
        let input = format!("310{variant}123456");
        let expected = format!("(310{variant})123456");
        assert_eq!(decode(&input).unwrap(), expected);

        let (field, rest) = split_first(&input).unwrap();
        assert_eq!(field.ai.len(), 4);
        assert_eq!(field.data, "123456");
        assert_eq!(rest, "");
    }
}

#[test]
fn batch_ai_703_consumes_a_variant_digit() {
    assert_eq!(decode("7031ABC").unwrap(), "(7031)ABC");
}

#[test]
fn unmatched_prefix_fails_with_empty_output() {
    let err = decode("XXABC").unwrap_err();
    assert_eq!(err.kind, SplitError::UnknownAi);
    assert_eq!(err.parsed, "");
}

#[test]
fn variable_field_requires_one_character() {
    // AI 99 alone leaves nothing for its field.
    let err = decode("99").unwrap_err();
    assert_eq!(err.kind, SplitError::Truncated);
    assert_eq!(err.parsed, "");
}

#[test]
fn fixed_field_requires_its_full_width() {
    // AI 00 demands eighteen digits; nine are present.
    let err = decode("00123456789").unwrap_err();
    assert_eq!(err.kind, SplitError::Truncated);
    assert_eq!(err.parsed, "");
}

#[test]
fn failure_retains_earlier_fields() {
    let err = decode("0112345678901231XX").unwrap_err();
    assert_eq!(err.kind, SplitError::UnknownAi);
    assert_eq!(err.parsed, "(01)12345678901231");
}

#[test]
fn fields_yields_each_pair_then_the_error() {
    let mut fields = fields("0112345678901231XX");

    assert_eq!(
        fields.next(),
        Some(Ok(Field {
            ai: "01",
            data: "12345678901231",
        })),
    );
    assert_eq!(fields.next(), Some(Err(SplitError::UnknownAi)));
    assert_eq!(fields.next(), None);
}

#[test]
fn fields_yields_nothing_for_empty_input() {
    assert_eq!(fields("").next(), None);
}

#[test]
fn field_displays_in_bracketed_form() {
    let field = Field {
        ai: "10",
        data: "ABC123",
    };
    assert_eq!(field.to_string(), "(10)ABC123");
}

#[test]
fn multi_byte_input_fails_without_panicking() {
    // AI 20 takes two characters; the boundary lands inside the é.
    let err = decode("20aé").unwrap_err();
    assert_eq!(err.kind, SplitError::Truncated);
    assert_eq!(err.parsed, "");
}

#[test]
fn error_reports_the_stopping_reason() {
    let err = decode("99").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Too few characters remain for the matched Application Identifier.",
    );
}
