//! End-to-end tests for cardgate.
//!
//! These tests drive the public API the way a request handler does and cover
//! edge cases, real-world test numbers and masking guarantees.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

use cardgate::{
    cvv::{check_cvv, CvvError},
    detect::{classify, classify_str},
    luhn, mask, parse_expiration, passes_luhn, validate_card, validate_card_at, validate_cvv,
    CardInput, CardNetwork, CardNumber, Error, FormatError, ValidationError,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test card numbers from payment processors.
// They pass Luhn validation but are not real cards.

mod test_cards {
    // Visa
    pub const VISA_1: &str = "4834851062286596";
    pub const VISA_2: &str = "4111111111111111";
    pub const VISA_3: &str = "4012888888881881";
    pub const VISA_13: &str = "4222222222222";

    // MasterCard
    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_3: &str = "5200828282828210";

    // American Express
    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    // Discover
    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";

    // Diners Club
    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";

    // JCB
    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";
}

use test_cards::*;

/// Mid-September 2027, before the `10/27` expiration used throughout.
fn sept_2027() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2027, 9, 15, 8, 30, 0).unwrap()
}

fn input<'a>(card: &'a str, exp: &'a str, cvv: &'a str) -> CardInput<'a> {
    CardInput::new(card, exp, cvv)
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn test_classify_real_world_cards() {
    let cases = [
        (VISA_1, CardNetwork::Visa),
        (VISA_2, CardNetwork::Visa),
        (VISA_3, CardNetwork::Visa),
        (VISA_13, CardNetwork::Visa),
        (MC_1, CardNetwork::MasterCard),
        (MC_2, CardNetwork::MasterCard),
        (MC_3, CardNetwork::MasterCard),
        (AMEX_1, CardNetwork::AmericanExpress),
        (AMEX_2, CardNetwork::AmericanExpress),
        (AMEX_3, CardNetwork::AmericanExpress),
        (DISCOVER_1, CardNetwork::Discover),
        (DISCOVER_2, CardNetwork::Discover),
        (DINERS_1, CardNetwork::DinersClub),
        (DINERS_2, CardNetwork::DinersClub),
        (JCB_1, CardNetwork::Jcb),
        (JCB_2, CardNetwork::Jcb),
    ];

    for (card, expected) in cases {
        assert_eq!(classify_str(card), expected, "card {}", card);
        assert!(passes_luhn(card), "card {} should pass Luhn", card);
    }
}

#[test]
fn test_classify_lengths_outside_rules_are_unknown() {
    // Visa at 19 digits and MasterCard 2-series are not covered
    assert_eq!(classify_str("4111111111111111110"), CardNetwork::Unknown);
    assert_eq!(classify_str("2223000048400011"), CardNetwork::Unknown);
    // 34 prefix at 16 digits
    assert_eq!(classify_str("3400000000000009"), CardNetwork::Unknown);
    // JCB legacy prefixes
    assert_eq!(classify_str("213100000000003"), CardNetwork::Jcb);
    assert_eq!(classify_str("180000000000002"), CardNetwork::Jcb);
    assert_eq!(classify_str("2131000000000000"), CardNetwork::Unknown);
}

#[test]
fn test_classify_digits_and_str_agree() {
    let card = CardNumber::parse(DISCOVER_1).unwrap();
    assert_eq!(classify(card.digits()), classify_str(DISCOVER_1));
    assert_eq!(card.network(), CardNetwork::Discover);
}

// =============================================================================
// LUHN
// =============================================================================

#[test]
fn test_luhn_vectors_of_varying_lengths() {
    let valid = [
        "79927398713",
        VISA_13,
        DINERS_1,
        AMEX_1,
        VISA_1,
        MC_1,
    ];
    for card in valid {
        assert!(passes_luhn(card), "{} should pass", card);
    }

    let invalid = [
        "79927398710",
        "4222222222223",
        "30569309025905",
        "378282246310006",
        "4834851062286956",
    ];
    for card in invalid {
        assert!(!passes_luhn(card), "{} should fail", card);
    }
}

#[test]
fn test_luhn_check_digit_completes_number() {
    for card in [VISA_1, MC_2, AMEX_1, DISCOVER_1, DINERS_1, JCB_1] {
        let parsed = CardNumber::parse(card).unwrap();
        let (payload, check) = parsed.digits().split_at(parsed.len() - 1);
        assert_eq!(luhn::generate_check_digit(payload), check[0], "card {}", card);
    }
}

#[test]
fn test_luhn_rejects_non_digits() {
    assert!(!passes_luhn("4834 8510 6228 6596"));
    assert!(!passes_luhn("4834-8510-6228-6596"));
    assert!(!passes_luhn(""));
}

// =============================================================================
// CVV
// =============================================================================

#[test]
fn test_cvv_network_lengths() {
    assert!(validate_cvv(AMEX_3, "1234"));
    assert!(validate_cvv(VISA_1, "123"));
    assert!(validate_cvv(MC_1, "000"));
    assert!(validate_cvv(DISCOVER_1, "999"));

    assert!(!validate_cvv(VISA_1, "1234"));
    assert!(!validate_cvv(AMEX_1, "123"));
    assert!(!validate_cvv(VISA_1, "12a"));
    assert!(!validate_cvv(VISA_1, ""));
}

#[test]
fn test_cvv_never_accepted_without_rule() {
    for card in [DINERS_1, DINERS_2, JCB_1, JCB_2, "1234567890123456"] {
        for cvv in ["1", "12", "123", "1234", "12345"] {
            assert!(!validate_cvv(card, cvv), "{} / {}", card, cvv);
        }
    }
    assert_eq!(
        check_cvv(CardNetwork::Jcb, "123"),
        Err(CvvError::UnsupportedNetwork(CardNetwork::Jcb))
    );
}

// =============================================================================
// EXPIRATION
// =============================================================================

#[test]
fn test_expiration_in_the_past() {
    let exp = parse_expiration("01/20").unwrap();
    let after = Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap();
    assert!(!exp.is_valid_at(after));
    assert!(!exp.is_valid());
}

#[test]
fn test_expiration_current_month_is_not_valid() {
    let exp = parse_expiration("09/27").unwrap();
    assert!(!exp.is_valid_at(sept_2027()));

    let first_instant = Utc.with_ymd_and_hms(2027, 9, 1, 0, 0, 0).unwrap();
    assert!(!exp.is_valid_at(first_instant));
    assert!(exp.is_valid_at(first_instant - chrono::Duration::seconds(1)));
}

#[test]
fn test_expiration_next_month_is_valid() {
    let next = Utc::now()
        .date_naive()
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .unwrap();
    let date = format!("{:02}/{:02}", next.month(), next.year() % 100);

    let exp = parse_expiration(&date).unwrap();
    assert!(exp.is_valid(), "{} should be valid", date);
}

#[test]
fn test_expiration_malformed() {
    for bad in ["2027-01", "1/27", "01/2027", "01-27", "ab/cd", " 01/27", "01/27 "] {
        assert_eq!(
            parse_expiration(bad).unwrap_err(),
            FormatError::InvalidExpiration,
            "{:?}",
            bad
        );
    }
    assert_eq!(
        parse_expiration("13/27").unwrap_err(),
        FormatError::ExpirationMonthOutOfRange(13)
    );
    assert_eq!(
        parse_expiration("00/27").unwrap_err(),
        FormatError::ExpirationMonthOutOfRange(0)
    );
    assert_eq!(
        parse_expiration("").unwrap_err(),
        FormatError::MissingExpiration
    );
}

#[test]
fn test_expiration_century_pivot() {
    assert_eq!(parse_expiration("12/68").unwrap().year(), 2068);
    assert_eq!(parse_expiration("01/69").unwrap().year(), 1969);
    assert_eq!(parse_expiration("10/99").unwrap().year(), 1999);
    assert_eq!(parse_expiration("10/00").unwrap().year(), 2000);
}

// =============================================================================
// MASKING
// =============================================================================

#[test]
fn test_mask_card_number() {
    assert_eq!(
        mask::mask_card_number("4834851062286956"),
        "**** **** **** 6956"
    );
    assert_eq!(mask::mask_card_number(AMEX_1), "**** **** **** 0005");
    assert_eq!(mask::mask_card_number(VISA_13), "**** **** **** 2222");
}

#[test]
fn test_mask_cvv_is_fixed() {
    for cvv in ["", "1", "123", "1234", "123456"] {
        assert_eq!(mask::mask_cvv(cvv), "****");
    }
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_end_to_end_success() {
    let verdict = validate_card_at(&input(VISA_1, "10/27", "123"), sept_2027()).unwrap();

    assert!(verdict.is_valid());
    assert_eq!(verdict.network(), CardNetwork::Visa);
    assert_eq!(verdict.network().name(), "Visa");
    assert_eq!(verdict.card_number(), "**** **** **** 6596");
    assert_eq!(verdict.cvv(), "****");
    assert_eq!(verdict.expiration_date(), "10/27");
    assert!(verdict.is_valid_luhn());
    assert!(verdict.is_valid_expiration());
    assert!(verdict.is_valid_cvv());
}

#[test]
fn test_end_to_end_failed_luhn_keeps_verdict() {
    let verdict =
        validate_card_at(&input("4834851062286956", "10/27", "123"), sept_2027()).unwrap();

    assert!(!verdict.is_valid());
    assert!(!verdict.is_valid_luhn());
    assert!(verdict.is_valid_expiration());
    assert!(verdict.is_valid_cvv());
    assert_eq!(verdict.card_number(), "**** **** **** 6956");
    assert_eq!(verdict.network(), CardNetwork::Visa);
}

#[test]
fn test_end_to_end_expired_keeps_verdict() {
    let verdict = validate_card_at(&input(AMEX_1, "01/20", "1234"), sept_2027()).unwrap();

    assert!(!verdict.is_valid());
    assert!(verdict.is_valid_luhn());
    assert!(!verdict.is_valid_expiration());
    assert_eq!(verdict.expiration_date(), "01/20");
}

#[test]
fn test_end_to_end_bad_card_number() {
    let err = validate_card(&input("123abc", "10/27", "123")).unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::InvalidCardNumber {
            position: 3,
            character: 'a'
        })
    );
}

#[test]
fn test_end_to_end_gate_order() {
    // Card number first
    assert_eq!(
        validate_card(&input("", "", "")).unwrap_err(),
        Error::Format(FormatError::MissingCardNumber)
    );
    // Then expiration presence
    assert_eq!(
        validate_card(&input(VISA_1, "", "")).unwrap_err(),
        Error::Format(FormatError::MissingExpiration)
    );
    // Then expiration format
    assert_eq!(
        validate_card(&input(VISA_1, "2027-10", "")).unwrap_err(),
        Error::Format(FormatError::InvalidExpiration)
    );
    // Then CVV
    assert_eq!(
        validate_card(&input(VISA_1, "10/27", "")).unwrap_err(),
        Error::Validation(ValidationError::MissingCvv)
    );
    assert!(matches!(
        validate_card(&input(VISA_1, "10/27", "1234")).unwrap_err(),
        Error::Validation(ValidationError::Cvv(
            CvvError::WrongLengthForNetwork { .. }
        ))
    ));
}

#[test]
fn test_end_to_end_unknown_network_rejected_at_cvv() {
    let err = validate_card(&input("1234567890123456", "10/27", "123")).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::Cvv(CvvError::UnsupportedNetwork(
            CardNetwork::Unknown
        )))
    );
    assert_eq!(err.to_string(), "Invalid CVV provided for the given card type");
}

#[test]
fn test_nothing_sensitive_in_error_or_verdict() {
    let verdict = validate_card_at(&input(VISA_1, "10/27", "848"), sept_2027()).unwrap();
    let rendered = format!("{:?}", verdict);
    assert!(!rendered.contains(VISA_1));
    assert!(!rendered.contains("848"));

    let err = validate_card(&input(VISA_1, "10/27", "8481")).unwrap_err();
    let rendered = format!("{} {:?}", err, err);
    assert!(!rendered.contains(VISA_1));
    assert!(!rendered.contains("8481"));

    let debug = format!("{:?}", input(VISA_1, "10/27", "848"));
    assert!(!debug.contains(VISA_1));
    assert!(!debug.contains("848"));
}

#[test]
fn test_concurrent_validation() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100)
                    .map(|_| validate_card_at(&input(MC_2, "10/27", "123"), sept_2027()))
                    .all(|r| r.map(|v| v.is_valid()).unwrap_or(false))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
