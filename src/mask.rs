//! Masking of sensitive card data for responses and logs.
//!
//! - Card numbers keep only their last four characters behind a fixed
//!   `**** **** **** ` prefix, whatever the card length.
//! - CVVs are always replaced by exactly four asterisks, so the output does
//!   not reveal whether the CVV had three or four digits.
//!
//! Never log or return an unmasked card number or CVV.

/// Literal shown in place of every CVV.
pub const MASKED_CVV: &str = "****";

/// Prefix shown in place of everything but the last four digits.
pub const CARD_MASK_PREFIX: &str = "**** **** **** ";

/// Masks a raw card number.
///
/// Defined for raw digit strings of length four or more; shorter input keeps
/// all of its characters after the prefix. Masking an already-masked string
/// is not meaningful.
///
/// # Example
///
/// ```
/// use cardgate::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4834851062286956"), "**** **** **** 6956");
/// assert_eq!(mask_card_number("378282246310005"), "**** **** **** 0005");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let start = input
        .char_indices()
        .rev()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let mut result = String::with_capacity(CARD_MASK_PREFIX.len() + 4);
    result.push_str(CARD_MASK_PREFIX);
    result.push_str(&input[start..]);
    result
}

/// Masks a CVV. The input is ignored and `MASKED_CVV` is always returned.
#[inline]
pub fn mask_cvv(_cvv: &str) -> &'static str {
    MASKED_CVV
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same time wherever the slices differ. Length mismatch returns
/// early, which only leaks the length.
///
/// # Example
///
/// ```
/// use cardgate::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"secret-key", b"secret-key"));
/// assert!(!constant_time_eq(b"secret-key", b"secret-kez"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

/// String wrapper around [`constant_time_eq`].
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
