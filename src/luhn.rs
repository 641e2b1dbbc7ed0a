//! Luhn (mod 10) checksum.
//!
//! Walking the digits from the right, every second digit is doubled (minus 9
//! when the result exceeds 9) and everything is summed. The number is valid
//! when the sum is a multiple of 10. Linear time, constant space.

/// Doubled digit with 9 subtracted when the product exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digits (0-9) with the Luhn algorithm.
///
/// Empty input is never valid.
///
/// # Example
///
/// ```
/// use cardgate::luhn::validate;
///
/// assert!(validate(&[4, 8, 3, 4, 8, 5, 1, 0, 6, 2, 2, 8, 6, 5, 9, 6]));
/// assert!(!validate(&[4, 8, 3, 4, 8, 5, 1, 0, 6, 2, 2, 8, 6, 9, 5, 6]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// Index 0 is the rightmost digit; odd indices are doubled.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass `validate`.
///
/// # Example
///
/// ```
/// use cardgate::luhn::generate_check_digit;
///
/// let partial = [4, 8, 3, 4, 8, 5, 1, 0, 6, 2, 2, 8, 6, 5, 9];
/// assert_eq!(generate_check_digit(&partial), 6);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one place left once the check digit is appended
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_valid_numbers() {
        for number in [
            "4834851062286596",
            "4111111111111111",
            "4222222222222",
            "5105105105105100",
            "378282246310005",
            "6011111111111117",
            "30569309025904",
            "3530111333300000",
            "340000000000009",
            "79927398713",
        ] {
            assert!(validate(&digits(number)), "{} should pass", number);
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for number in [
            // Sums to 76; the transposed 4834851062286596 is the valid one
            "4834851062286956",
            "4111111111111112",
            "1234567890123456",
            "378282246310006",
            "79927398710",
        ] {
            assert!(!validate(&digits(number)), "{} should fail", number);
        }
    }

    #[test]
    fn test_checksum_value() {
        // Classic worked example: 7992739871x sums to 70 with x = 3
        assert_eq!(compute_checksum(&digits("79927398713")), 70);
    }

    #[test]
    fn test_generate_check_digit() {
        assert_eq!(generate_check_digit(&digits("483485106228659")), 6);
        assert_eq!(generate_check_digit(&digits("483485106228695")), 0);
        assert_eq!(generate_check_digit(&digits("37828224631000")), 5);
        assert_eq!(generate_check_digit(&digits("7992739871")), 3);
    }

    #[test]
    fn test_empty_and_single_digit() {
        assert!(!validate(&[]));
        assert!(validate(&[0]));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
