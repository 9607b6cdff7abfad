//! Document id check digit validation.
//!
//! Manually issued document ids carry a Luhn-style check digit guarding
//! against transcription errors. Ids in the reserved ranges (leading 1, 8,
//! 9, or the REG prefix) predate the scheme and are accepted as-is.

/// Validate a document id with the checksum algorithm.
///
/// The id must be exactly 8 characters. Digits at positions 1, 3, and 5 are
/// doubled (summing the digits of any two-digit product) and added to the
/// digits at positions 0, 2, 4, and 6; the final character must equal
/// `(10 - sum % 10) % 10`.
pub fn checksum_valid(doc_id: &str) -> bool {
    if doc_id.chars().count() != 8 {
        return false;
    }
    if doc_id.starts_with('1')
        || doc_id.starts_with('8')
        || doc_id.starts_with('9')
        || doc_id.starts_with("REG")
    {
        return true;
    }
    let Some(digits) = doc_id
        .chars()
        .map(|ch| ch.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };
    let check_digit = digits[7];
    let mut sum = 0;
    for (position, digit) in digits[..7].iter().enumerate() {
        if position % 2 == 1 {
            let doubled = digit * 2;
            sum += if doubled > 9 { doubled - 9 } else { doubled };
        } else {
            sum += digit;
        }
    }
    let remainder = sum % 10;
    if remainder == 0 {
        check_digit == 0
    } else {
        10 - remainder == check_digit
    }
}
