//! Pure domain validators for Brazilian documents, phone numbers and
//! billing values.
//!
//! Each function is total over its input: it either returns the
//! normalized value (digits only for documents and phones) or a
//! `Validation` error. They run before any persistence call.

use crate::error::{AppError, AppResult};

fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a CPF (Brazilian national ID).
///
/// Strips punctuation, requires exactly 11 digits, rejects all-same-digit
/// sequences, and recomputes both check digits with the standard
/// weighted-sum-mod-11 algorithm. Returns the stripped digits.
pub fn validate_cpf(cpf: &str) -> AppResult<String> {
    let clean = digits_only(cpf);

    if clean.len() != 11 {
        return Err(AppError::validation("cpf", "CPF must contain 11 digits"));
    }

    let digits: Vec<u32> = clean.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(AppError::validation("cpf", "Invalid CPF"));
    }

    // First check digit: weights 10..2 over the first 9 digits
    let sum: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (10 - i as u32))
        .sum();
    let check1 = match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    };
    if digits[9] != check1 {
        return Err(AppError::validation("cpf", "Invalid CPF"));
    }

    // Second check digit: weights 11..2 over the first 10 digits
    let sum: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (11 - i as u32))
        .sum();
    let check2 = match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    };
    if digits[10] != check2 {
        return Err(AppError::validation("cpf", "Invalid CPF"));
    }

    Ok(clean)
}

/// Validates an optional CPF, passing `None` through.
pub fn validate_cpf_opt(cpf: Option<&str>) -> AppResult<Option<String>> {
    cpf.map(validate_cpf).transpose()
}

/// Validates a Brazilian phone number (landline or mobile).
///
/// Accepts formatted input like "(11) 98765-4321"; returns digits only.
/// Requires 10 or 11 digits, an area code between 11 and 99, and for
/// 11-digit numbers the third digit must be '9'.
pub fn validate_phone(phone: &str) -> AppResult<String> {
    if phone.trim().is_empty() {
        return Err(AppError::validation("phone", "Phone is required"));
    }

    let clean = digits_only(phone);

    if clean.len() != 10 && clean.len() != 11 {
        return Err(AppError::validation(
            "phone",
            "Phone must have 10 (landline) or 11 (mobile) digits including area code",
        ));
    }

    let area_code: u32 = clean[..2].parse().unwrap_or(0);
    if !(11..=99).contains(&area_code) {
        return Err(AppError::validation("phone", "Invalid area code"));
    }

    if clean.len() == 11 && clean.as_bytes()[2] != b'9' {
        return Err(AppError::validation(
            "phone",
            "Mobile numbers must start with 9 after the area code",
        ));
    }

    Ok(clean)
}

/// Validates that a monetary amount is not negative.
pub fn validate_amount(amount: f64, field: &str) -> AppResult<f64> {
    if amount < 0.0 {
        return Err(AppError::validation(field, "Amount must not be negative"));
    }
    Ok(amount)
}

/// Validates a billing day of month, in [1, 31].
pub fn validate_billing_day(day: i32) -> AppResult<i32> {
    if !(1..=31).contains(&day) {
        return Err(AppError::validation(
            "billing_day",
            "Billing day must be between 1 and 31",
        ));
    }
    Ok(day)
}

/// Validates an optional billing day, passing `None` through.
pub fn validate_billing_day_opt(day: Option<i32>) -> AppResult<Option<i32>> {
    day.map(validate_billing_day).transpose()
}

/// Validates a MEI registration number: exactly 14 digits, format only,
/// no checksum. Returns digits only.
pub fn validate_mei(mei: &str) -> AppResult<String> {
    let clean = digits_only(mei);

    if clean.len() != 14 {
        return Err(AppError::validation("mei", "MEI must contain 14 digits"));
    }

    Ok(clean)
}

/// Validates an optional MEI, treating empty strings as absent.
pub fn validate_mei_opt(mei: Option<&str>) -> AppResult<Option<String>> {
    match mei {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => validate_mei(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_cpf_accepted_and_stripped() {
        assert_eq!(validate_cpf("11144477735").unwrap(), "11144477735");
        assert_eq!(validate_cpf("111.444.777-35").unwrap(), "11144477735");
    }

    #[test]
    fn test_all_same_digit_cpf_rejected() {
        assert!(validate_cpf("11111111111").is_err());
        assert!(validate_cpf("000.000.000-00").is_err());
    }

    #[test]
    fn test_wrong_check_digit_rejected() {
        // Valid CPF with the last digit flipped
        assert!(validate_cpf("11144477736").is_err());
        // And with the first check digit flipped
        assert!(validate_cpf("11144477745").is_err());
    }

    #[test]
    fn test_wrong_length_cpf_rejected() {
        assert!(validate_cpf("1114447773").is_err());
        assert!(validate_cpf("").is_err());
    }

    #[test]
    fn test_optional_cpf_passes_none() {
        assert_eq!(validate_cpf_opt(None).unwrap(), None);
        assert_eq!(
            validate_cpf_opt(Some("11144477735")).unwrap(),
            Some("11144477735".to_string())
        );
    }

    #[test]
    fn test_valid_mobile_phone() {
        assert_eq!(validate_phone("11987654321").unwrap(), "11987654321");
        assert_eq!(validate_phone("(11) 98765-4321").unwrap(), "11987654321");
    }

    #[test]
    fn test_valid_landline_phone() {
        assert_eq!(validate_phone("1134567890").unwrap(), "1134567890");
    }

    #[test]
    fn test_mobile_without_nine_rejected() {
        assert!(validate_phone("11887654321").is_err());
    }

    #[test]
    fn test_short_phone_rejected() {
        assert!(validate_phone("119876543").is_err());
    }

    #[test]
    fn test_invalid_area_code_rejected() {
        assert!(validate_phone("10987654321").is_err());
        assert!(validate_phone("0934567890").is_err());
    }

    #[test]
    fn test_empty_phone_rejected() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("   ").is_err());
    }

    #[test]
    fn test_amount_zero_is_accepted() {
        assert_eq!(validate_amount(0.0, "amount").unwrap(), 0.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(validate_amount(-0.01, "amount").is_err());
    }

    #[test]
    fn test_billing_day_bounds() {
        assert_eq!(validate_billing_day(1).unwrap(), 1);
        assert_eq!(validate_billing_day(31).unwrap(), 31);
        assert!(validate_billing_day(0).is_err());
        assert!(validate_billing_day(32).is_err());
    }

    #[test]
    fn test_mei_format() {
        assert_eq!(validate_mei("12.345.678/0001-95").unwrap(), "12345678000195");
        assert!(validate_mei("1234567890").is_err());
    }

    #[test]
    fn test_empty_mei_treated_as_absent() {
        assert_eq!(validate_mei_opt(Some("")).unwrap(), None);
        assert_eq!(validate_mei_opt(None).unwrap(), None);
    }

    /// Computes the two CPF check digits for a 9-digit prefix.
    fn cpf_check_digits(prefix: &[u32; 9]) -> (u32, u32) {
        let sum: u32 = prefix
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (10 - i as u32))
            .sum();
        let d1 = match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        };
        let sum: u32 = prefix
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (11 - i as u32))
            .sum::<u32>()
            + d1 * 2;
        let d2 = match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        };
        (d1, d2)
    }

    proptest! {
        #[test]
        fn prop_well_formed_cpfs_validate(prefix in proptest::array::uniform9(0u32..10)) {
            prop_assume!(!prefix.iter().all(|&d| d == prefix[0]));
            let (d1, d2) = cpf_check_digits(&prefix);
            let cpf: String = prefix
                .iter()
                .chain([&d1, &d2])
                .map(|d| char::from_digit(*d, 10).unwrap())
                .collect();
            prop_assert_eq!(validate_cpf(&cpf).unwrap(), cpf);
        }

        #[test]
        fn prop_validated_phones_are_digits(raw in "\\(?[1-9][1-9]\\)? ?9[0-9]{4}-?[0-9]{4}") {
            let normalized = validate_phone(&raw).unwrap();
            prop_assert_eq!(normalized.len(), 11);
            prop_assert!(normalized.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
