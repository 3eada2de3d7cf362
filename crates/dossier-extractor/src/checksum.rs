//! Identifier checksum validation

/// Validate an LEI's ISO 7064 mod 97-10 check digits
///
/// The 20-character string (18 alphanumeric + 2 check digits) is read as a
/// base-10 number with letters mapped A=10..Z=35; it is valid when the
/// whole number is congruent to 1 mod 97. Lowercase input is rejected -
/// LEIs are uppercase by definition.
pub fn lei_is_valid(lei: &str) -> bool {
    if lei.len() != 20 {
        return false;
    }
    if !lei.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()) {
        return false;
    }
    // Check digits are numeric
    if !lei[18..].bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut remainder: u32 = 0;
    for b in lei.bytes() {
        let value = if b.is_ascii_digit() {
            (b - b'0') as u32
        } else {
            (b - b'A') as u32 + 10
        };

        if value < 10 {
            remainder = (remainder * 10 + value) % 97;
        } else {
            remainder = (remainder * 100 + value) % 97;
        }
    }

    remainder == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    // Real published LEIs
    const APPLE_LEI: &str = "HWUPKR0MPOU8FGXBT394";
    const MICROSOFT_LEI: &str = "INR2EJN1ERAN0W5ZP974";
    const TESLA_LEI: &str = "54930043XZGB27CTOV49";

    #[test]
    fn test_known_leis_validate() {
        assert!(lei_is_valid(APPLE_LEI));
        assert!(lei_is_valid(MICROSOFT_LEI));
        assert!(lei_is_valid(TESLA_LEI));
    }

    #[test]
    fn test_corrupted_check_digit_rejected() {
        // Off-by-one in the check digits shifts the remainder off 1
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT395"));
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT393"));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT39"));
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT3940"));
        assert!(!lei_is_valid(""));
    }

    #[test]
    fn test_bad_charset_rejected() {
        assert!(!lei_is_valid("hwupkr0mpou8fgxbt394"));
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT39!"));
        // Alphabetic check digits are not allowed
        assert!(!lei_is_valid("HWUPKR0MPOU8FGXBT3A4"));
    }
}
