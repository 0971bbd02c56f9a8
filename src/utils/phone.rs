/// Normalize a phone number to international format.
///
/// Strips every non-digit character, then: 12 digits starting with the
/// country code 91 get a `+` prefix, bare 10-digit numbers get `+91`, and
/// anything longer than 10 digits gets a `+`. Shorter inputs come back as
/// their digits unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 && digits.starts_with("91") {
        return format!("+{digits}");
    }
    if digits.len() == 10 {
        return format!("+91{digits}");
    }
    if digits.len() > 10 {
        return format!("+{digits}");
    }

    digits
}

/// Validate a phone number. Accepts 10 digits, 12 digits starting with 91,
/// or a 13-character input with a literal `+91` prefix (i.e. an already
/// normalized number). The last branch checks the raw input rather than the
/// digit count; see DESIGN.md for why this deviates from the first two.
pub fn validate_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        return true;
    }
    if digits.len() == 12 && digits.starts_with("91") {
        return true;
    }
    if phone.len() == 13 && phone.starts_with("+91") {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("9876543210"), "+919876543210");
        assert_eq!(format_phone("919876543210"), "+919876543210");
        assert_eq!(format_phone("+91 98765 43210"), "+919876543210");
        assert_eq!(format_phone("98765-43210"), "+919876543210");
        assert_eq!(format_phone("4412345678901"), "+4412345678901");
        // Ambiguous short input passes through as digits.
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_format_phone_idempotent() {
        for raw in ["9876543210", "919876543210", "+919876543210", "12345", "4412345678901"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once);
        }
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210"));
        assert!(validate_phone("919876543210"));
        assert!(validate_phone("+919876543210"));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("98765432101")); // 11 digits
        assert!(!validate_phone("929876543210")); // 12 digits, wrong prefix
    }
}
