/// Build a WhatsApp deep-link for a phone number and message text.
///
/// The wa.me scheme takes bare digits (no `+`, spaces or dashes) and a
/// percent-encoded message. No network call is made; deliverability is the
/// operator's problem.
pub fn wa_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wa_link_strips_formatting() {
        let link = wa_link("+91 98765-43210", "hello");
        assert_eq!(link, "https://wa.me/919876543210?text=hello");
    }

    #[test]
    fn test_wa_link_encodes_message() {
        let link = wa_link("+919876543210", "Payment of ₹1500 due on 31-01-2024\nThanks!");
        let (base, query) = link.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/919876543210");
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%20"));
        assert!(query.contains("%0A"));
    }
}
