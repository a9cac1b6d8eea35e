//! Receiver address list validation.

use super::FormError;

/// Minimal `local@domain.tld` shape check: exactly one `@`, no whitespace,
/// and a dotted domain with non-empty labels around the last dot.
pub fn is_email(addr: &str) -> bool {
    if addr.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = addr.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !tld.is_empty()
}

/// Split a comma-separated receiver list, trim each entry, and require every
/// entry to be a plausible address. An empty list is invalid.
///
/// Returns the trimmed entries; the submission payload keeps the raw string.
pub fn validate_receiver_list(raw: &str) -> Result<Vec<String>, FormError> {
    if raw.trim().is_empty() {
        return Err(FormError::InvalidEmailList);
    }
    let receivers: Vec<String> = raw.split(',').map(|part| part.trim().to_string()).collect();
    if receivers.iter().all(|addr| is_email(addr)) {
        Ok(receivers)
    } else {
        Err(FormError::InvalidEmailList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_comma_separated_addresses() {
        let list = validate_receiver_list("a@b.com, c@d.com").expect("valid list");
        assert_eq!(list, vec!["a@b.com".to_string(), "c@d.com".to_string()]);
    }

    #[test]
    fn rejects_list_with_one_bad_entry() {
        assert_eq!(
            validate_receiver_list("a@b.com, not-an-email"),
            Err(FormError::InvalidEmailList)
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate_receiver_list(""), Err(FormError::InvalidEmailList));
        assert_eq!(
            validate_receiver_list("   "),
            Err(FormError::InvalidEmailList)
        );
    }

    #[test]
    fn rejects_trailing_comma() {
        assert_eq!(
            validate_receiver_list("a@b.com,"),
            Err(FormError::InvalidEmailList)
        );
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_email("user@mail.example.org"));
        assert!(!is_email("user@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("user@example."));
        assert!(!is_email("us er@example.com"));
        assert!(!is_email("user@@example.com"));
    }
}
