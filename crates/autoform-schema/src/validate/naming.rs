use crate::MAX_FIELD_NAME_LEN;

/// Ensure an object field identifier is well-formed.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("field ident is empty".to_string());
    }
    if ident.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !ident.is_ascii() {
        return Err(format!("field ident '{ident}' must be ASCII"));
    }
    // dots are reserved for nested field paths
    if ident.contains('.') {
        return Err(format!("field ident '{ident}' must not contain '.'"));
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_idents() {
        assert!(validate_ident("ice_cream_flavor").is_ok());
        assert!(validate_ident("required string").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_ident("").is_err());
    }

    #[test]
    fn rejects_dots() {
        assert!(validate_ident("name.first").is_err());
    }

    #[test]
    fn rejects_over_long() {
        let long = "a".repeat(MAX_FIELD_NAME_LEN + 1);
        assert!(validate_ident(&long).is_err());
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(validate_ident("prénom").is_err());
    }
}
