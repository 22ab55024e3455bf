// Validation helpers for the save-query form

pub const QUERY_NAME_MAX: usize = 100;
pub const QUERY_DESCRIPTION_MAX: usize = 500;

/// Validate a saved-query name: required, at most 100 characters.
pub fn validate_query_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".into());
    }
    if name.chars().count() > QUERY_NAME_MAX {
        return Err(format!("Name must be {QUERY_NAME_MAX} characters or fewer"));
    }
    Ok(())
}

/// Validate a saved-query description: optional, at most 500 characters.
pub fn validate_query_description(description: &str) -> Result<(), String> {
    if description.chars().count() > QUERY_DESCRIPTION_MAX {
        return Err(format!("Description must be {QUERY_DESCRIPTION_MAX} characters or fewer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_requires_non_whitespace() {
        assert!(validate_query_name("").is_err());
        assert!(validate_query_name("   ").is_err());
        assert!(validate_query_name("\t\n").is_err());
        assert!(validate_query_name("a").is_ok());
        assert!(validate_query_name("  active users  ").is_ok());
    }

    #[test]
    fn test_name_length_limit() {
        let max = "n".repeat(QUERY_NAME_MAX);
        assert!(validate_query_name(&max).is_ok());
        let over = "n".repeat(QUERY_NAME_MAX + 1);
        assert!(validate_query_name(&over).is_err());
    }

    #[test]
    fn test_description_is_optional_but_bounded() {
        assert!(validate_query_description("").is_ok());
        let max = "d".repeat(QUERY_DESCRIPTION_MAX);
        assert!(validate_query_description(&max).is_ok());
        let over = "d".repeat(QUERY_DESCRIPTION_MAX + 1);
        assert!(validate_query_description(&over).is_err());
    }
}
