use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("Please enter both first and last name")]
    MissingPart,
}

/// Builds a `"First Last"` display name from trimmed parts.
pub fn validate_full_name(first: &str, last: &str) -> Result<String, NameViolation> {
    let first = first.trim();
    let last = last.trim();
    if first.is_empty() || last.is_empty() {
        return Err(NameViolation::MissingPart);
    }
    Ok(format!("{first} {last}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_are_trimmed_and_joined() {
        assert_eq!(validate_full_name("  Ann ", "Lee "), Ok("Ann Lee".to_string()));
        assert_eq!(validate_full_name("Mary", "van Dijk"), Ok("Mary van Dijk".to_string()));
    }

    #[test]
    fn test_blank_part_is_rejected() {
        assert_eq!(validate_full_name("Ann", "   "), Err(NameViolation::MissingPart));
        assert_eq!(validate_full_name("", "Lee"), Err(NameViolation::MissingPart));
    }
}
