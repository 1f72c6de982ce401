//! Name validation.
//!
//! Names are trimmed before every check and before storage; the validators
//! return the trimmed name so callers never store an untrimmed value.

use crate::error::DomainError;

/// Minimum accepted name length, after trimming.
pub const NAME_MIN: usize = 1;
/// Maximum accepted name length, after trimming.
pub const NAME_MAX: usize = 100;

/// Validates a list name against the length rule and the names of the other
/// lists on the board.
///
/// Uniqueness is a case-sensitive exact match. Callers renaming a list must
/// exclude that list's own name from `existing`, so renaming a list to its
/// unchanged name succeeds.
///
/// # Errors
///
/// [`DomainError::InvalidLength`] when the trimmed length is outside
/// [`NAME_MIN`]..=[`NAME_MAX`]; [`DomainError::DuplicateName`] on collision.
pub fn validate_list_name<'a, I>(name: &str, existing: I) -> Result<String, DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.trim();
    check_length(name, "List name")?;

    if existing.into_iter().any(|other| other == name) {
        return Err(DomainError::DuplicateName);
    }

    Ok(name.to_string())
}

/// Validates a todo name. Todos have no uniqueness constraint.
///
/// # Errors
///
/// [`DomainError::InvalidLength`] when the trimmed length is outside
/// [`NAME_MIN`]..=[`NAME_MAX`].
pub fn validate_todo_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    check_length(name, "Todo name")?;
    Ok(name.to_string())
}

fn check_length(trimmed: &str, field: &'static str) -> Result<(), DomainError> {
    let len = trimmed.chars().count();
    if (NAME_MIN..=NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(DomainError::InvalidLength(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_lengths() {
        assert_eq!(validate_todo_name("a"), Ok("a".to_string()));
        let max = "x".repeat(100);
        assert_eq!(validate_todo_name(&max), Ok(max));
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert_eq!(
            validate_list_name("", std::iter::empty()),
            Err(DomainError::InvalidLength("List name"))
        );
        assert_eq!(
            validate_list_name("   ", std::iter::empty()),
            Err(DomainError::InvalidLength("List name"))
        );
        assert_eq!(
            validate_todo_name("\t \n"),
            Err(DomainError::InvalidLength("Todo name"))
        );
    }

    #[test]
    fn rejects_over_maximum() {
        let long = "x".repeat(101);
        assert_eq!(
            validate_list_name(&long, std::iter::empty()),
            Err(DomainError::InvalidLength("List name"))
        );
        assert_eq!(
            validate_todo_name(&long),
            Err(DomainError::InvalidLength("Todo name"))
        );
    }

    #[test]
    fn trims_before_length_check() {
        // 100 chars of payload surrounded by whitespace is still valid
        let padded = format!("  {}  ", "x".repeat(100));
        assert_eq!(validate_todo_name(&padded), Ok("x".repeat(100)));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 100 multibyte chars trim to a valid name even though the byte
        // length exceeds the limit
        let name = "é".repeat(100);
        assert_eq!(validate_todo_name(&name), Ok(name));
    }

    #[test]
    fn duplicate_is_case_sensitive_exact_match() {
        let existing = ["Groceries", "Chores"];
        assert_eq!(
            validate_list_name("Groceries", existing),
            Err(DomainError::DuplicateName)
        );
        // Different case is a different name
        assert_eq!(
            validate_list_name("groceries", existing),
            Ok("groceries".to_string())
        );
    }

    #[test]
    fn duplicate_check_runs_on_trimmed_name() {
        assert_eq!(
            validate_list_name("  Groceries ", ["Groceries"]),
            Err(DomainError::DuplicateName)
        );
    }
}
