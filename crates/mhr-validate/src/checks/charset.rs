//! Free-text character set validation.
//!
//! Registry names and free-text fields are limited to the character set the
//! downstream registry system can store: printable ASCII plus an approved
//! set of accented Latin letters and typographic punctuation. Anything else
//! (for example mathematical alphanumeric symbols pasted from formatted
//! documents) is rejected.

use mhr_model::{Party, PersonName, ValidationIssue};

use crate::messages;

/// Accepted characters beyond printable ASCII.
const APPROVED_EXTENDED: &str = "\
ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÑÒÓÔÕÖØÙÚÛÜÝ\
àáâãäåæçèéêëìíîïñòóôõöøùúûüýÿ\
’‘“”–";

/// Returns true when every character of `value` is in the allowed set.
pub fn allowed_text(value: &str) -> bool {
    value
        .chars()
        .all(|ch| matches!(ch, ' '..='~') || APPROVED_EXTENDED.contains(ch))
}

/// Verify text characters are valid for the named field.
pub fn check_text(value: Option<&str>, desc: &str) -> Vec<ValidationIssue> {
    match value {
        Some(text) if !text.is_empty() && !allowed_text(text) => {
            vec![ValidationIssue::structural(messages::character_set_unsupported(desc, text))]
        }
        _ => Vec::new(),
    }
}

/// Verify an individual name is valid.
pub fn check_individual_name(name: &PersonName, desc: &str) -> Vec<ValidationIssue> {
    let mut issues = check_text(Some(&name.first), &format!("{desc} first"));
    issues.extend(check_text(Some(&name.last), &format!("{desc} last")));
    issues.extend(check_text(name.middle.as_deref(), &format!("{desc} middle")));
    issues
}

/// Verify party names are valid. Business name wins over person name.
pub fn check_party(party: &Party, desc: &str) -> Vec<ValidationIssue> {
    if party.business_name.is_some() {
        check_text(party.business_name.as_deref(), &format!("{desc} business name"))
    } else if let Some(person) = party.person_name.as_ref() {
        check_individual_name(person, &format!("{desc} person name"))
    } else {
        Vec::new()
    }
}

/// Verify the submitting party is present and its names are valid.
pub fn check_submitting_party(party: Option<&Party>) -> Vec<ValidationIssue> {
    let Some(party) = party else {
        return vec![ValidationIssue::structural(messages::SUBMITTING_REQUIRED)];
    };
    let desc = "submitting party";
    if party.business_name.is_some() {
        check_text(party.business_name.as_deref(), &format!("{desc} business name"))
    } else if let Some(person) = party.person_name.as_ref() {
        check_individual_name(person, desc)
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_approved_accents_pass() {
        assert!(allowed_text("BOB PATERSON HOMES INC."));
        assert!(allowed_text("RENÉE D'ENTREMONT"));
        assert!(allowed_text("#101 - 1234 MAIN ST."));
    }

    #[test]
    fn mathematical_alphanumerics_fail() {
        assert!(!allowed_text("TEST \u{1d5c4}\u{1d5c6}/\u{1d5c1} INVALID"));
    }

    #[test]
    fn unsupported_text_names_the_field() {
        let issues = check_text(Some("TEST \u{1d5c4}"), "owner organization name");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("The character set is not supported"));
        assert!(issues[0].message.contains("owner organization name"));
    }

    #[test]
    fn missing_submitting_party_is_required() {
        let issues = check_submitting_party(None);
        assert_eq!(issues[0].message, messages::SUBMITTING_REQUIRED);
    }
}
