use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

/// Shortest abbreviated id accepted anywhere in the tool.
pub const MIN_LEN: usize = 7;
/// Length of a full SHA-1 object id.
pub const MAX_LEN: usize = 40;

static FULL_MATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-f0-9]{7,40}$").expect("valid commit id regex"));

static EMBEDDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-f0-9]{7,40}\b").expect("valid commit token regex"));

/// A hexadecimal commit id, 7 to 40 characters, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitRef(String);

impl CommitRef {
    /// Accept `s` only if the whole string (after trimming) is a commit id.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        FULL_MATCH
            .is_match(s)
            .then(|| Self(s.to_ascii_lowercase()))
    }

    /// First hex token of 7..=40 characters embedded in free text.
    pub fn find_in(text: &str) -> Option<Self> {
        EMBEDDED
            .find(text)
            .map(|m| Self(m.as_str().to_ascii_lowercase()))
    }

    /// Keep at most `len` leading characters, never going below `MIN_LEN`.
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.clamp(MIN_LEN, MAX_LEN);
        Self(self.0.chars().take(len).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a manually entered commit id was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    Invalid,
    TooShort,
}

impl FromStr for CommitRef {
    type Err = InputRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_input(s)
    }
}

/// Validate text typed by the user at the commit id prompt.
///
/// # Errors
/// `Invalid` for empty input, non-hex characters or more than 40 characters;
/// `TooShort` for fewer than 7 hex characters.
pub fn validate_input(input: &str) -> Result<CommitRef, InputRejection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputRejection::Invalid);
    }
    if !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InputRejection::Invalid);
    }
    if trimmed.len() < MIN_LEN {
        return Err(InputRejection::TooShort);
    }
    CommitRef::parse(trimmed).ok_or(InputRejection::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let c = CommitRef::parse("  ABCDEF1\n").expect("valid");
        assert_eq!(c.as_str(), "abcdef1");
    }

    #[test]
    fn parse_rejects_bounds() {
        assert!(CommitRef::parse("abcdef").is_none());
        assert!(CommitRef::parse(&"a".repeat(41)).is_none());
        assert!(CommitRef::parse(&"a".repeat(40)).is_some());
    }

    #[test]
    fn find_in_requires_word_boundary() {
        assert_eq!(
            CommitRef::find_in("Fixed in 24a2f307 by someone").map(|c| c.to_string()),
            Some("24a2f307".to_string())
        );
        assert!(CommitRef::find_in("deadbeefz").is_none());
        assert!(CommitRef::find_in("short abc123 token").is_none());
    }

    #[test]
    fn truncated_keeps_prefix() {
        let full = CommitRef::parse(&"0123456789abcdef".repeat(2)).expect("valid");
        assert_eq!(full.truncated(8).as_str(), "01234567");
    }

    #[test]
    fn validate_input_classifies_rejections() {
        assert_eq!(validate_input(""), Err(InputRejection::Invalid));
        assert_eq!(validate_input("   "), Err(InputRejection::Invalid));
        assert_eq!(validate_input("abc12"), Err(InputRejection::TooShort));
        assert_eq!(validate_input("xyz1234"), Err(InputRejection::Invalid));
        assert_eq!(validate_input(&"f".repeat(41)), Err(InputRejection::Invalid));
        assert_eq!(
            validate_input("24A2F307").map(|c| c.to_string()),
            Ok("24a2f307".to_string())
        );
    }

    #[test]
    fn from_str_follows_prompt_validation() {
        assert_eq!("abc12".parse::<CommitRef>(), Err(InputRejection::TooShort));
        assert_eq!("HEAD~1".parse::<CommitRef>(), Err(InputRejection::Invalid));
        assert_eq!(
            "ABCDEF1".parse::<CommitRef>().map(|c| c.to_string()),
            Ok("abcdef1".to_string())
        );
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_of_valid_length_is_accepted(s in "[a-fA-F0-9]{7,40}") {
                prop_assert!(validate_input(&s).is_ok());
                prop_assert!(CommitRef::parse(&s).is_some());
            }

            #[test]
            fn short_hex_is_rejected(s in "[a-f0-9]{1,6}") {
                prop_assert_eq!(validate_input(&s), Err(InputRejection::TooShort));
                prop_assert!(CommitRef::parse(&s).is_none());
            }

            #[test]
            fn any_non_hex_char_is_rejected(
                prefix in "[a-f0-9]{0,20}",
                bad in "[g-zG-Z_./-]",
                suffix in "[a-f0-9]{0,19}",
            ) {
                let s = format!("{prefix}{bad}{suffix}");
                prop_assert_eq!(validate_input(&s), Err(InputRejection::Invalid));
                prop_assert!(CommitRef::parse(&s).is_none());
            }
        }
    }
}
