//! Stop name keys and indices.

use std::fmt;

/// Error returned when a name cannot be turned into a stop key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name {input:?}: {reason}")]
pub struct InvalidStopKey {
    input: String,
    reason: &'static str,
}

/// Normalize free text into the form used for stop keys.
///
/// Whitespace is removed and letters are folded to lowercase, so
/// `"Rajiv Chowk"`, `"rajivchowk"` and `" RAJIV  CHOWK "` all map to the
/// same key.
pub fn normalize_stop_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A normalized stop name.
///
/// Keys contain no whitespace and no uppercase letters. Every `StopKey`
/// is non-empty by construction.
///
/// # Examples
///
/// ```
/// use metro_router::domain::StopKey;
///
/// let key = StopKey::normalize("Civil Lines").unwrap();
/// assert_eq!(key.as_str(), "civillines");
///
/// // Blank input has no key
/// assert!(StopKey::normalize("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopKey(String);

impl StopKey {
    /// Build a key from arbitrary text, normalizing it first.
    pub fn normalize(input: &str) -> Result<Self, InvalidStopKey> {
        let normalized = normalize_stop_name(input);
        if normalized.is_empty() {
            return Err(InvalidStopKey {
                input: input.to_string(),
                reason: "name is empty after removing whitespace",
            });
        }
        Ok(StopKey(normalized))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopKey({})", self.0)
    }
}

impl fmt::Display for StopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of a stop within a built network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalized names never contain whitespace or uppercase ASCII
        #[test]
        fn normalized_is_clean(s in "[A-Za-z0-9 \t]{0,30}") {
            let n = normalize_stop_name(&s);
            prop_assert!(!n.chars().any(char::is_whitespace));
            prop_assert!(!n.chars().any(|c| c.is_ascii_uppercase()));
        }

        /// Normalizing twice is the same as normalizing once
        #[test]
        fn normalize_idempotent(s in "[A-Za-z0-9 ]{0,30}") {
            let once = normalize_stop_name(&s);
            prop_assert_eq!(normalize_stop_name(&once), once.clone());
        }

        /// Any name with at least one visible character yields a key
        #[test]
        fn visible_names_have_keys(s in " {0,3}[a-zA-Z][a-zA-Z ]{0,20}") {
            prop_assert!(StopKey::normalize(&s).is_ok());
        }
    }
}
