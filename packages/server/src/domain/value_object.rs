//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum number of characters allowed in a [`Text`] or a [`Title`].
pub const MAX_TEXT_LENGTH: usize = 255;

/// Cut `value` to at most `MAX_TEXT_LENGTH` characters for error display.
fn truncate_for_display(value: &str) -> String {
    value.chars().take(MAX_TEXT_LENGTH).collect()
}

/// Message text value object.
///
/// Represents the body of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Text(String);

impl Text {
    /// Create a new Text.
    ///
    /// # Arguments
    ///
    /// * `value` - The message text
    ///
    /// # Returns
    ///
    /// A Result containing the Text or an error if validation fails
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::TextEmpty);
        }
        let len = value.chars().count();
        if len > MAX_TEXT_LENGTH {
            return Err(ValueObjectError::TextTooLong {
                text: truncate_for_display(&value),
                max: MAX_TEXT_LENGTH,
                actual: len,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying primitive value.
    pub fn as_generic_type(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Text {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chat title value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a new Title.
    ///
    /// # Arguments
    ///
    /// * `value` - The chat title
    ///
    /// # Returns
    ///
    /// A Result containing the Title or an error if validation fails
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::TitleEmpty);
        }
        let len = value.chars().count();
        if len > MAX_TEXT_LENGTH {
            return Err(ValueObjectError::TitleTooLong {
                title: truncate_for_display(&value),
                max: MAX_TEXT_LENGTH,
                actual: len,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying primitive value.
    pub fn as_generic_type(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(kaiwa_shared::time::get_utc_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// RFC 3339 representation, used by HTTP responses.
    pub fn to_rfc3339(&self) -> String {
        kaiwa_shared::time::timestamp_to_rfc3339(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
