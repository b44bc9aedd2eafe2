//! Drawing title validation
//!
//! Titles are free text up to 200 characters. An absent title defaults
//! to "Untitled"; an explicit empty string is kept as given.

use super::ValidationError;

/// Maximum length for drawing titles, in characters
const MAX_TITLE_LEN: usize = 200;

/// Title used when a create request omits the field
pub const DEFAULT_TITLE: &str = "Untitled";

/// Validated drawing title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingTitle(String);

impl DrawingTitle {
    /// Create a new title, enforcing the length cap.
    ///
    /// Counts characters, not bytes, to match the VARCHAR(200) column.
    ///
    /// # Example
    /// ```
    /// use drawpad_server::models::DrawingTitle;
    ///
    /// assert!(DrawingTitle::new("Cat").is_ok());
    /// assert!(DrawingTitle::new("").is_ok());
    /// assert!(DrawingTitle::new(&"x".repeat(201)).is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for DrawingTitle {
    fn default() -> Self {
        Self(DEFAULT_TITLE.to_owned())
    }
}

impl AsRef<str> for DrawingTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_titles() {
        assert!(DrawingTitle::new("Cat").is_ok());
        assert!(DrawingTitle::new("my drawing (draft 2)").is_ok());
    }

    #[test]
    fn empty_is_allowed() {
        let title = DrawingTitle::new("").expect("empty title rejected");
        assert_eq!(title.as_str(), "");
    }

    #[test]
    fn max_length_is_in_characters() {
        // 200 multibyte chars is 400 bytes but still within the cap
        let title_200 = "é".repeat(200);
        assert!(DrawingTitle::new(&title_200).is_ok());

        let title_201 = "é".repeat(201);
        let err = DrawingTitle::new(&title_201).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 200, .. }));
    }

    #[test]
    fn default_is_untitled() {
        assert_eq!(DrawingTitle::default().as_str(), "Untitled");
    }
}
