use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

const MIN_LEN: usize = 2;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";

/// A user supplied display name
#[derive(Debug, PartialEq, Clone)]
pub struct PersonName(String);

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.graphemes(true).count() < MIN_LEN {
            return Err(NAME_TOO_SHORT.into());
        }
        Ok(Self(value.to_string()))
    }
}
