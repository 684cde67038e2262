use std::fmt;
use std::str::FromStr;

use regex::Regex;

use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = 256;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// A user supplied email-address, trimmed but otherwise kept as entered
#[derive(Debug, PartialEq, Clone)]
pub struct EmailAddress(String);

impl FromStr for EmailAddress {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            static ref EMAIL_REGEX: Regex =
                Regex::new(r"^[\w'%+-]([\w'%+.-]*[\w'%+-])?@(\w([\w-]*\w)?\.)+\w{2,}$").unwrap();
        }

        let value = value.trim();

        if value.is_empty() {
            return Err(INVALID_EMAIL.into());
        }
        if value.graphemes(true).count() > MAX_LEN {
            return Err("Email address too long".into());
        }
        if value.contains("..") || !EMAIL_REGEX.is_match(value) {
            return Err(INVALID_EMAIL.into());
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
