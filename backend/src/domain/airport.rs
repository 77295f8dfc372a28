//! Airport code value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`AirportCode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirportCodeValidationError {
    /// Input was empty after trimming.
    Empty,
    /// Input was not 3 or 4 characters long.
    WrongLength { actual: usize },
    /// Input contained characters outside ASCII letters and digits.
    InvalidCharacters,
}

impl fmt::Display for AirportCodeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "airport code must not be empty"),
            Self::WrongLength { actual } => {
                write!(f, "airport code must be 3 or 4 characters, got {actual}")
            }
            Self::InvalidCharacters => {
                write!(f, "airport code may only contain letters and digits")
            }
        }
    }
}

impl std::error::Error for AirportCodeValidationError {}

/// Normalised IATA or ICAO airport code.
///
/// Construction trims surrounding whitespace and uppercases the input, then
/// requires 3 or 4 ASCII alphanumeric characters. The normalised form is
/// what adapters send to lookup providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Validate and construct an [`AirportCode`], normalising the input.
    pub fn new(code: impl AsRef<str>) -> Result<Self, AirportCodeValidationError> {
        let normalised = code.as_ref().trim().to_ascii_uppercase();
        if normalised.is_empty() {
            return Err(AirportCodeValidationError::Empty);
        }
        let length = normalised.chars().count();
        if !(3..=4).contains(&length) {
            return Err(AirportCodeValidationError::WrongLength { actual: length });
        }
        if !normalised.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AirportCodeValidationError::InvalidCharacters);
        }
        Ok(Self(normalised))
    }

    /// Borrow the normalised code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AirportCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<AirportCode> for String {
    fn from(value: AirportCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for AirportCode {
    type Error = AirportCodeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::iata("jfk", "JFK")]
    #[case::icao("kjfk", "KJFK")]
    #[case::padded("  teb ", "TEB")]
    fn accepts_and_normalises(#[case] input: &str, #[case] expected: &str) {
        let code = AirportCode::new(input).expect("valid code");
        assert_eq!(code.as_str(), expected);
    }

    #[rstest]
    #[case::empty("", AirportCodeValidationError::Empty)]
    #[case::blank("   ", AirportCodeValidationError::Empty)]
    #[case::too_short("jf", AirportCodeValidationError::WrongLength { actual: 2 })]
    #[case::too_long("kjfkx", AirportCodeValidationError::WrongLength { actual: 5 })]
    #[case::punctuation("jf-", AirportCodeValidationError::InvalidCharacters)]
    fn rejects_bad_shapes(#[case] input: &str, #[case] expected: AirportCodeValidationError) {
        let err = AirportCode::new(input).expect_err("invalid code");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn serde_round_trips_normalised_form() {
        let code = AirportCode::new("teb").expect("valid code");
        let json = serde_json::to_string(&code).expect("serialise");
        assert_eq!(json, "\"TEB\"");
        let parsed: AirportCode = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, code);
    }
}
