//! IMEI input handling and the placeholder lookup rule.
//!
//! There is no Luhn or TAC check here. The outcome is keyed off the last
//! digit only, which is what the demo registry promises.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const IMEI_LENGTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImeiError {
    #[error("IMEI must be 15 digits, got {length}")]
    WrongLength { length: usize },

    #[error("IMEI contains a non-digit at position {position}")]
    NonDigit { position: usize },
}

/// Exactly fifteen ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Imei(String);

impl Imei {
    pub fn parse(raw: &str) -> Result<Self, ImeiError> {
        let length = raw.chars().count();
        if length != IMEI_LENGTH {
            return Err(ImeiError::WrongLength { length });
        }
        if let Some(position) = raw.chars().position(|c| !c.is_ascii_digit()) {
            return Err(ImeiError::NonDigit { position });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn last_digit(&self) -> u8 {
        // parse() guarantees a trailing ASCII digit
        self.0.as_bytes()[IMEI_LENGTH - 1] - b'0'
    }
}

impl fmt::Display for Imei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Imei {
    type Error = ImeiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Imei::parse(&value)
    }
}

impl From<Imei> for String {
    fn from(imei: Imei) -> Self {
        imei.0
    }
}

/// Outcome of an IMEI lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationResult {
    Valid,
    NotFound,
    Stolen,
}

impl VerificationResult {
    pub fn headline(&self) -> &'static str {
        match self {
            VerificationResult::Valid => "Smartphone is valid",
            VerificationResult::NotFound => "IMEI not found",
            VerificationResult::Stolen => "This smartphone is reported stolen",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VerificationResult::Valid => {
                "This device is authentic and has no security issues."
            }
            VerificationResult::NotFound => {
                "This IMEI is not in our database. The device may be new or unregistered."
            }
            VerificationResult::Stolen => {
                "This device has been flagged in our security database. Do not proceed with any transaction."
            }
        }
    }

    /// Whether the "Register Sale or Purchase" shortcut is offered.
    pub fn allows_registration(&self) -> bool {
        !matches!(self, VerificationResult::Stolen)
    }
}

/// Mocked details shown with a `Valid` result.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceInformation {
    pub brand: &'static str,
    pub model: &'static str,
    pub status: &'static str,
}

/// Mocked case file shown with a `Stolen` result.
#[derive(Clone, Debug, PartialEq)]
pub struct TheftReport {
    pub reported: &'static str,
    pub case_id: &'static str,
    pub status: &'static str,
}

pub fn device_information() -> DeviceInformation {
    DeviceInformation {
        brand: "Apple",
        model: "iPhone 14 Pro",
        status: "Clean",
    }
}

pub fn theft_report() -> TheftReport {
    TheftReport {
        reported: "3 days ago",
        case_id: "STL-2024-001",
        status: "Active Investigation",
    }
}

/// Maps the last digit to an outcome: 0-6 valid, 7-8 not found, 9 stolen.
pub fn classify_imei(imei: &Imei) -> VerificationResult {
    match imei.last_digit() {
        0..=6 => VerificationResult::Valid,
        7 | 8 => VerificationResult::NotFound,
        _ => VerificationResult::Stolen,
    }
}

/// Keystroke filter for IMEI fields: digits only, at most fifteen.
pub fn sanitize_imei_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(IMEI_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imei_ending_in(digit: char) -> Imei {
        Imei::parse(&format!("35678901234567{}", digit)).unwrap()
    }

    #[test]
    fn test_classify_by_last_digit() {
        for digit in '0'..='6' {
            assert_eq!(classify_imei(&imei_ending_in(digit)), VerificationResult::Valid);
        }
        for digit in ['7', '8'] {
            assert_eq!(classify_imei(&imei_ending_in(digit)), VerificationResult::NotFound);
        }
        assert_eq!(classify_imei(&imei_ending_in('9')), VerificationResult::Stolen);
    }

    #[test]
    fn test_example_imeis() {
        let cases = [
            ("356789012345678", VerificationResult::NotFound),
            ("356789012345676", VerificationResult::Valid),
            ("356789012345679", VerificationResult::Stolen),
        ];
        for (raw, expected) in cases {
            assert_eq!(classify_imei(&Imei::parse(raw).unwrap()), expected, "{}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Imei::parse("35678901234567"),
            Err(ImeiError::WrongLength { length: 14 })
        );
        assert_eq!(
            Imei::parse("3567890123456789"),
            Err(ImeiError::WrongLength { length: 16 })
        );
        assert_eq!(Imei::parse(""), Err(ImeiError::WrongLength { length: 0 }));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            Imei::parse("35678901234567a"),
            Err(ImeiError::NonDigit { position: 14 })
        );
    }

    #[test]
    fn test_sanitize_strips_and_truncates() {
        assert_eq!(sanitize_imei_input("35-67 89"), "356789");
        assert_eq!(sanitize_imei_input("abc"), "");
        assert_eq!(
            sanitize_imei_input("35678901234567890123"),
            "356789012345678"
        );
        assert_eq!(sanitize_imei_input("٣٥٦"), "");
    }

    #[test]
    fn test_stolen_withholds_registration() {
        assert!(VerificationResult::Valid.allows_registration());
        assert!(VerificationResult::NotFound.allows_registration());
        assert!(!VerificationResult::Stolen.allows_registration());
    }

    #[test]
    fn test_imei_serde_validates() {
        let imei: Imei = serde_json::from_str("\"356789012345678\"").unwrap();
        assert_eq!(imei.as_str(), "356789012345678");
        assert!(serde_json::from_str::<Imei>("\"123\"").is_err());
    }
}
