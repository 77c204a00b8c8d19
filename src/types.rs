use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdentityError;

/// The three countries the address generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Country {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "AU")]
    Au,
}

impl Country {
    pub fn code(self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Ca => "CA",
            Country::Au => "AU",
        }
    }
}

impl FromStr for Country {
    type Err = IdentityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" | "USA" | "UNITED STATES" | "UNITED STATES OF AMERICA" => Ok(Country::Us),
            "CA" | "CAN" | "CANADA" => Ok(Country::Ca),
            "AU" | "AUS" | "AUSTRALIA" => Ok(Country::Au),
            _ => Err(IdentityError::UnsupportedCountry(s.to_string())),
        }
    }
}

impl TryFrom<String> for Country {
    type Error = IdentityError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

/// A postal address. `region` and `postcode` are either both sentinel
/// (reserved, non-routable) values or both drawn from the real space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    /// Always empty.
    pub line2: String,
    pub city: String,
    pub region: String,
    pub postcode: String,
    pub country: Country,
}

/// A full fictitious record as handed to callers of the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Parameters for one identity.
///
/// Deserializes from the request payload shape, where `format_valid`
/// (bool or "true"/"false" string) is the inverse of `guarantee_nonexistent`.
/// A payload that sets neither flag asks for format-valid addresses; the CLI
/// flips this through `GeneratorConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawIdentityRequest")]
pub struct IdentityRequest {
    pub country: String,
    pub guarantee_nonexistent: bool,
    pub email_domain: Option<String>,
}

impl Default for IdentityRequest {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            guarantee_nonexistent: false,
            email_domain: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn as_bool(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Text(s) => !s.trim().eq_ignore_ascii_case("false"),
        }
    }
}

#[derive(Deserialize)]
struct RawIdentityRequest {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    guarantee_nonexistent: Option<bool>,
    #[serde(default)]
    format_valid: Option<FlagValue>,
    #[serde(default)]
    email_domain: Option<String>,
}

impl From<RawIdentityRequest> for IdentityRequest {
    fn from(raw: RawIdentityRequest) -> Self {
        // format_valid wins when both flags are present
        let guarantee_nonexistent = match raw.format_valid {
            Some(flag) => !flag.as_bool(),
            None => raw.guarantee_nonexistent.unwrap_or(false),
        };
        Self {
            country: raw.country.unwrap_or_else(|| "US".to_string()),
            guarantee_nonexistent,
            email_domain: raw.email_domain,
        }
    }
}
