//! Resolver options.
//!
//! Options are read from JSON in the same camelCase shape as compiler
//! options, so `strictFunctionTypes` can be lifted straight out of a project
//! config.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Codes that never describe a type conflict: unused declarations,
/// unresolved names, and use-before-declaration.
pub const DEFAULT_IGNORED_CODES: [u32; 4] = [6133, 2304, 2448, 2454];

/// Accepts `true`, `false`, or a string spelling of either.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

fn default_ignored_codes() -> Vec<u32> {
    DEFAULT_IGNORED_CODES.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoundOptions {
    /// Explicit `false` relaxes return comparisons to one direction.
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict_function_types: Option<bool>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_ignored_codes")]
    pub ignored_codes: Vec<u32>,
}

impl Default for HoundOptions {
    fn default() -> Self {
        Self {
            strict_function_types: None,
            verbose: false,
            ignored_codes: default_ignored_codes(),
        }
    }
}

impl HoundOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_ignored(&self, code: u32) -> bool {
        self.ignored_codes.contains(&code)
    }

    /// Whether return statements are compared in both directions.
    pub fn returns_both_ways(&self) -> bool {
        self.strict_function_types != Some(false)
    }
}
