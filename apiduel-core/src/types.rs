// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Newtype wrappers and core measurement records.
//!
//! `ScenarioName` validates its invariants at creation time so that every
//! scenario identifier in a results artifact is well-formed by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated scenario identifier.
/// Must be non-empty, alphanumeric with hyphens/underscores, max 64 chars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScenarioName(String);

impl ScenarioName {
    /// Create a new ScenarioName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::InvalidScenarioName {
                name,
                reason: "Scenario name cannot be empty".to_string(),
            });
        }

        if name.len() > 64 {
            return Err(ValidationError::InvalidScenarioName {
                reason: format!("Scenario name too long: {} chars (max 64)", name.len()),
                name,
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidScenarioName {
                name,
                reason:
                    "Scenario name must contain only alphanumeric characters, hyphens, and underscores"
                        .to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ScenarioName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScenarioName> for String {
    fn from(name: ScenarioName) -> Self {
        name.0
    }
}

/// The two API styles under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStyle {
    Rest,
    Graphql,
}

impl fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStyle::Rest => write!(f, "REST"),
            ApiStyle::Graphql => write!(f, "GraphQL"),
        }
    }
}

/// One paired observation: elapsed wall-clock time and raw body length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Elapsed time from request send to full body received, in milliseconds.
    pub elapsed_ms: f64,
    /// Raw response body length in bytes.
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scenario_name() {
        let name = ScenarioName::new("simple_user").unwrap();
        assert_eq!(name.as_str(), "simple_user");
        assert_eq!(name.to_string(), "simple_user");
    }

    #[test]
    fn test_empty_scenario_name_rejected() {
        assert!(ScenarioName::new("").is_err());
    }

    #[test]
    fn test_scenario_name_invalid_chars_rejected() {
        assert!(ScenarioName::new("has spaces").is_err());
        assert!(ScenarioName::new("has/slash").is_err());
    }

    #[test]
    fn test_scenario_name_too_long_rejected() {
        let long = "x".repeat(65);
        assert!(ScenarioName::new(long).is_err());
    }

    #[test]
    fn test_scenario_name_serde_round_trip() {
        let name = ScenarioName::new("nested_data").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"nested_data\"");
        let back: ScenarioName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_api_style_display() {
        assert_eq!(ApiStyle::Rest.to_string(), "REST");
        assert_eq!(ApiStyle::Graphql.to_string(), "GraphQL");
    }
}
