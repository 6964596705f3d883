// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Scenario definitions: one REST endpoint paired with an equivalent
//! GraphQL query, at three levels of data-fetching complexity.

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::ScenarioName;

/// A fixed pair of equivalent REST/GraphQL queries.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: ScenarioName,
    /// REST endpoint path, relative to the REST base URL.
    pub rest_path: String,
    /// GraphQL query text sent as the `query` field.
    pub graphql_query: String,
    /// Optional `variables` mapping for the GraphQL request.
    pub variables: Option<Value>,
}

impl Scenario {
    pub fn new(
        name: &str,
        rest_path: impl Into<String>,
        graphql_query: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ScenarioName::new(name)?,
            rest_path: rest_path.into(),
            graphql_query: graphql_query.into(),
            variables: None,
        })
    }
}

/// The three built-in complexity levels.
///
/// REST always answers with its fixed payload; GraphQL selects only the
/// fields each scenario names, which is where the payload-size difference
/// comes from.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "simple_user",
            "/api/users/1",
            "{ user(id: 1) { name email } }",
        )
        .expect("builtin scenario name is valid"),
        Scenario::new(
            "user_with_posts",
            "/api/users/1/full",
            "{ user(id: 1) { name email posts(limit: 5) { title } } }",
        )
        .expect("builtin scenario name is valid"),
        Scenario::new(
            "nested_data",
            "/api/users/1/full",
            "{ user(id: 1) { name email posts(limit: 5) { title likes comments(limit: 3) { author text } } } }",
        )
        .expect("builtin scenario name is valid"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenarios() {
        let scenarios = builtin_scenarios();
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].name.as_str(), "simple_user");
        assert_eq!(scenarios[0].rest_path, "/api/users/1");
        assert!(scenarios[2].graphql_query.contains("comments(limit: 3)"));
        assert!(scenarios.iter().all(|s| s.variables.is_none()));
    }
}
