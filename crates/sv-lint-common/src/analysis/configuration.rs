//! The per-rule configuration grammar.
//!
//! A configuration is a single string of `option[:value]` clauses separated
//! by semicolons, with whitespace trimmed around names and values:
//!
//! ```text
//! length:120; allow-dash-for-underscore:on
//! ```
//!
//! Booleans accept `on`/`off`/`true`/`false`/`1`/`0` case-insensitively, and
//! a bare option name means `on`. Integers are decimal. Unknown options are
//! rejected eagerly; missing options take their declared defaults.

use std::fmt;

use thiserror::Error;

use super::descriptor::{LintRuleDescriptor, ParameterType};

/// Configuration failures, surfaced to the driver before any linting runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("rule '{rule}' has no configuration option '{option}'")]
    UnknownOption { rule: String, option: String },

    #[error("rule '{rule}' option '{option}': expected {expected}, got '{value}'")]
    InvalidValue {
        rule: String,
        option: String,
        expected: &'static str,
        value: String,
    },

    #[error("rule '{rule}' option '{option}': {value} is outside [{min}, {max}]")]
    OutOfRange {
        rule: String,
        option: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown rule '{rule}'")]
    UnknownRule { rule: String },
}

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Boolean(true) => write!(f, "on"),
            ParameterValue::Boolean(false) => write!(f, "off"),
            ParameterValue::Integer(value) => write!(f, "{}", value),
            ParameterValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Typed option values for one rule instance, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParameters {
    values: Vec<(&'static str, ParameterValue)>,
}

impl RuleParameters {
    /// All declared options at their default values.
    pub fn defaults(descriptor: &'static LintRuleDescriptor) -> Self {
        let values = descriptor
            .parameters
            .iter()
            .map(|param| {
                let value = match param.param_type {
                    ParameterType::Boolean => {
                        ParameterValue::Boolean(parse_boolean(param.default_value).unwrap_or(false))
                    }
                    ParameterType::Integer => {
                        ParameterValue::Integer(param.default_value.parse().unwrap_or(0))
                    }
                    ParameterType::Text => ParameterValue::Text(param.default_value.to_string()),
                };
                (param.name, value)
            })
            .collect();
        Self { values }
    }

    /// Parse a configuration string against the descriptor's schema.
    pub fn parse(
        descriptor: &'static LintRuleDescriptor,
        configuration: &str,
    ) -> Result<Self, ConfigurationError> {
        let mut parameters = Self::defaults(descriptor);
        for clause in configuration.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let (name, value) = match clause.split_once(':') {
                Some((name, value)) => (name.trim(), Some(value.trim())),
                None => (clause, None),
            };
            let Some(param) = descriptor.parameter(name) else {
                return Err(ConfigurationError::UnknownOption {
                    rule: descriptor.name.to_string(),
                    option: name.to_string(),
                });
            };
            let parsed = match param.param_type {
                ParameterType::Boolean => match value {
                    // A bare boolean option means "on".
                    None => ParameterValue::Boolean(true),
                    Some(text) => ParameterValue::Boolean(parse_boolean(text).ok_or_else(|| {
                        ConfigurationError::InvalidValue {
                            rule: descriptor.name.to_string(),
                            option: param.name.to_string(),
                            expected: "boolean (on|off|true|false|1|0)",
                            value: text.to_string(),
                        }
                    })?),
                },
                ParameterType::Integer => {
                    let text = value.unwrap_or("");
                    ParameterValue::Integer(text.parse().map_err(|_| {
                        ConfigurationError::InvalidValue {
                            rule: descriptor.name.to_string(),
                            option: param.name.to_string(),
                            expected: "integer",
                            value: text.to_string(),
                        }
                    })?)
                }
                ParameterType::Text => ParameterValue::Text(value.unwrap_or("").to_string()),
            };
            parameters.set(param.name, parsed);
        }
        Ok(parameters)
    }

    fn set(&mut self, name: &'static str, value: ParameterValue) {
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        }
    }

    fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn boolean(&self, name: &str) -> bool {
        match self.get(name) {
            Some(ParameterValue::Boolean(value)) => *value,
            _ => false,
        }
    }

    pub fn integer(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(ParameterValue::Integer(value)) => *value,
            _ => 0,
        }
    }

    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(ParameterValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Canonical form of the current values: `name:value;…` in declared
    /// order. Parsing the echo reproduces the same values.
    pub fn echo(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("on")
        || text.eq_ignore_ascii_case("true")
        || text == "1"
    {
        Some(true)
    } else if text.eq_ignore_ascii_case("off")
        || text.eq_ignore_ascii_case("false")
        || text == "0"
    {
        Some(false)
    } else {
        None
    }
}
