//! Name-keyed registry of rule registrations.
//!
//! A registration binds a rule's descriptor to a factory producing fresh
//! instances; the driver uses it to register rules by name with an optional
//! configuration string. The default registry is assembled once by the rule
//! crate and shared read-only afterwards.

use std::collections::HashMap;

use super::configuration::ConfigurationError;
use super::descriptor::LintRuleDescriptor;
use super::rule::AnyRule;

/// Produces a fresh, unconfigured rule instance.
pub type RuleFactory = fn() -> AnyRule;

#[derive(Clone, Copy)]
pub struct RuleRegistration {
    pub descriptor: &'static LintRuleDescriptor,
    pub factory: RuleFactory,
}

#[derive(Default)]
pub struct RuleRegistry {
    registrations: Vec<RuleRegistration>,
    index: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Names must be unique; a duplicate replaces the
    /// earlier registration but keeps its position.
    pub fn register(&mut self, registration: RuleRegistration) {
        let name = registration.descriptor.name;
        match self.index.get(name) {
            Some(&position) => self.registrations[position] = registration,
            None => {
                self.index.insert(name, self.registrations.len());
                self.registrations.push(registration);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RuleRegistration> {
        self.index.get(name).map(|&i| &self.registrations[i])
    }

    /// Instantiate a rule by name.
    pub fn create(&self, name: &str) -> Result<AnyRule, ConfigurationError> {
        self.get(name)
            .map(|registration| (registration.factory)())
            .ok_or_else(|| ConfigurationError::UnknownRule {
                rule: name.to_string(),
            })
    }

    /// Registrations in registration order.
    pub fn registrations(&self) -> &[RuleRegistration] {
        &self.registrations
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &'static LintRuleDescriptor> + '_ {
        self.registrations.iter().map(|r| r.descriptor)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
