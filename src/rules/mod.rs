//! Built-in lint rules and the default registry.

pub mod macros;
pub mod structure;
pub mod style;

use std::sync::LazyLock;

use sv_lint_common::analysis::{
    AnyRule, ConfigurationError, LintEngine, RuleRegistration, RuleRegistry,
};
use sv_lint_common::config::LintConfig;

use macros::MacroStringConcatenation;
use structure::{ModuleFilename, NoNestedModules};
use style::{LineLength, NoTabs, NoTrailingSpaces};

static DEFAULT_REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(|| {
    let mut registry = RuleRegistry::new();
    registry.register(RuleRegistration {
        descriptor: &style::line_length::DESCRIPTOR,
        factory: || AnyRule::TextStructure(Box::new(LineLength::default())),
    });
    registry.register(RuleRegistration {
        descriptor: &macros::macro_string_concatenation::DESCRIPTOR,
        factory: || AnyRule::TokenStream(Box::new(MacroStringConcatenation::default())),
    });
    registry.register(RuleRegistration {
        descriptor: &structure::module_filename::DESCRIPTOR,
        factory: || AnyRule::TextStructure(Box::new(ModuleFilename::default())),
    });
    registry.register(RuleRegistration {
        descriptor: &structure::no_nested_modules::DESCRIPTOR,
        factory: || AnyRule::SyntaxTree(Box::new(NoNestedModules::default())),
    });
    registry.register(RuleRegistration {
        descriptor: &style::no_tabs::DESCRIPTOR,
        factory: || AnyRule::Line(Box::new(NoTabs::default())),
    });
    registry.register(RuleRegistration {
        descriptor: &style::no_trailing_spaces::DESCRIPTOR,
        factory: || AnyRule::Line(Box::new(NoTrailingSpaces::default())),
    });
    registry
});

/// The registry of all built-in rules, initialized once per process.
pub fn default_registry() -> &'static RuleRegistry {
    &DEFAULT_REGISTRY
}

/// Build a single-document engine from a registry and an optional project
/// configuration. Rules the config disables are skipped; a bad configuration
/// string surfaces as an error and enables nothing.
pub fn build_engine(
    registry: &RuleRegistry,
    config: Option<&LintConfig>,
) -> Result<LintEngine, ConfigurationError> {
    let mut engine = LintEngine::new();
    for registration in registry.registrations() {
        let descriptor = registration.descriptor;
        let enabled = config
            .map(|c| c.is_rule_enabled(descriptor.name, descriptor.enabled_by_default))
            .unwrap_or(descriptor.enabled_by_default);
        if !enabled {
            continue;
        }
        let configuration = config
            .and_then(|c| c.rule_configuration(descriptor.name))
            .unwrap_or("");
        engine.add_configured_rule((registration.factory)(), configuration)?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_all_rules() {
        let names: Vec<_> = default_registry().descriptors().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "line-length",
                "macro-string-concatenation",
                "module-filename",
                "no-nested-modules",
                "no-tabs",
                "no-trailing-spaces",
            ]
        );
    }

    #[test]
    fn test_create_by_name() {
        assert!(default_registry().create("line-length").is_ok());
        let error = default_registry().create("no-such-rule").unwrap_err();
        assert_eq!(
            error,
            ConfigurationError::UnknownRule {
                rule: "no-such-rule".to_string()
            }
        );
    }

    #[test]
    fn test_build_engine_honors_disables() {
        let config = LintConfig::parse(
            "[rules.no-tabs]\nenabled = false\n[rules.no-nested-modules]\nenabled = true\n",
        )
        .unwrap();
        let engine = build_engine(default_registry(), Some(&config)).unwrap();
        let view = sv_lint_common::parse_string("module m;\n\tmodule n; endmodule\nendmodule\n");
        let run = engine.lint(&view, "/p/m.sv");
        let names: Vec<_> = run.statuses.iter().map(|s| s.rule_name()).collect();
        assert!(names.contains(&"no-nested-modules"));
        assert!(!names.contains(&"no-tabs"));
    }

    #[test]
    fn test_build_engine_rejects_bad_configuration() {
        let config =
            LintConfig::parse("[rules.line-length]\nconfig = \"length:banana\"\n").unwrap();
        assert!(build_engine(default_registry(), Some(&config)).is_err());
    }
}
