use std::path::Path;

use sv_lint_common::analysis::{
    AutoFix, ConfigurationError, LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation,
    ParameterDescriptor, ParameterType, RuleParameters, TextEdit, TextStructureLintRule,
};
use sv_lint_common::parser::syntax::{NodeTag, SyntaxNode};
use sv_lint_common::text_structure::TextStructureView;

use super::{declaration_name, end_label_name};

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "module-filename",
    summary: "Checks that at least one outermost module matches the file name.",
    description: "If a file declares modules, at least one of the outermost \
declarations must match the first dot-separated component of the file name. \
With allow-dash-for-underscore enabled, dashes in the file name stand for \
underscores in the module name. The offered auto-fix renames a mismatching \
module and its matching end label.",
    enabled_by_default: true,
    parameters: &[ParameterDescriptor {
        name: "allow-dash-for-underscore",
        param_type: ParameterType::Boolean,
        default_value: "off",
        help: "Accept dashes in the file name in place of underscores.",
    }],
};

/// Matches outermost module names against the analyzed file's name.
pub struct ModuleFilename {
    allow_dash_for_underscore: bool,
    parameters: RuleParameters,
    violations: Vec<LintViolation>,
}

impl Default for ModuleFilename {
    fn default() -> Self {
        Self {
            allow_dash_for_underscore: false,
            parameters: RuleParameters::defaults(&DESCRIPTOR),
            violations: Vec::new(),
        }
    }
}

/// First dot-separated component of the file's base name.
fn unit_name(filename: &str) -> Option<&str> {
    let base = Path::new(filename).file_name()?.to_str()?;
    let unit = base.split('.').next().unwrap_or(base);
    (!unit.is_empty()).then_some(unit)
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl LintRule for ModuleFilename {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn configure(&mut self, configuration: &str) -> Result<(), ConfigurationError> {
        let parameters = RuleParameters::parse(&DESCRIPTOR, configuration)?;
        self.allow_dash_for_underscore = parameters.boolean("allow-dash-for-underscore");
        self.parameters = parameters;
        Ok(())
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus::new(
            &DESCRIPTOR,
            std::mem::take(&mut self.violations),
            self.parameters.echo(),
        )
    }
}

impl TextStructureLintRule for ModuleFilename {
    fn lint(&mut self, text_structure: &TextStructureView, filename: &str) {
        let Some(unit) = unit_name(filename) else {
            return;
        };
        let expected = if self.allow_dash_for_underscore {
            unit.replace('-', "_")
        } else {
            unit.to_string()
        };
        let Some(root) = text_structure.syntax_tree().and_then(SyntaxNode::as_branch) else {
            return;
        };

        // Only outermost module declarations participate.
        let modules: Vec<_> = root
            .branches_tagged(NodeTag::ModuleDeclaration)
            .filter_map(|module| declaration_name(module).map(|name| (module, name)))
            .collect();
        if modules.is_empty() {
            return;
        }
        if modules
            .iter()
            .any(|(_, name)| text_structure.token_text(name) == expected)
        {
            return;
        }

        for (module, name) in modules {
            let mut violation = LintViolation::at_token(
                name,
                format!(
                    "Declared module does not match the first dot-separated component \
of file name: \"{}\"",
                    expected
                ),
            );
            if is_valid_identifier(&expected) {
                let mut edits = vec![TextEdit::new(name.span, expected.clone())];
                if let Some(label) = end_label_name(module) {
                    if text_structure.token_text(label) == text_structure.token_text(name) {
                        edits.push(TextEdit::new(label.span, expected.clone()));
                    }
                }
                violation = violation.with_fix(AutoFix::new(
                    format!("Rename module to '{}'", expected),
                    edits,
                ));
            }
            self.violations.push(violation);
        }
    }
}
