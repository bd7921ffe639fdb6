use sv_lint_common::analysis::{
    ConfigurationError, LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation,
    ParameterDescriptor, ParameterType, RuleParameters, TextStructureLintRule,
};
use sv_lint_common::parser::lexer::TokenKind;
use sv_lint_common::text_structure::{Line, TextStructureView};

pub const DEFAULT_LINE_LENGTH: i64 = 100;
pub const MINIMUM_LINE_LENGTH: i64 = 40;
pub const MAXIMUM_LINE_LENGTH: i64 = 1000;

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "line-length",
    summary: "Checks that lines do not exceed the maximum allowed length.",
    description: "Long lines hurt side-by-side review and diffs. Exceptions \
are granted when the overflow cannot be broken: a comment carrying a URL, or \
an `include line with a long path. Because the exceptions are lexical, this \
rule runs on the whole text structure rather than on bare lines.",
    enabled_by_default: true,
    parameters: &[ParameterDescriptor {
        name: "length",
        param_type: ParameterType::Integer,
        default_value: "100",
        help: "Maximum allowed line length.",
    }],
};

/// Flags lines longer than the configured limit.
pub struct LineLength {
    limit: usize,
    parameters: RuleParameters,
    violations: Vec<LintViolation>,
}

impl Default for LineLength {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LINE_LENGTH as usize,
            parameters: RuleParameters::defaults(&DESCRIPTOR),
            violations: Vec::new(),
        }
    }
}

impl LineLength {
    fn is_exempt(&self, view: &TextStructureView, line: &Line<'_>) -> bool {
        // A comment with a URL cannot be usefully wrapped.
        let boundary = line.offset + self.limit;
        if let Some(token) = view.token_at(boundary) {
            if token.kind == TokenKind::Comment && view.token_text(token).contains("://") {
                return true;
            }
        }
        // Neither can a long `include path.
        let indent = line.text.len() - line.text.trim_start().len();
        if let Some(first) = view.token_at(line.offset + indent) {
            if first.kind == TokenKind::MacroInclude {
                return true;
            }
        }
        false
    }
}

impl LintRule for LineLength {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn configure(&mut self, configuration: &str) -> Result<(), ConfigurationError> {
        let parameters = RuleParameters::parse(&DESCRIPTOR, configuration)?;
        let length = parameters.integer("length");
        if !(MINIMUM_LINE_LENGTH..=MAXIMUM_LINE_LENGTH).contains(&length) {
            return Err(ConfigurationError::OutOfRange {
                rule: DESCRIPTOR.name.to_string(),
                option: "length".to_string(),
                value: length,
                min: MINIMUM_LINE_LENGTH,
                max: MAXIMUM_LINE_LENGTH,
            });
        }
        self.limit = length as usize;
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

impl TextStructureLintRule for LineLength {
    fn lint(&mut self, text_structure: &TextStructureView, _filename: &str) {
        for line in text_structure.lines() {
            let length = line.text.len();
            if length <= self.limit || self.is_exempt(text_structure, &line) {
                continue;
            }
            self.violations.push(LintViolation::at_offset(
                line.offset + self.limit,
                format!("Line length exceeds max: {}; is: {}", self.limit, length),
            ));
        }
    }
}
