//! Findings, auto-fixes and per-rule result sets.

use serde::Serialize;

use super::descriptor::LintRuleDescriptor;
use crate::parser::lexer::{ByteSpan, Token, TokenKind};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The source is broken or the finding must not be ignored.
    Error,
    /// A style or correctness concern that does not block the tool.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One textual edit: replace `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: ByteSpan,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(span: ByteSpan, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    pub fn delete(span: ByteSpan) -> Self {
        Self::new(span, "")
    }

    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(ByteSpan::new(offset, offset), text)
    }
}

/// An atomic set of textual edits remediating one violation.
///
/// Edits are kept in ascending offset order. An auto-fix is applied in full
/// or not at all; a violation may carry several alternatives, of which at
/// most one is ever applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFix {
    description: String,
    edits: Vec<TextEdit>,
}

impl AutoFix {
    pub fn new(description: impl Into<String>, mut edits: Vec<TextEdit>) -> Self {
        edits.sort_by_key(|edit| (edit.span.start, edit.span.end));
        Self {
            description: description.into(),
            edits,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// True when all edits are in bounds and pairwise non-overlapping.
    pub fn is_well_formed(&self, source_len: usize) -> bool {
        self.edits.iter().all(|edit| {
            edit.span.start <= edit.span.end && edit.span.end <= source_len
        }) && self
            .edits
            .windows(2)
            .all(|pair| pair[0].span.end <= pair[1].span.start)
    }

    /// Apply every edit to `source`, back to front so offsets stay valid.
    pub fn apply(&self, source: &str) -> String {
        let mut result = source.to_string();
        for edit in self.edits.iter().rev() {
            result.replace_range(edit.span.start..edit.span.end, &edit.replacement);
        }
        result
    }
}

/// A single finding produced by a rule.
///
/// Violations are ordered by (anchor, message); equal pairs are deduplicated
/// by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintViolation {
    /// Byte offset the finding is anchored at.
    pub anchor: usize,
    /// Kind of the anchoring token, when the finding points at one.
    pub token_kind: Option<TokenKind>,
    pub message: String,
    /// Overrides the reporting default (warning) when set.
    pub severity: Option<Severity>,
    /// Alternative auto-fixes; at most one is applied.
    pub fixes: Vec<AutoFix>,
}

impl LintViolation {
    pub fn at_offset(anchor: usize, message: impl Into<String>) -> Self {
        Self {
            anchor,
            token_kind: None,
            message: message.into(),
            severity: None,
            fixes: Vec::new(),
        }
    }

    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        Self {
            anchor: token.span.start,
            token_kind: Some(token.kind),
            message: message.into(),
            severity: None,
            fixes: Vec::new(),
        }
    }

    pub fn with_token_kind(mut self, kind: TokenKind) -> Self {
        self.token_kind = Some(kind);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_fix(mut self, fix: AutoFix) -> Self {
        self.fixes.push(fix);
        self
    }

    /// Sort key: anchor first, message as tie-breaker.
    pub fn sort_key(&self) -> (usize, &str) {
        (self.anchor, self.message.as_str())
    }
}

/// Result of running one rule over one document.
#[derive(Debug, Clone)]
pub struct LintRuleStatus {
    pub descriptor: &'static LintRuleDescriptor,
    /// Sorted and deduplicated once the aggregator has finalized the run.
    pub violations: Vec<LintViolation>,
    /// Canonical echo of the configuration the rule ran with.
    pub config_echo: String,
}

impl LintRuleStatus {
    pub fn new(
        descriptor: &'static LintRuleDescriptor,
        violations: Vec<LintViolation>,
        config_echo: String,
    ) -> Self {
        Self {
            descriptor,
            violations,
            config_echo,
        }
    }

    pub fn rule_name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
