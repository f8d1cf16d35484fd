//! Diagnostic types for lint results

use indexmap::IndexMap;
use oxc_span::Span;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A suggested fix for a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// Start position of the span to replace
    pub start: u32,
    /// End position of the span to replace
    pub end: u32,
    /// The replacement text
    pub replacement: String,
    /// Description of what the fix does
    pub message: Option<String>,
}

impl Fix {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Apply fixes to `source` by plain substring replacement.
    ///
    /// Fixes are applied in source order; a fix overlapping an earlier one or
    /// reaching outside the source is skipped.
    pub fn apply<'f>(source: &str, fixes: impl IntoIterator<Item = &'f Fix>) -> String {
        let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
        fixes.sort_by_key(|fix| (fix.start, fix.end));

        let mut output = String::with_capacity(source.len());
        let mut cursor = 0usize;
        for fix in fixes {
            let (start, end) = (fix.start as usize, fix.end as usize);
            if start < cursor || end < start || !source.is_char_boundary(end) {
                continue;
            }
            let Some(kept) = source.get(cursor..start) else {
                continue;
            };
            output.push_str(kept);
            output.push_str(&fix.replacement);
            cursor = end;
        }
        output.push_str(source.get(cursor..).unwrap_or_default());
        output
    }
}

/// A lint diagnostic.
///
/// Rules build the message from a template with `{{key}}` placeholders and an
/// ordered data map; `message` always holds the rendered text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub rule: String,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Message with `{{key}}` placeholders
    pub message_template: String,
    /// Placeholder values, in insertion order
    pub data: IndexMap<String, String>,
    /// Rendered message
    pub message: String,
    /// Optional help text
    pub help: Option<String>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Suggested fixes
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        let message_template = message.into();
        Self {
            rule: rule.into(),
            start: span.start,
            end: span.end,
            message: message_template.clone(),
            message_template,
            data: IndexMap::new(),
            help: None,
            severity: DiagnosticSeverity::Warning,
            fixes: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Set a placeholder value and re-render the message
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self.message = render_template(&self.message_template, &self.data);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    pub fn warning(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::new(rule, span, message).with_severity(DiagnosticSeverity::Warning)
    }
}

/// Substitute `{{key}}` placeholders. Unknown placeholders are left as written.
pub fn render_template(template: &str, data: &IndexMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            output.push_str(&rest[open..]);
            return output;
        };
        let key = &after_open[..close];
        match data.get(key.trim()) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    output.push_str(rest);
    output
}
