//! Diagnostics — Issue records for template analysis findings.
//!
//! The expression analyzer detects problems (undefined references, unused
//! declarations, argument-count mismatches, scope violations) and packages
//! each as an [`Issue`]: a [`Span`] locating the problem, a human-readable
//! message, and a classification drawn from the closed [`IssueKind`]
//! taxonomy. Issues are recomputed on each analysis pass rather than patched
//! incrementally; when a document region shifts under an edit they are
//! translated as a unit.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::Span;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

// ============================================================================
// ISSUE KIND TAXONOMY
// ============================================================================

/// Classification of a diagnostic finding.
///
/// Exactly one variant per static-analysis rule over the template expression
/// language and its JSON host document. The set is closed and versioned:
/// adding an analysis rule means adding a variant here, and every consumer
/// (severity mapping, suppression filtering, rendering) matches
/// exhaustively, so an unhandled new kind fails to compile rather than being
/// silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Syntax error inside a template language expression.
    TleSyntax,
    /// `reference()` invoked inside a variable definition.
    ReferenceInVar,
    /// Variable is defined but never used.
    UnusedVar,
    /// Parameter is defined but never used.
    UnusedParam,
    /// User-function parameter is defined but never used.
    UnusedUdfParam,
    /// User-defined function is defined but never called.
    UnusedUdf,
    /// Function called with the wrong number of arguments.
    BadArgsCount,
    /// Function invoked in a context where it is not allowed.
    BadFuncContext,
    /// Built-in function name is not recognized.
    UndefinedFunc,
    /// User-function namespace is not defined.
    UndefinedNs,
    /// User-defined function is not defined in its namespace.
    UndefinedUdf,
    /// `parameters()` references an undefined parameter.
    UndefinedParam,
    /// `variables()` references an undefined variable.
    UndefinedVar,
    /// `variables()` used inside a user-defined function body.
    VarInUdf,
    /// Property access on a variable value that has no such property.
    UndefinedVarProp,
}

impl IssueKind {
    /// All kinds, for consumers building severity tables or suppression UIs.
    pub const ALL: &'static [IssueKind] = &[
        IssueKind::TleSyntax,
        IssueKind::ReferenceInVar,
        IssueKind::UnusedVar,
        IssueKind::UnusedParam,
        IssueKind::UnusedUdfParam,
        IssueKind::UnusedUdf,
        IssueKind::BadArgsCount,
        IssueKind::BadFuncContext,
        IssueKind::UndefinedFunc,
        IssueKind::UndefinedNs,
        IssueKind::UndefinedUdf,
        IssueKind::UndefinedParam,
        IssueKind::UndefinedVar,
        IssueKind::VarInUdf,
        IssueKind::UndefinedVarProp,
    ];

    /// The stable tag for this kind (e.g. `"unusedVar"`).
    ///
    /// Tags are part of the crate's contract: suppression lists and
    /// telemetry key off them, so they never change spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::TleSyntax => "tleSyntax",
            IssueKind::ReferenceInVar => "referenceInVar",
            IssueKind::UnusedVar => "unusedVar",
            IssueKind::UnusedParam => "unusedParam",
            IssueKind::UnusedUdfParam => "unusedUdfParam",
            IssueKind::UnusedUdf => "unusedUdf",
            IssueKind::BadArgsCount => "badArgsCount",
            IssueKind::BadFuncContext => "badFuncContext",
            IssueKind::UndefinedFunc => "undefinedFunc",
            IssueKind::UndefinedNs => "undefinedNs",
            IssueKind::UndefinedUdf => "undefinedUdf",
            IssueKind::UndefinedParam => "undefinedParam",
            IssueKind::UndefinedVar => "undefinedVar",
            IssueKind::VarInUdf => "varInUdf",
            IssueKind::UndefinedVarProp => "undefinedVarProp",
        }
    }

    /// The stable tag as an owned short string.
    pub fn tag(&self) -> SmolStr {
        SmolStr::new_static(self.as_str())
    }

    /// Get a short description of the rule category.
    pub fn description(&self) -> &'static str {
        match self {
            IssueKind::TleSyntax => "expression syntax error",
            IssueKind::ReferenceInVar => "reference() in variable definition",
            IssueKind::UnusedVar => "unused variable",
            IssueKind::UnusedParam => "unused parameter",
            IssueKind::UnusedUdfParam => "unused function parameter",
            IssueKind::UnusedUdf => "unused user-defined function",
            IssueKind::BadArgsCount => "wrong number of arguments",
            IssueKind::BadFuncContext => "function not allowed in this context",
            IssueKind::UndefinedFunc => "undefined function",
            IssueKind::UndefinedNs => "undefined function namespace",
            IssueKind::UndefinedUdf => "undefined user-defined function",
            IssueKind::UndefinedParam => "undefined parameter reference",
            IssueKind::UndefinedVar => "undefined variable reference",
            IssueKind::VarInUdf => "variables() in user-defined function",
            IssueKind::UndefinedVarProp => "undefined variable property",
        }
    }

    /// Default severity for this kind.
    ///
    /// Unused declarations are warnings; everything else breaks the template
    /// at deploy time and reports as an error.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::UnusedVar
            | IssueKind::UnusedParam
            | IssueKind::UnusedUdfParam
            | IssueKind::UnusedUdf => Severity::Warning,
            IssueKind::TleSyntax
            | IssueKind::ReferenceInVar
            | IssueKind::BadArgsCount
            | IssueKind::BadFuncContext
            | IssueKind::UndefinedFunc
            | IssueKind::UndefinedNs
            | IssueKind::UndefinedUdf
            | IssueKind::UndefinedParam
            | IssueKind::UndefinedVar
            | IssueKind::VarInUdf
            | IssueKind::UndefinedVarProp => Severity::Error,
        }
    }

    /// Check if this kind flags unused (unnecessary) code.
    ///
    /// Editor layers render these faded instead of squiggled.
    pub fn is_unused_code(&self) -> bool {
        matches!(
            self,
            IssueKind::UnusedVar
                | IssueKind::UnusedParam
                | IssueKind::UnusedUdfParam
                | IssueKind::UnusedUdf
        )
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ISSUE
// ============================================================================

/// A diagnostic finding: location, message, and classification.
///
/// Immutable once constructed; the classification is set exactly once so an
/// issue's kind cannot change after it has been indexed or reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    span: Span,
    message: Arc<str>,
    kind: IssueKind,
}

impl Issue {
    /// Create a new issue covering `span`.
    ///
    /// # Panics
    /// Panics if `span` is empty or `message` is blank. Issues always cover
    /// at least one character and always say something; a violation is a
    /// defect in the calling analyzer, not a recoverable condition.
    pub fn new(span: Span, message: impl Into<Arc<str>>, kind: IssueKind) -> Self {
        let message = message.into();
        assert!(
            span.length() >= 1,
            "issue span {span} must cover at least one character"
        );
        assert!(!message.is_empty(), "issue message must be non-empty");
        Self {
            span,
            message,
            kind,
        }
    }

    /// The character range this issue covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The human-readable diagnostic text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classification of this issue.
    #[inline]
    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    /// Default severity, from the kind.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Shift this issue by `delta` characters.
    ///
    /// The span is translated, message and kind carried over unchanged.
    /// Translation preserves the span's length, so the construction
    /// invariants hold for the result without re-checking.
    pub fn translate(&self, delta: isize) -> Issue {
        Issue {
            span: self.span.translate(delta),
            message: Arc::clone(&self.message),
            kind: self.kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.span, self.kind, self.message)
    }
}

// ============================================================================
// ISSUE COLLECTOR
// ============================================================================

/// Collects issues during one analysis pass.
///
/// Owned by the pass that produces it; concurrent passes each construct
/// their own collector.
#[derive(Clone, Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue.
    pub fn add(&mut self, issue: Issue) {
        tracing::trace!(%issue, "collected issue");
        self.issues.push(issue);
    }

    /// Add every issue from an iterator.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.add(issue);
        }
    }

    /// Get all collected issues.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Get the collected issues of a specific kind.
    pub fn issues_of_kind(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind() == kind).collect()
    }

    /// Get the number of error-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity().is_error())
            .count()
    }

    /// Get the number of warning-severity issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    /// Check if there are any error-severity issues.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity().is_error())
    }

    /// Shift every collected issue by `delta` characters.
    ///
    /// Used when the document region the pass analyzed moves under an edit
    /// before the results are reported.
    pub fn translate(&mut self, delta: isize) {
        if delta == 0 {
            return;
        }
        for issue in &mut self.issues {
            *issue = issue.translate(delta);
        }
    }

    /// Check if no issues were collected.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Take all issues, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.issues)
    }

    /// Clear all issues.
    pub fn clear(&mut self) {
        self.issues.clear();
    }

    /// Get the collected issues, deduplicated.
    ///
    /// Overlapping analyzer visitors can report the same finding twice;
    /// exact duplicates by (span, kind, message) collapse to one, first
    /// occurrence wins, order otherwise preserved.
    pub fn finish(self) -> Vec<Issue> {
        let mut seen = FxHashSet::default();
        let issues: Vec<Issue> = self
            .issues
            .into_iter()
            .filter(|i| seen.insert((i.span, i.kind, Arc::clone(&i.message))))
            .collect();
        tracing::debug!(
            total = issues.len(),
            errors = issues.iter().filter(|i| i.severity().is_error()).count(),
            "analysis pass finished"
        );
        issues
    }
}
