//! # armtpl-base
//!
//! Core library for ARM deployment template analysis: source spans,
//! line/column positions, and diagnostic issues.
//!
//! The expression tokenizer/evaluator and the editor integration live in
//! separate crates; this crate is the substrate they agree on. The analyzer
//! computes character offsets into one canonical document buffer, wraps them
//! in [`Span`]s, classifies findings against [`IssueKind`], and packages each
//! finding as an [`Issue`]. Reporting layers use a [`LineIndex`] to turn
//! offsets back into user-facing [`Position`]s.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! diagnostics → Severity, IssueKind, Issue, IssueCollector
//!   ↓
//! base        → Primitives (Span, Position, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostics)
// ============================================================================

/// Foundation types: Span, Position, LineIndex
pub mod base;

/// Diagnostics: Severity, IssueKind taxonomy, Issue records, IssueCollector
pub mod diagnostics;

// Re-export foundation types
pub use base::{LineIndex, Position, Span};
pub use diagnostics::{Issue, IssueCollector, IssueKind, Severity};
