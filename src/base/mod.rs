//! Foundation types for the armtpl toolchain.
//!
//! This module provides the fundamental value types used throughout the
//! analyzer:
//! - [`Span`] - Half-open character ranges into the document buffer
//! - [`Position`] - Zero-based (line, column) coordinates
//! - [`LineIndex`] - Offset to line/column conversion
//!
//! This module has NO dependencies on other armtpl modules.

mod line_index;
mod position;
mod span;

pub use line_index::LineIndex;
pub use position::Position;
pub use span::Span;
