//! # comment-lint-rules
//!
//! Built-in comment style rules for comment-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CL001 | `inline-comment` | Spacing, capitalization, punctuation, and indentation of `//` comments |
//!
//! Violations carry dotted sub-codes (`CL001.NoSpaceBefore`,
//! `CL001.NotCapital`, `CL001.InvalidEndChar`, `CL001.SpacingBefore`,
//! `CL001.Empty`) so individual checks can be filtered by the host.
//!
//! ## Usage
//!
//! ```ignore
//! use comment_lint_core::Analyzer;
//! use comment_lint_rules::InlineComment;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(InlineComment::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod inline_comment;

pub use inline_comment::InlineComment;

/// Re-export core types for convenience.
pub use comment_lint_core::{Rule, RuleBox, Severity, Violation};

/// Returns the default set of rules.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![Box::new(InlineComment::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(InlineComment::new())]
}
