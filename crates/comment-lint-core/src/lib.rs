//! # comment-lint-core
//!
//! Core framework for comment-style linting based on a lightweight
//! comment token stream.
//!
//! This crate provides the foundational traits and types for building
//! comment linters. It includes:
//!
//! - [`TokenStream`] for lexing source text into comment tokens
//! - [`Rule`] trait for per-token rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use comment_lint_core::{Analyzer, Rule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod token;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use token::{Token, TokenKind, TokenStream};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
