//! Rule trait for defining comment lint rules.

use crate::context::FileContext;
use crate::token::{TokenKind, TokenStream};
use crate::types::{Severity, Violation};

/// A per-token lint rule over a file's comment token stream.
///
/// Implement this trait to create rules that inspect comment tokens.
/// A rule declares the token kinds it wants to see via [`Rule::kinds`];
/// the analyzer invokes [`Rule::check`] once per matching token, in file
/// order. Rules may look around the given position through the stream's
/// nearest-token lookups, so a check is not confined to a single token.
///
/// # Example
///
/// ```ignore
/// use comment_lint_core::{FileContext, Rule, TokenKind, TokenStream, Violation};
///
/// pub struct NoFixmeComments;
///
/// impl Rule for NoFixmeComments {
///     fn name(&self) -> &'static str { "no-fixme-comments" }
///     fn code(&self) -> &'static str { "CL099" }
///     fn kinds(&self) -> &'static [TokenKind] { &[TokenKind::LineComment] }
///
///     fn check(&self, ctx: &FileContext, stream: &TokenStream, pos: usize) -> Vec<Violation> {
///         // inspect stream.get(pos) ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "inline-comment").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the token kinds this rule wants to be invoked for.
    fn kinds(&self) -> &'static [TokenKind];

    /// Checks the token at `pos` and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `stream` - The file's full comment token stream
    /// * `pos` - Position of the token that triggered this invocation
    ///
    /// # Returns
    ///
    /// A vector of violations found at this position.
    fn check(&self, ctx: &FileContext, stream: &TokenStream, pos: usize) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
