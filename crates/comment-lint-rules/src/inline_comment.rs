//! Rule enforcing the house style for inline (`//`) comments.
//!
//! Checks that inline comments have a space after the marker, start
//! capitalized, and end with proper punctuation, and that indentation
//! between the marker and the text only grows to continue a list item or
//! an annotation such as `@todo`. Comment lines between `// @code` and
//! `// @endcode` sentinels are literal code examples and exempt from all
//! prose checks.
//!
//! Capitalization and punctuation apply to logical comment blocks: a
//! maximal run of inline comments on consecutive lines is assembled into
//! one prose string and checked exactly once, from its last line.
//!
//! # Configuration
//!
//! - `severity`: Severity of emitted violations (default: error)
//! - `continuation_markers`: first words that license one extra
//!   indentation level on the following line (default: `-`, `@todo`)

use crate::classify;
use comment_lint_core::{
    FileContext, Location, Rule, Severity, Suggestion, Token, TokenKind, TokenStream, Violation,
};

/// Rule code for inline-comment.
pub const CODE: &str = "CL001";

/// Rule name for inline-comment.
pub const NAME: &str = "inline-comment";

/// Two-character inline comment marker.
const MARKER: &str = "//";

/// Sentinel opening a literal code-example region.
const EXAMPLE_OPEN: &str = "// @code";

/// Sentinel closing a literal code-example region.
const EXAMPLE_CLOSE: &str = "// @endcode";

/// Accepted terminal punctuation for comment prose.
const ACCEPTED_CLOSERS: [char; 3] = ['.', '!', '?'];

/// Machine-readable sub-codes, emitted as `CL001.<SubCode>` so the host
/// can suppress or filter individual checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubCode {
    Empty,
    NotCapital,
    InvalidEndChar,
    NoSpaceBefore,
    SpacingBefore,
}

impl SubCode {
    fn code(self) -> &'static str {
        match self {
            Self::Empty => "CL001.Empty",
            Self::NotCapital => "CL001.NotCapital",
            Self::InvalidEndChar => "CL001.InvalidEndChar",
            Self::NoSpaceBefore => "CL001.NoSpaceBefore",
            Self::SpacingBefore => "CL001.SpacingBefore",
        }
    }
}

/// Enforces spacing, capitalization, punctuation, and indentation rules
/// for inline comments.
#[derive(Debug, Clone)]
pub struct InlineComment {
    /// Severity of emitted violations.
    pub severity: Severity,
    /// First words on a line that justify +2 spaces on the next line.
    pub continuation_markers: Vec<String>,
}

impl Default for InlineComment {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineComment {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            continuation_markers: vec!["-".to_string(), "@todo".to_string()],
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Replaces the set of continuation markers.
    #[must_use]
    pub fn continuation_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.continuation_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    fn violation(
        &self,
        sub: SubCode,
        ctx: &FileContext,
        token: &Token,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(
            sub.code(),
            NAME,
            self.severity,
            Location::from_token(ctx.relative_path.clone(), token),
            message,
        )
    }

    /// Checks the whitespace between the marker and the comment text.
    ///
    /// Runs for every qualifying inline comment, not only at block ends.
    fn check_indentation(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
        violations: &mut Vec<Violation>,
    ) {
        let Some(token) = stream.get(pos) else { return };
        let comment = token.text.trim_end();
        let space_count = marker_space_count(comment);

        if space_count == 0 && comment.len() > 2 {
            let rest = &comment[2..];
            violations.push(
                self.violation(
                    SubCode::NoSpaceBefore,
                    ctx,
                    token,
                    format!(
                        "No space before comment text; expected \"// {rest}\" but found \"{comment}\""
                    ),
                )
                .with_suggestion(Suggestion::new(format!("Write \"// {rest}\""))),
            );
        }

        if space_count <= 1 {
            return;
        }

        // Over-indented. A comment on the previous line may justify it.
        let prev = pos
            .checked_sub(1)
            .and_then(|p| stream.find_previous(TokenKind::LineComment, p))
            .and_then(|p| stream.get(p));

        match prev {
            Some(prev_token) if prev_token.line + 1 == token.line => {
                let prev_comment = prev_token.text.trim_end();
                let prev_space_count = marker_space_count(prev_comment);

                // Only growth needs justification; a decrease was already
                // validated where it started, and a zero-indented previous
                // line gives no baseline to continue from.
                if space_count <= prev_space_count || prev_space_count == 0 {
                    return;
                }

                let first_word = first_word_after_marker(prev_comment);
                if self.continuation_markers.iter().any(|m| m == first_word) {
                    let expected = prev_space_count + 2;
                    if space_count != expected {
                        violations.push(self.violation(
                            SubCode::SpacingBefore,
                            ctx,
                            token,
                            format!(
                                "Comment indentation error after {first_word} element, expected {expected} spaces"
                            ),
                        ));
                    }
                } else {
                    violations.push(self.violation(
                        SubCode::SpacingBefore,
                        ctx,
                        token,
                        format!(
                            "Comment indentation error, expected only {prev_space_count} spaces"
                        ),
                    ));
                }
            }
            _ => {
                let rest = &comment[2 + space_count..];
                violations.push(self.violation(
                    SubCode::SpacingBefore,
                    ctx,
                    token,
                    format!(
                        "{space_count} spaces found before inline comment; \
                         expected \"// {rest}\" but found \"{comment}\""
                    ),
                ));
            }
        }
    }

    /// Checks capitalization of the block's first word.
    fn check_capitalization(
        &self,
        ctx: &FileContext,
        top_token: &Token,
        prose: &str,
        violations: &mut Vec<Violation>,
    ) {
        let Some(first_char) = prose.chars().next() else {
            return;
        };
        if !first_char.is_lowercase() {
            return;
        }

        // Lower cased words containing non-alpha characters (function
        // references, machine names with underscores etc.) are allowed.
        let first_word = prose.split_whitespace().next().unwrap_or("");
        if classify::is_pure_lowercase(first_word) {
            violations.push(self.violation(
                SubCode::NotCapital,
                ctx,
                top_token,
                "Inline comments must start with a capital letter",
            ));
        }
    }

    /// Checks the block's terminal punctuation.
    fn check_end_char(
        &self,
        ctx: &FileContext,
        end_token: &Token,
        prose: &str,
        violations: &mut Vec<Violation>,
    ) {
        let Some(last_char) = prose.chars().last() else {
            return;
        };
        if ACCEPTED_CLOSERS.contains(&last_char) {
            return;
        }

        // @tag style comments carry no prose requiring punctuation.
        let mut words = prose.split_whitespace();
        let first_word = words.next().unwrap_or("");
        if classify::is_annotation(first_word) {
            return;
        }

        // Special last words like URLs or function references may end a
        // comment without punctuation; only a bare word is flagged.
        let last_word = words.last().unwrap_or(first_word);
        if classify::is_bare_reference(last_word) {
            violations.push(self.violation(
                SubCode::InvalidEndChar,
                ctx,
                end_token,
                "Inline comments must end in full-stops, exclamation marks, or question marks",
            ));
        }
    }
}

impl Rule for InlineComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks that inline comments have a space after //, start capitalized, \
         and end with proper punctuation"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [TokenKind] {
        &[TokenKind::LineComment, TokenKind::DocComment]
    }

    fn check(&self, ctx: &FileContext, stream: &TokenStream, pos: usize) -> Vec<Violation> {
        let mut violations = Vec::new();
        let Some(token) = stream.get(pos) else {
            return violations;
        };

        // Doc comments are visible in the stream but carry their own
        // conventions; only true `//` comments are checked here.
        if token.kind != TokenKind::LineComment || !token.text.starts_with(MARKER) {
            return violations;
        }

        // Ignore code example lines.
        if is_in_code_example(stream, pos) {
            return violations;
        }

        self.check_indentation(ctx, stream, pos, &mut violations);

        // Capitalization and punctuation apply per block. Only the last
        // comment of a block assembles and checks it; earlier lines defer
        // to the token that truly ends the block.
        if let Some(next) = stream.find_next(TokenKind::LineComment, pos + 1) {
            if line_at(stream, next) == token.line + 1 {
                return violations;
            }
        }

        let top = block_start(stream, pos);
        let prose = assemble_prose(stream, top, pos);

        if prose.is_empty() {
            violations.push(self.violation(
                SubCode::Empty,
                ctx,
                token,
                "Blank comments are not allowed",
            ));
            return violations;
        }

        if let Some(top_token) = stream.get(top) {
            self.check_capitalization(ctx, top_token, &prose, &mut violations);
        }
        self.check_end_char(ctx, token, &prose, &mut violations);

        violations
    }
}

/// Counts the spaces immediately following the marker.
fn marker_space_count(comment: &str) -> usize {
    comment
        .as_bytes()
        .iter()
        .skip(MARKER.len())
        .take_while(|&&b| b == b' ')
        .count()
}

/// First whitespace-delimited word after the marker, or `""`.
fn first_word_after_marker(comment: &str) -> &str {
    comment
        .get(MARKER.len()..)
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("")
}

fn line_at(stream: &TokenStream, pos: usize) -> usize {
    stream.get(pos).map_or(0, |t| t.line)
}

/// Walks backward from the block's last line to its first.
///
/// A preceding inline comment belongs to the block only when it sits on
/// the immediately preceding line; the first gap ends the walk.
fn block_start(stream: &TokenStream, pos: usize) -> usize {
    let mut last = pos;
    while let Some(top) = last
        .checked_sub(1)
        .and_then(|p| stream.find_previous(TokenKind::LineComment, p))
    {
        if line_at(stream, top) + 1 != line_at(stream, last) {
            break;
        }
        last = top;
    }
    last
}

/// Concatenates the block's stripped comment text into one prose string.
///
/// Each member's marker is stripped and the remainder trimmed; fragments
/// are joined without separators. Doc comments inside the range are
/// skipped.
fn assemble_prose(stream: &TokenStream, top: usize, end: usize) -> String {
    let mut prose = String::new();
    for pos in top..=end {
        let Some(token) = stream.get(pos) else { break };
        if token.kind == TokenKind::LineComment {
            prose.push_str(token.text.get(MARKER.len()..).unwrap_or("").trim());
        }
    }
    prose
}

/// Determines whether the comment at `pos` lies inside an
/// `@code`/`@endcode` example region.
///
/// Walks backward through the contiguous comment run; sentinels are
/// recognized only on earlier lines, by exact raw text including the
/// line terminator. An unclosed region extends to the end of the run.
fn is_in_code_example(stream: &TokenStream, pos: usize) -> bool {
    let eol = stream.eol();
    let open = format!("{EXAMPLE_OPEN}{eol}");
    let close = format!("{EXAMPLE_CLOSE}{eol}");

    let mut last = pos;
    while let Some(prev) = last
        .checked_sub(1)
        .and_then(|p| stream.find_previous(TokenKind::LineComment, p))
    {
        if line_at(stream, prev) + 1 != line_at(stream, last) {
            return false;
        }

        match stream.get(prev).map(|t| t.text.as_str()) {
            Some(text) if text == open => return true,
            Some(text) if text == close => return false,
            _ => {}
        }

        last = prev;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check_source(source: &str) -> Vec<Violation> {
        let stream = TokenStream::from_source(source);
        let ctx = FileContext::new(Path::new("test.rs"), source, Path::new("."));
        let rule = InlineComment::new();

        let mut violations = Vec::new();
        for pos in 0..stream.len() {
            let Some(token) = stream.get(pos) else { break };
            if rule.kinds().contains(&token.kind) {
                violations.extend(rule.check(&ctx, &stream, pos));
            }
        }
        violations
    }

    fn codes(source: &str) -> Vec<&'static str> {
        check_source(source)
            .iter()
            .map(|v| match v.code.as_str() {
                "CL001.Empty" => "Empty",
                "CL001.NotCapital" => "NotCapital",
                "CL001.InvalidEndChar" => "InvalidEndChar",
                "CL001.NoSpaceBefore" => "NoSpaceBefore",
                "CL001.SpacingBefore" => "SpacingBefore",
                other => panic!("unexpected code {other}"),
            })
            .collect()
    }

    #[test]
    fn well_formed_comment_passes() {
        assert!(codes("// This is fine.\n").is_empty());
        assert!(codes("// Really?\n").is_empty());
        assert!(codes("// Wow!\n").is_empty());
    }

    #[test]
    fn missing_space_after_marker() {
        let violations = check_source("//Bad spacing here.\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "CL001.NoSpaceBefore");
        assert!(violations[0]
            .message
            .contains("expected \"// Bad spacing here.\""));
    }

    #[test]
    fn marker_alone_is_a_blank_comment() {
        assert_eq!(codes("//\n"), vec!["Empty"]);
    }

    #[test]
    fn whitespace_only_block_is_empty_once() {
        // Two blank lines, one block, one violation.
        assert_eq!(codes("// \n//  \n"), vec!["Empty"]);
    }

    #[test]
    fn block_is_assembled_and_checked_exactly_once() {
        // Three lines of pure lowercase prose without punctuation: one
        // NotCapital and one InvalidEndChar for the whole block.
        let violations = check_source("// foo\n// bar\n// baz\n");
        assert_eq!(
            codes("// foo\n// bar\n// baz\n"),
            vec!["NotCapital", "InvalidEndChar"]
        );
        // NotCapital reports the block start, InvalidEndChar its end.
        assert_eq!(violations[0].location.line, 1);
        assert_eq!(violations[1].location.line, 3);
    }

    #[test]
    fn lowercase_first_word_flagged() {
        assert_eq!(codes("// foo.\n"), vec!["NotCapital"]);
    }

    #[test]
    fn mixed_character_first_word_exempt() {
        assert!(codes("// $foo bar.\n").is_empty());
        assert!(codes("// do_thing() resets the cache.\n").is_empty());
        // Mixed alphanumerics stay exempt even though a plain "abc"
        // would be flagged.
        assert!(codes("// abc123 is a machine name.\n").is_empty());
        assert_eq!(codes("// abc is lowercase.\n"), vec!["NotCapital"]);
    }

    #[test]
    fn bare_trailing_word_needs_punctuation() {
        assert_eq!(codes("// Bad ending\n"), vec!["InvalidEndChar"]);
        let violations = check_source("// Bad ending\n");
        assert!(violations[0]
            .message
            .contains("full-stops, exclamation marks, or question marks"));
    }

    #[test]
    fn reference_like_trailing_words_exempt() {
        assert!(codes("// See http://example.com/path\n").is_empty());
        assert!(codes("// Handled by process_queue()\n").is_empty());
        assert!(codes("// Compare with example.com\n").is_empty());
    }

    #[test]
    fn parenthesized_trailing_word_flagged() {
        assert_eq!(codes("// Calls it (twice)\n"), vec!["InvalidEndChar"]);
    }

    #[test]
    fn annotation_first_word_skips_punctuation() {
        assert!(codes("// @see\n").is_empty());
        assert!(codes("// @todo fix the cache\n").is_empty());
    }

    #[test]
    fn over_indent_without_previous_line() {
        let violations = check_source("//   Over indented.\n");
        assert_eq!(codes("//   Over indented.\n"), vec!["SpacingBefore"]);
        assert!(violations[0]
            .message
            .contains("3 spaces found before inline comment"));
    }

    #[test]
    fn list_continuation_allows_exactly_two_extra_spaces() {
        assert!(codes("// - item one\n//   continued.\n").is_empty());

        let source = "// - item one\n//    over continued.\n";
        let violations = check_source(source);
        assert_eq!(codes(source), vec!["SpacingBefore"]);
        assert!(violations[0]
            .message
            .contains("after - element, expected 3 spaces"));
    }

    #[test]
    fn todo_continuation_allows_exactly_two_extra_spaces() {
        assert!(codes("// @todo fix this\n//   details follow.\n").is_empty());
        assert_eq!(
            codes("// @todo fix this\n//     details follow.\n"),
            vec!["SpacingBefore"]
        );
    }

    #[test]
    fn unexplained_growth_flagged() {
        let source = "// Start here\n//   indented.\n";
        let violations = check_source(source);
        assert_eq!(codes(source), vec!["SpacingBefore"]);
        assert!(violations[0].message.contains("expected only 1 spaces"));
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn shrinking_back_is_tolerated() {
        assert!(codes("// - item\n//   sub thing\n// Back to baseline.\n").is_empty());
    }

    #[test]
    fn growth_from_zero_indent_not_flagged() {
        // Previous line has no baseline indentation; only its own
        // missing-space problem is reported.
        assert_eq!(codes("//A\n//   b.\n"), vec!["NoSpaceBefore"]);
    }

    #[test]
    fn indentation_checked_mid_block() {
        let source = "// Alpha\n//    beta\n// gamma ok.\n";
        assert_eq!(codes(source), vec!["SpacingBefore"]);
    }

    #[test]
    fn code_example_lines_exempt() {
        // The interior line alone would be over-indented.
        assert_eq!(codes("//   $a = 1;\n"), vec!["SpacingBefore"]);

        let source = "// @code\n//   $a = 1;\n// @endcode\n// Trailing prose line\n";
        assert!(codes(source).is_empty());
    }

    #[test]
    fn unclosed_example_region_extends_to_end() {
        assert!(codes("// @code\n// anything goes here\n//   even this\n").is_empty());
    }

    #[test]
    fn checks_resume_after_endcode_block() {
        let source = "// @code\n// x\n// @endcode\n\n//no space\n";
        assert_eq!(
            codes(source),
            vec!["NoSpaceBefore", "NotCapital", "InvalidEndChar"]
        );
    }

    #[test]
    fn sentinel_requires_exact_raw_text() {
        // Two spaces before @code: not a sentinel, just an over-indented
        // comment line.
        let source = "//  @code\n// lowercase\n";
        assert_eq!(codes(source), vec!["SpacingBefore"]);
    }

    #[test]
    fn sentinel_matches_crlf_terminator() {
        let source = "// @code\r\n//   $a = 1;\r\n// @endcode\r\n// Trailing prose line\r\n";
        assert!(codes(source).is_empty());
    }

    #[test]
    fn doc_comments_are_ignored_and_split_blocks() {
        assert!(codes("/// doc comment without punctuation\n").is_empty());
        assert!(codes("//! inner doc\n").is_empty());

        // The doc comment breaks adjacency, so the third line forms its
        // own block.
        let source = "// First part.\n/// doc\n// second part here\n";
        let violations = check_source(source);
        assert_eq!(codes(source), vec!["NotCapital", "InvalidEndChar"]);
        assert!(violations.iter().all(|v| v.location.line == 3));
    }

    #[test]
    fn multi_line_prose_joined_without_separators() {
        // "All" + "good." concatenates; the block ends with '.'.
        assert!(codes("// All\n// good.\n").is_empty());
    }

    #[test]
    fn custom_continuation_markers() {
        let rule = InlineComment::new().continuation_markers(["*"]);
        let source = "// * item\n//   continued.\n";
        let stream = TokenStream::from_source(source);
        let ctx = FileContext::new(Path::new("test.rs"), source, Path::new("."));

        let mut violations = Vec::new();
        for pos in 0..stream.len() {
            violations.extend(rule.check(&ctx, &stream, pos));
        }
        assert!(violations.is_empty());
    }

    #[test]
    fn severity_builder_applies_to_violations() {
        let rule = InlineComment::new().severity(Severity::Warning);
        let source = "//bad\n";
        let stream = TokenStream::from_source(source);
        let ctx = FileContext::new(Path::new("test.rs"), source, Path::new("."));
        let violations = rule.check(&ctx, &stream, 0);
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.severity == Severity::Warning));
    }

    #[test]
    fn repeated_runs_are_order_stable() {
        let source = "//one\n// two\n\n//   three.\n// Four\n";
        let first: Vec<String> = check_source(source).iter().map(ToString::to_string).collect();
        let second: Vec<String> = check_source(source).iter().map(ToString::to_string).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
