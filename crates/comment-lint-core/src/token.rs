//! Comment token stream and the lexer that produces it.
//!
//! The lexer recognizes just enough source structure to isolate `//`
//! comments: string literals, character literals, and block comments are
//! tracked so a `//` inside them does not start a comment token. Raw
//! string literals are not tracked; a `//` inside one is lexed as a
//! comment. This is acceptable for a comment-style linter and keeps the
//! scanner line-oriented.

/// Kind of a lexed comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Inline line comment (`//`).
    LineComment,
    /// Doc comment (`///` or `//!`).
    DocComment,
}

/// A single comment token.
///
/// `text` runs from the comment marker to the end of the line, including
/// the line terminator when one is present. Several checks depend on the
/// terminator being part of the text (see `TokenStream::eol`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// Raw comment text, marker and line terminator included.
    pub text: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column of the marker (1-indexed, bytes).
    pub column: usize,
    /// Byte offset of the marker from the start of the file.
    pub offset: usize,
}

/// Ordered sequence of comment tokens for one file.
///
/// Tokens are stored in a single owned array addressed by position;
/// nearest-token-of-kind lookups walk the array forward or backward.
/// Positions handed to rules index into this stream.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    eol: &'static str,
}

impl TokenStream {
    /// Lexes source text into a comment token stream.
    #[must_use]
    pub fn from_source(content: &str) -> Self {
        let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let mut tokens = Vec::new();
        let mut in_block_comment = false;
        let mut line_offset = 0;

        for (index, line) in content.split_inclusive('\n').enumerate() {
            let (start, still_in_block) = scan_line(line, in_block_comment);
            in_block_comment = still_in_block;

            if let Some(start) = start {
                let text = &line[start..];
                tokens.push(Token {
                    kind: classify(text),
                    text: text.to_string(),
                    line: index + 1,
                    column: start + 1,
                    offset: line_offset + start,
                });
            }

            line_offset += line.len();
        }

        Self { tokens, eol }
    }

    /// Returns the token at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    /// Finds the nearest token of `kind` at or after `from`.
    #[must_use]
    pub fn find_next(&self, kind: TokenKind, from: usize) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| self.tokens[i].kind == kind)
    }

    /// Finds the nearest token of `kind` at or before `from`.
    #[must_use]
    pub fn find_previous(&self, kind: TokenKind, from: usize) -> Option<usize> {
        let upper = from.min(self.tokens.len().checked_sub(1)?);
        (0..=upper).rev().find(|&i| self.tokens[i].kind == kind)
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Line terminator detected for this file (`"\n"` or `"\r\n"`).
    #[must_use]
    pub fn eol(&self) -> &'static str {
        self.eol
    }

    /// Iterates over the tokens in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Classifies a comment by its marker: `///` and `//!` are doc comments,
/// everything else (including `////`) is a line comment.
fn classify(text: &str) -> TokenKind {
    let rest = &text[2..];
    if rest.starts_with('!') || (rest.starts_with('/') && !rest.starts_with("//")) {
        TokenKind::DocComment
    } else {
        TokenKind::LineComment
    }
}

/// Scans one line for the start of a `//` comment.
///
/// Returns the byte index of the marker within the line, if any, and the
/// block-comment state carried into the next line.
fn scan_line(line: &str, mut in_block_comment: bool) -> (Option<usize>, bool) {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if in_block_comment {
            if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => return (Some(i), in_block_comment),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                in_block_comment = true;
                i += 2;
            }
            b'"' => {
                i += 1;
                while i < bytes.len() {
                    match bytes[i] {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
            }
            b'\'' => {
                // Character literal, or a lifetime tick which consumes
                // only itself.
                if bytes.get(i + 1) == Some(&b'\\') && bytes.get(i + 3) == Some(&b'\'') {
                    i += 4;
                } else if bytes.get(i + 1) != Some(&b'\'') && bytes.get(i + 2) == Some(&b'\'') {
                    i += 3;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    (None, in_block_comment)
}
