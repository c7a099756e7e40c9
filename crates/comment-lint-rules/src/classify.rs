//! Word classification predicates used by the comment style checks.
//!
//! Each predicate names one exemption from the prose rules. The checks
//! care about whole words, so every predicate here consumes its entire
//! input or rejects it; there is no partial matching.

/// Returns the maximal leading run of lowercase ASCII letters.
pub(crate) fn lowercase_prefix(word: &str) -> &str {
    let end = word
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(word.len());
    &word[..end]
}

/// Returns `true` if the word consists entirely of lowercase ASCII
/// letters.
///
/// The capitalization check fires only for such words. A word whose
/// lowercase prefix falls short of the whole word (`abc123`, `$foo`,
/// `do_thing`) is treated as an identifier or machine name and exempted,
/// even when it is mostly lowercase. The asymmetry is deliberate: `abc`
/// is flagged, `abc123` is not.
pub(crate) fn is_pure_lowercase(word: &str) -> bool {
    !word.is_empty() && lowercase_prefix(word) == word
}

/// Returns `true` if the word begins with an annotation sigil (`@`).
pub(crate) fn is_annotation(word: &str) -> bool {
    word.starts_with('@')
}

/// Returns `true` if the word is a bare identifier or reference token.
///
/// Accepted forms, where `ident` is one or more of `[A-Za-z$]`:
/// `ident`, `ident)`, `(ident)`. Such a trailing word triggers the
/// terminal-punctuation violation; anything else (URLs, dotted paths,
/// `foo()` call references) is assumed to be a reference that
/// legitimately ends the comment and is exempt.
pub(crate) fn is_bare_reference(word: &str) -> bool {
    let body = if let Some(inner) = word.strip_prefix('(') {
        // An opening parenthesis without a closing one never matches.
        match inner.strip_suffix(')') {
            Some(body) => body,
            None => return false,
        }
    } else if let Some(body) = word.strip_suffix(')') {
        body
    } else {
        word
    };

    !body.is_empty() && body.chars().all(|c| c.is_ascii_alphabetic() || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_prefix_stops_at_first_other_char() {
        assert_eq!(lowercase_prefix("abc"), "abc");
        assert_eq!(lowercase_prefix("abc123"), "abc");
        assert_eq!(lowercase_prefix("aBc"), "a");
        assert_eq!(lowercase_prefix("$foo"), "");
        assert_eq!(lowercase_prefix(""), "");
    }

    #[test]
    fn pure_lowercase_words() {
        assert!(is_pure_lowercase("abc"));
        assert!(is_pure_lowercase("foo"));
        assert!(!is_pure_lowercase("abc123"));
        assert!(!is_pure_lowercase("do_thing"));
        assert!(!is_pure_lowercase("$foo"));
        assert!(!is_pure_lowercase("Abc"));
        assert!(!is_pure_lowercase(""));
    }

    #[test]
    fn annotation_words() {
        assert!(is_annotation("@todo"));
        assert!(is_annotation("@see"));
        assert!(!is_annotation("todo"));
    }

    #[test]
    fn bare_reference_accepted_forms() {
        assert!(is_bare_reference("example"));
        assert!(is_bare_reference("Example"));
        assert!(is_bare_reference("$var"));
        assert!(is_bare_reference("foo)"));
        assert!(is_bare_reference("(foo)"));
    }

    #[test]
    fn bare_reference_rejected_forms() {
        assert!(!is_bare_reference("example.com"));
        assert!(!is_bare_reference("http://example.com"));
        assert!(!is_bare_reference("foo()"));
        assert!(!is_bare_reference("(foo"));
        assert!(!is_bare_reference("foo_bar"));
        assert!(!is_bare_reference("v2"));
        assert!(!is_bare_reference("()"));
        assert!(!is_bare_reference(""));
    }
}
