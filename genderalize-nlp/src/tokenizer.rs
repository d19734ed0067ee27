//! Whitespace-preserving English tokenizer
//!
//! Text is cut into whitespace-delimited chunks. Each chunk is split into
//! leading punctuation, a core word, an optional clitic and trailing
//! punctuation. A whitespace run belongs to the token before it; whitespace
//! at the very start of the text becomes a token of its own.

use crate::tables::is_abbreviation;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// A token as byte ranges over the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Range of the token text
    pub text: Range<usize>,
    /// Range of the trailing whitespace, empty if none
    pub whitespace: Range<usize>,
    /// The token is leading whitespace
    pub is_space: bool,
}

impl RawToken {
    fn word(text: Range<usize>) -> Self {
        let end = text.end;
        Self {
            text,
            whitespace: end..end,
            is_space: false,
        }
    }
}

fn clitic_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|re|ve|ll|d|m))$")
            .expect("clitic pattern is a valid regex")
    })
}

fn is_leading_punct(c: char) -> bool {
    matches!(
        c,
        '(' | '[' | '{' | '"' | '\'' | '“' | '‘' | '«' | '¿' | '¡' | '*' | '`'
    )
}

fn is_trailing_punct(c: char) -> bool {
    matches!(
        c,
        ')' | ']'
            | '}'
            | '"'
            | '\''
            | '”'
            | '’'
            | '»'
            | '.'
            | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '…'
            | '*'
    )
}

/// Split `text` into tokens whose concatenation is `text`
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut cursor = skip_whitespace(text, 0);

    if cursor > 0 {
        tokens.push(RawToken {
            text: 0..cursor,
            whitespace: cursor..cursor,
            is_space: true,
        });
    }

    while cursor < text.len() {
        let chunk_end = find_whitespace(text, cursor);
        let ws_end = skip_whitespace(text, chunk_end);

        let first = tokens.len();
        for piece in split_chunk(&text[cursor..chunk_end]) {
            tokens.push(RawToken::word(cursor + piece.start..cursor + piece.end));
        }
        if let Some(last) = tokens[first..].last_mut() {
            last.whitespace = chunk_end..ws_end;
        }

        cursor = ws_end;
    }

    tokens
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| from + i)
}

fn find_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(text.len(), |(i, _)| from + i)
}

/// Split one whitespace-free chunk into token ranges relative to the chunk
fn split_chunk(chunk: &str) -> Vec<Range<usize>> {
    let mut start = 0;
    let mut end = chunk.len();
    let mut pieces = Vec::new();

    while let Some(c) = chunk[start..end].chars().next() {
        if !is_leading_punct(c) {
            break;
        }
        pieces.push(start..start + c.len_utf8());
        start += c.len_utf8();
    }

    let mut suffixes = Vec::new();
    while let Some(c) = chunk[start..end].chars().next_back() {
        if !is_trailing_punct(c) {
            break;
        }
        let mut split = end - c.len_utf8();
        if c == '.' {
            while split > start && chunk[start..split].ends_with('.') {
                split -= 1;
            }
            if end - split == 1 && keeps_period(&chunk[start..split]) {
                break;
            }
        }
        suffixes.push(split..end);
        end = split;
    }

    if start < end {
        split_core(chunk, start..end, &mut pieces);
    }
    pieces.extend(suffixes.into_iter().rev());
    pieces
}

/// Abbreviations and dotted initialisms such as `U.S.` keep their period
fn keeps_period(core: &str) -> bool {
    !core.is_empty()
        && (core.contains('.')
            || is_abbreviation(&core.to_lowercase())
            || (core != "I"
                && core.chars().count() == 1
                && core.chars().all(char::is_uppercase)))
}

/// Split the core word on slashes, then peel off a trailing clitic
fn split_core(chunk: &str, core: Range<usize>, pieces: &mut Vec<Range<usize>>) {
    let mut word_start = core.start;
    for (i, c) in chunk[core.clone()].char_indices() {
        if c == '/' {
            let slash = core.start + i;
            push_word(chunk, word_start..slash, pieces);
            pieces.push(slash..slash + 1);
            word_start = slash + 1;
        }
    }
    push_word(chunk, word_start..core.end, pieces);
}

fn push_word(chunk: &str, word: Range<usize>, pieces: &mut Vec<Range<usize>>) {
    if word.is_empty() {
        return;
    }
    match clitic_pattern().captures(&chunk[word.clone()]) {
        Some(caps) => {
            let stem_len = caps.get(1).map_or(0, |m| m.end());
            pieces.push(word.start..word.start + stem_len);
            pieces.push(word.start + stem_len..word.end);
        }
        None => pieces.push(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input)
            .into_iter()
            .map(|token| &input[token.text])
            .collect()
    }

    fn rebuild(input: &str) -> String {
        tokenize(input)
            .into_iter()
            .map(|token| format!("{}{}", &input[token.text], &input[token.whitespace]))
            .collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            texts("The apple was his."),
            vec!["The", "apple", "was", "his", "."]
        );
    }

    #[test]
    fn test_question() {
        assert_eq!(
            texts("Is she an astronaut?"),
            vec!["Is", "she", "an", "astronaut", "?"]
        );
    }

    #[test]
    fn test_clitics() {
        assert_eq!(texts("don't"), vec!["do", "n't"]);
        assert_eq!(texts("He's here"), vec!["He", "'s", "here"]);
        assert_eq!(texts("she’ll"), vec!["she", "’ll"]);
        assert_eq!(texts("I'm"), vec!["I", "'m"]);
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            texts("\"(her)\","),
            vec!["\"", "(", "her", ")", "\"", ","]
        );
    }

    #[test]
    fn test_ellipsis_and_abbreviations() {
        assert_eq!(texts("wait..."), vec!["wait", "..."]);
        assert_eq!(texts("Mr. Smith"), vec!["Mr.", "Smith"]);
        assert_eq!(texts("the U.S."), vec!["the", "U.S."]);
    }

    #[test]
    fn test_slash_split() {
        assert_eq!(texts("his/her"), vec!["his", "/", "her"]);
    }

    #[test]
    fn test_whitespace_attaches_to_previous_token() {
        let input = "  she   sang\t\n";
        let tokens = tokenize(input);
        assert!(tokens[0].is_space);
        assert_eq!(&input[tokens[0].text.clone()], "  ");
        assert_eq!(&input[tokens[1].whitespace.clone()], "   ");
        assert_eq!(&input[tokens[2].whitespace.clone()], "\t\n");
        assert_eq!(rebuild(input), input);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        let tokens = tokenize("   ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_space);
    }

    #[test]
    fn test_punctuation_only_chunk() {
        assert_eq!(texts("?!"), vec!["?", "!"]);
        assert_eq!(rebuild("- ''"), "- ''");
    }
}
