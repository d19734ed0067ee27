//! Gazetteer-based PERSON recognition

use crate::tables::closed_class;
use genderalize_core::{EntityLabel, EntitySpan};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Bundled first-name list, one name per line, `#` starts a comment
pub const BUNDLED_NAMES: &str = include_str!("../data/first_names.txt");

static BUNDLED: OnceLock<Arc<Gazetteer>> = OnceLock::new();

/// A set of first names that open a PERSON span
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gazetteer {
    names: HashSet<String>,
}

impl Gazetteer {
    /// An empty gazetteer
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled first names, parsed once per process
    pub fn bundled() -> Arc<Gazetteer> {
        BUNDLED
            .get_or_init(|| {
                let gazetteer = Self::parse(BUNDLED_NAMES);
                log::debug!("loaded {} bundled first names", gazetteer.len());
                Arc::new(gazetteer)
            })
            .clone()
    }

    /// Parse a newline separated name list
    pub fn parse(list: &str) -> Self {
        let mut gazetteer = Self::new();
        gazetteer.extend(parse_names(list));
        gazetteer
    }

    /// Add names; matching is on the title-cased form
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = title_case(name.as_ref().trim());
            if !name.is_empty() {
                self.names.insert(name);
            }
        }
    }

    /// Whether `word` is a known first name, compared title-cased
    pub fn contains(&self, word: &str) -> bool {
        is_capitalized(word) && self.names.contains(&title_case(word))
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no names
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Names of a newline separated list, comments and blank lines skipped
pub fn parse_names(list: &str) -> impl Iterator<Item = &str> {
    list.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// First character is uppercase
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_honorific(word: &str) -> bool {
    matches!(
        word.trim_end_matches('.').to_lowercase().as_str(),
        "mr" | "mrs" | "ms" | "mx" | "dr" | "prof"
    )
}

/// Capitalized, alphabetic and not a function word
fn continues_name(word: &str) -> bool {
    is_capitalized(word)
        && word.chars().all(|c| c.is_alphabetic() || c == '-')
        && closed_class(&word.to_lowercase()).is_none()
}

/// PERSON spans over token texts
///
/// A span opens at a known first name, or at an honorific followed by a
/// capitalized word, and runs over the capitalized words that follow.
pub fn recognize(texts: &[&str], names: &Gazetteer) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < texts.len() {
        let opens = names.contains(texts[i])
            || (is_honorific(texts[i]) && texts.get(i + 1).is_some_and(|w| continues_name(w)));
        if !opens {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < texts.len() && continues_name(texts[end]) {
            end += 1;
        }
        spans.push(EntitySpan::new(i, end, EntityLabel::Person));
        i = end;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_names() {
        let names = Gazetteer::bundled();
        assert!(names.contains("Jason"));
        assert!(names.contains("Jolene"));
        assert!(!names.contains("jason"));
        assert!(!names.contains("Will"));
        assert!(Arc::ptr_eq(&names, &Gazetteer::bundled()));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let names = Gazetteer::parse("# header\n\nalice\n  BOB  # trailing\n");
        assert_eq!(names.len(), 2);
        assert!(names.contains("Alice"));
        assert!(names.contains("Bob"));
        assert!(names.contains("BOB"));
    }

    #[test]
    fn test_single_name_span() {
        let names = Gazetteer::parse("Jason");
        let spans = recognize(&["Jason", "put", "down", "his", "coffee", "."], &names);
        assert_eq!(spans, vec![EntitySpan::new(0, 1, EntityLabel::Person)]);
    }

    #[test]
    fn test_surname_extends_span() {
        let names = Gazetteer::parse("Emmy");
        let spans = recognize(&["Emmy", "Noether", "was", "brilliant"], &names);
        assert_eq!(spans, vec![EntitySpan::new(0, 2, EntityLabel::Person)]);
    }

    #[test]
    fn test_honorific_opens_span() {
        let spans = recognize(&["Ask", "Mr.", "Smith", "."], &Gazetteer::new());
        assert_eq!(spans, vec![EntitySpan::new(1, 3, EntityLabel::Person)]);
    }

    #[test]
    fn test_unknown_capitalized_word_is_not_a_person() {
        let names = Gazetteer::parse("Jason");
        assert!(recognize(&["The", "Englishman", "left"], &names).is_empty());
        assert!(recognize(&[], &names).is_empty());
    }
}
