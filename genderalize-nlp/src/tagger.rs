//! Rule-based part-of-speech tagger

use crate::ner::{is_capitalized, Gazetteer};
use crate::tables::{closed_class, is_sentence_terminal, TagPair};
use genderalize_core::PosTag;

/// Tag each token text, whitespace-only texts become `SPACE`
pub fn tag(texts: &[&str], names: &Gazetteer) -> Vec<TagPair> {
    let mut tags = Vec::with_capacity(texts.len());
    let mut sentence_start = true;

    for (i, text) in texts.iter().enumerate() {
        if is_space(text) {
            tags.push((PosTag::Space, "_SP"));
            continue;
        }

        let pair = tag_word(texts, i, sentence_start, names);
        tags.push(pair);

        if is_sentence_terminal(text) {
            sentence_start = true;
        } else if !is_opening(text) {
            sentence_start = false;
        }
    }

    tags
}

fn tag_word(texts: &[&str], i: usize, sentence_start: bool, names: &Gazetteer) -> TagPair {
    let text = texts[i];
    let lower = text.to_lowercase();

    match lower.as_str() {
        "his" | "her" => return possessive_or_personal(texts, i, names),
        "'s" | "’s" => return clitic_s(previous_word(texts, i)),
        _ => {}
    }

    if names.contains(text) {
        return (PosTag::Propn, "NNP");
    }
    if let Some(pair) = closed_class(&lower) {
        return pair;
    }
    if let Some(pair) = punctuation(text) {
        return pair;
    }
    if is_number(text) {
        return (PosTag::Num, "CD");
    }
    if is_capitalized(text) && !sentence_start {
        return (PosTag::Propn, "NNP");
    }

    let len = lower.chars().count();
    if len > 3 && lower.ends_with("ly") {
        (PosTag::Adv, "RB")
    } else if len > 4 && lower.ends_with("ing") {
        (PosTag::Verb, "VBG")
    } else if len > 3 && lower.ends_with("ed") {
        (PosTag::Verb, "VBD")
    } else if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        (PosTag::Noun, "NNS")
    } else {
        (PosTag::Noun, "NN")
    }
}

/// `his`/`her` are possessive when the next word can head a noun phrase
///
/// In `his/her` the slash is skipped and the pair takes the tag of the
/// second pronoun.
fn possessive_or_personal(texts: &[&str], i: usize, names: &Gazetteer) -> TagPair {
    let Some(next) = next_word_index(texts, i) else {
        return (PosTag::Pron, "PRP");
    };
    if texts[next] == "/" {
        match next_word_index(texts, next) {
            Some(after) if matches!(texts[after].to_lowercase().as_str(), "his" | "her") => {
                return tag_word(texts, after, false, names);
            }
            _ => return (PosTag::Pron, "PRP"),
        }
    }
    if !texts[next].chars().next().is_some_and(char::is_alphanumeric) {
        return (PosTag::Pron, "PRP");
    }

    let (pos, _) = tag_word(texts, next, false, names);
    let possessive = match pos {
        PosTag::Noun | PosTag::Adj | PosTag::Propn | PosTag::Num => true,
        PosTag::Verb => closed_class(&texts[next].to_lowercase()).is_none(),
        _ => false,
    };

    if possessive {
        (PosTag::Pron, "PRP$")
    } else {
        (PosTag::Pron, "PRP")
    }
}

/// `'s` after a pronoun is the verb, otherwise the possessive marker
fn clitic_s(previous: Option<&str>) -> TagPair {
    let after_pronoun = previous
        .and_then(|word| closed_class(&word.to_lowercase()))
        .is_some_and(|(pos, _)| pos == PosTag::Pron);
    let after_adverb = previous.is_some_and(|word| {
        matches!(word.to_lowercase().as_str(), "there" | "here" | "that" | "where")
    });

    if after_pronoun || after_adverb {
        (PosTag::Aux, "VBZ")
    } else {
        (PosTag::Part, "POS")
    }
}

fn punctuation(text: &str) -> Option<TagPair> {
    if text.chars().any(char::is_alphanumeric) {
        return None;
    }
    let pair = match text {
        _ if is_sentence_terminal(text) => (PosTag::Punct, "."),
        "," => (PosTag::Punct, ","),
        ";" | ":" | "-" | "--" | "—" | "–" => (PosTag::Punct, ":"),
        "(" | "[" | "{" => (PosTag::Punct, "-LRB-"),
        ")" | "]" | "}" => (PosTag::Punct, "-RRB-"),
        "\"" | "'" | "“" | "‘" | "«" | "`" => (PosTag::Punct, "``"),
        "”" | "’" | "»" => (PosTag::Punct, "''"),
        "/" => (PosTag::Sym, "SYM"),
        _ if text.chars().all(|c| c.is_ascii_punctuation()) => match text {
            "$" | "€" | "£" => (PosTag::Sym, "$"),
            "%" | "&" | "+" | "=" | "<" | ">" | "#" | "@" | "^" | "~" | "|" => {
                (PosTag::Sym, "SYM")
            }
            _ => (PosTag::Punct, "NFP"),
        },
        _ => (PosTag::Sym, "SYM"),
    };
    Some(pair)
}

fn is_number(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%'))
}

fn is_space(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

fn is_opening(text: &str) -> bool {
    matches!(text, "\"" | "'" | "“" | "‘" | "(" | "[" | "{" | "«" | "`")
}

fn next_word_index(texts: &[&str], i: usize) -> Option<usize> {
    (i + 1..texts.len()).find(|&j| !is_space(texts[j]))
}

fn previous_word<'a>(texts: &[&'a str], i: usize) -> Option<&'a str> {
    texts[..i].iter().rev().copied().find(|text| !is_space(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(sentence: &[&str]) -> Vec<&'static str> {
        tag(sentence, &Gazetteer::parse("Jason\nEmmy"))
            .into_iter()
            .map(|(_, fine)| fine)
            .collect()
    }

    fn pos_of(sentence: &[&str]) -> Vec<PosTag> {
        tag(sentence, &Gazetteer::parse("Jason\nEmmy"))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn test_possessive_his_before_noun() {
        let tags = tags_of(&["The", "programmer", "put", "down", "his", "laptop", "."]);
        assert_eq!(tags[4], "PRP$");
    }

    #[test]
    fn test_his_at_end_is_personal() {
        let tags = tags_of(&["The", "apple", "was", "his", "."]);
        assert_eq!(tags[3], "PRP");
    }

    #[test]
    fn test_her_before_verb_is_personal() {
        let tags = tags_of(&["The", "thing", "about", "her", "is", "she"]);
        assert_eq!(tags[3], "PRP");
        assert_eq!(tags[5], "PRP");
    }

    #[test]
    fn test_her_before_adjective_is_possessive() {
        let tags = tags_of(&["loved", "her", "shiny", "new", "helmet"]);
        assert_eq!(tags[1], "PRP$");
    }

    #[test]
    fn test_her_before_adverb_is_personal() {
        assert_eq!(tags_of(&["thanked", "her", "warmly", "."])[1], "PRP");
        assert_eq!(tags_of(&["saw", "her", "yesterday", "."])[1], "PRP");
        assert_eq!(tags_of(&["called", "her", "today"])[1], "PRP");
        assert_eq!(tags_of(&["asked", "him", "and", "her", "politely"])[3], "PRP");
    }

    #[test]
    fn test_her_before_punctuation_or_end_is_personal() {
        assert_eq!(tags_of(&["like", "her", ","])[1], "PRP");
        assert_eq!(tags_of(&["like", "her"])[1], "PRP");
    }

    #[test]
    fn test_his_before_number_or_name_is_possessive() {
        assert_eq!(tags_of(&["his", "3", "kids"])[0], "PRP$");
        assert_eq!(tags_of(&["met", "her", "Emmy", "doll"])[1], "PRP$");
    }

    #[test]
    fn test_slash_pair_follows_second_pronoun() {
        let tags = tags_of(&["made", "his", "/", "her", "choice", "."]);
        assert_eq!(tags[1], "PRP$");
        assert_eq!(tags[3], "PRP$");

        let tags = tags_of(&["thanked", "him", "/", "her", "warmly"]);
        assert_eq!(tags[3], "PRP");
        assert_eq!(tags_of(&["his", "/", "hers"])[0], "PRP");
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper() {
        let pos = pos_of(&["Women", "make", "great", "pilots", "."]);
        assert_eq!(pos[0], PosTag::Noun);
    }

    #[test]
    fn test_non_initial_capital_is_proper() {
        let pos = pos_of(&["I", "met", "the", "Englishman", ".", "Uncle", "Bob"]);
        assert_eq!(pos[3], PosTag::Propn);
        assert_eq!(pos[5], PosTag::Noun);
        assert_eq!(pos[6], PosTag::Propn);
    }

    #[test]
    fn test_known_name_is_proper_at_start() {
        let pos = pos_of(&["Jason", "put", "down", "his", "coffee"]);
        assert_eq!(pos[0], PosTag::Propn);
    }

    #[test]
    fn test_suffix_rules() {
        let pos = pos_of(&["quickly", "wedding", "walked", "dog"]);
        assert_eq!(
            pos,
            vec![PosTag::Adv, PosTag::Verb, PosTag::Verb, PosTag::Noun]
        );
    }

    #[test]
    fn test_space_number_and_punct() {
        let pos = pos_of(&["  ", "42", ",", "$"]);
        assert_eq!(
            pos,
            vec![PosTag::Space, PosTag::Num, PosTag::Punct, PosTag::Sym]
        );
    }

    #[test]
    fn test_clitic_s() {
        assert_eq!(tags_of(&["He", "'s", "here"])[1], "VBZ");
        assert_eq!(tags_of(&["Jason", "'s", "hat"])[1], "POS");
    }
}
