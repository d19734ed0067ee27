//! Pronoun rewriting towards a target gender
//!
//! Every edit is planned up front as a byte range over the reconstructed
//! sentence text. The ranges are sorted and disjoint, so they are applied in
//! one pass and a replacement of a different length never shifts a later one.

use crate::annotations::GenderAnnotations;
use crate::error::{CoreError, Result};
use crate::gender::Gender;
use crate::types::{reconstruct, FineTag, Sentence, Token};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

/// Personal pronoun (`PRP`) swaps
fn swap_personal(pronoun: &str) -> Option<&'static str> {
    Some(match pronoun {
        "he" => "she",
        "him" => "her",
        "himself" => "herself",
        "his" => "hers",
        "she" => "he",
        "her" => "him",
        "hers" => "his",
        "herself" => "hisself",
        _ => return None,
    })
}

/// Possessive pronoun (`PRP$`) swaps
fn swap_possessive(pronoun: &str) -> Option<&'static str> {
    Some(match pronoun {
        "he" => "she",
        "him" => "her",
        "himself" => "herself",
        "his" => "her",
        "she" => "he",
        "her" => "his",
        "hers" => "his",
        "herself" => "hisself",
        _ => return None,
    })
}

/// Opposite-gender form of a lowercase pronoun for the given tag
pub fn lookup_pronoun(tag: &FineTag, pronoun: &str) -> Option<&'static str> {
    match tag {
        FineTag::PersonalPronoun => swap_personal(pronoun),
        FineTag::PossessivePronoun => swap_possessive(pronoun),
        FineTag::Other(_) => None,
    }
}

/// Uppercase the first letter of `replacement` if `original` starts
/// uppercase, otherwise return it lowercased
pub fn correct_capitalization(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    if !capitalized {
        return replacement.to_lowercase();
    }

    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Whether a token is a gendered pronoun that disagrees with `target`
pub fn should_replace(token: &Token, gender: Option<Gender>, target: Gender) -> bool {
    token.tag.is_pronoun()
        && gender.is_some_and(Gender::is_gendered)
        && gender != Some(target)
}

/// One planned pronoun swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Index of the replaced token
    pub index: usize,
    /// Byte range of the token text in the sentence text
    pub range: Range<usize>,
    /// Original surface text
    pub original: String,
    /// Replacement text, capitalization already corrected
    pub replacement: String,
}

/// Planned edits for one sentence, in token order
pub type ReplacementPlan = SmallVec<[Replacement; 4]>;

fn ensure_target(target: Gender) -> Result<Gender> {
    if target.is_gendered() {
        Ok(target)
    } else {
        Err(CoreError::InvalidTargetGender(target.label().to_string()))
    }
}

/// Plan every swap needed to move the sentence's pronouns to `target`
pub fn plan_replacements(
    sentence: &Sentence,
    annotations: &GenderAnnotations,
    target: Gender,
) -> Result<ReplacementPlan> {
    let target = ensure_target(target)?;
    let mut plan = ReplacementPlan::new();
    let mut offset = 0;

    for token in sentence.tokens() {
        let start = offset;
        offset += token.text.len() + token.whitespace.len();

        if !should_replace(token, annotations.gender(token.index), target) {
            continue;
        }

        match lookup_pronoun(&token.tag, &token.lower()) {
            Some(swapped) => plan.push(Replacement {
                index: token.index,
                range: start..start + token.text.len(),
                original: token.text.clone(),
                replacement: correct_capitalization(&token.text, swapped),
            }),
            None => log::debug!(
                "no {} swap for '{}' at token {}",
                token.tag,
                token.text,
                token.index
            ),
        }
    }

    Ok(plan)
}

/// Apply sorted, disjoint edits to `text` in one pass
pub fn apply_replacements(text: &str, plan: &[Replacement]) -> String {
    let mut out = String::with_capacity(text.len() + plan.len() * 2);
    let mut cursor = 0;

    for edit in plan {
        out.push_str(&text[cursor..edit.range.start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    out.push_str(&text[cursor..]);

    out
}

/// Rewrite a sentence so its gendered pronouns agree with `target`
///
/// Sentences with nothing to change come back as their original text.
pub fn replace_pronouns(
    sentence: &Sentence,
    annotations: &GenderAnnotations,
    target: Gender,
) -> Result<String> {
    let plan = plan_replacements(sentence, annotations, target)?;
    if plan.is_empty() {
        return Ok(sentence.text().to_string());
    }
    log::debug!("rewriting {} pronoun(s) towards '{}'", plan.len(), target);

    Ok(apply_replacements(&reconstruct(sentence.tokens()), &plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    fn token(text: &str, ws: &str, tag: &str, index: usize) -> Token {
        Token {
            text: text.to_string(),
            whitespace: ws.to_string(),
            index,
            offset: 0,
            pos: if tag.starts_with("PRP") {
                PosTag::Pron
            } else {
                PosTag::X
            },
            tag: FineTag::from(tag),
        }
    }

    #[test]
    fn test_personal_and_possessive_tables_diverge() {
        assert_eq!(lookup_pronoun(&FineTag::PersonalPronoun, "his"), Some("hers"));
        assert_eq!(lookup_pronoun(&FineTag::PossessivePronoun, "his"), Some("her"));
        assert_eq!(lookup_pronoun(&FineTag::PersonalPronoun, "her"), Some("him"));
        assert_eq!(lookup_pronoun(&FineTag::PossessivePronoun, "her"), Some("his"));
    }

    #[test]
    fn test_hisself_is_kept() {
        assert_eq!(
            lookup_pronoun(&FineTag::PersonalPronoun, "herself"),
            Some("hisself")
        );
        assert_eq!(
            lookup_pronoun(&FineTag::PossessivePronoun, "herself"),
            Some("hisself")
        );
    }

    #[test]
    fn test_unknown_pronoun_or_tag() {
        assert_eq!(lookup_pronoun(&FineTag::PersonalPronoun, "they"), None);
        assert_eq!(lookup_pronoun(&FineTag::from("NN"), "he"), None);
    }

    #[test]
    fn test_correct_capitalization() {
        assert_eq!(correct_capitalization("She", "he"), "He");
        assert_eq!(correct_capitalization("she", "he"), "he");
        assert_eq!(correct_capitalization("HIS", "hers"), "Hers");
        assert_eq!(correct_capitalization("", "he"), "he");
    }

    #[test]
    fn test_should_replace() {
        let he = token("he", " ", "PRP", 0);
        assert!(should_replace(&he, Some(Gender::Masculine), Gender::Feminine));
        assert!(!should_replace(&he, Some(Gender::Masculine), Gender::Masculine));
        assert!(!should_replace(&he, Some(Gender::Neuter), Gender::Feminine));
        assert!(!should_replace(&he, None, Gender::Feminine));

        let noun = token("man", " ", "NN", 0);
        assert!(!should_replace(&noun, Some(Gender::Masculine), Gender::Feminine));
    }

    #[test]
    fn test_replace_at_start_and_middle() {
        let tokens = vec![
            token("She", " ", "PRP", 0),
            token("likes", " ", "VBZ", 1),
            token("her", " ", "PRP$", 2),
            token("dog", "", "NN", 3),
            token(".", "", ".", 4),
        ];
        let sentence = Sentence::new("She likes her dog.", tokens, Vec::new());
        let annotations = GenderAnnotations::from_genders(vec![
            Some(Gender::Feminine),
            None,
            Some(Gender::Feminine),
            None,
            None,
        ]);

        let rewritten = replace_pronouns(&sentence, &annotations, Gender::Masculine).unwrap();
        assert_eq!(rewritten, "He likes his dog.");

        let unchanged = replace_pronouns(&sentence, &annotations, Gender::Feminine).unwrap();
        assert_eq!(unchanged, "She likes her dog.");
    }

    #[test]
    fn test_plan_ranges_refer_to_original_text() {
        let tokens = vec![
            token("about", " ", "IN", 0),
            token("her", "  ", "PRP", 1),
            token("is", " ", "VBZ", 2),
            token("she", "", "PRP", 3),
        ];
        let sentence = Sentence::new("about her  is she", tokens, Vec::new());
        let annotations = GenderAnnotations::from_genders(vec![
            None,
            Some(Gender::Feminine),
            None,
            Some(Gender::Feminine),
        ]);

        let plan = plan_replacements(&sentence, &annotations, Gender::Masculine).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].range, 6..9);
        assert_eq!(plan[1].range, 14..17);
        assert_eq!(
            apply_replacements(sentence.text(), &plan),
            "about him  is he"
        );
    }

    #[test]
    fn test_neuter_target_rejected() {
        let result = replace_pronouns(
            &Sentence::default(),
            &GenderAnnotations::default(),
            Gender::Neuter,
        );
        assert!(matches!(result, Err(CoreError::InvalidTargetGender(_))));
    }

    #[test]
    fn test_empty_sentence_unchanged() {
        let rewritten = replace_pronouns(
            &Sentence::default(),
            &GenderAnnotations::default(),
            Gender::Feminine,
        )
        .unwrap();
        assert_eq!(rewritten, "");
    }
}
