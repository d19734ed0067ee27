//! Lexicon phrase matching over token sequences
//!
//! Lexicon phrases are compiled into a token-level trie. Matching scans the
//! sentence left to right and, at each position, takes the longest phrase
//! that starts there.

use crate::annotations::GenderAnnotations;
use crate::gender::Gender;
use crate::lexicon::Lexicon;
use crate::pipeline::NlpPipeline;
use crate::types::{Sentence, Token};
use std::collections::HashMap;

/// Trie node; children are addressed by index into `PhraseTrie::nodes`
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<String, u32>,
    gender: Option<Gender>,
}

/// Token-level trie of lowercase lexicon phrases
#[derive(Debug, Clone)]
struct PhraseTrie {
    nodes: Vec<TrieNode>,
}

impl PhraseTrie {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    fn insert(&mut self, words: &[String], gender: Gender) {
        let mut current = 0u32;

        for word in words {
            let next = match self.nodes[current as usize].children.get(word) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize]
                        .children
                        .insert(word.clone(), child);
                    child
                }
            };
            current = next;
        }

        let node = &mut self.nodes[current as usize];
        if let Some(existing) = node.gender {
            if existing != gender {
                log::debug!(
                    "phrase '{}' tokenizes like another entry; '{}' replaces '{}'",
                    words.join(" "),
                    gender,
                    existing
                );
            }
        }
        node.gender = Some(gender);
    }

    /// Longest phrase at the start of `words`: (token count, label)
    fn longest_prefix(&self, words: &[String]) -> Option<(usize, Gender)> {
        let mut current = 0u32;
        let mut best = None;

        for (consumed, word) in words.iter().enumerate() {
            match self.nodes[current as usize].children.get(word) {
                Some(&child) => {
                    current = child;
                    if let Some(gender) = self.nodes[current as usize].gender {
                        best = Some((consumed + 1, gender));
                    }
                }
                None => break,
            }
        }

        best
    }
}

/// A lexicon phrase found in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// First token index
    pub start: usize,
    /// One past the last token index
    pub end: usize,
    /// Label of the matched phrase
    pub gender: Gender,
}

impl PhraseMatch {
    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match covers no tokens (never true for produced matches)
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Compiled lexicon matcher
///
/// Built once per lexicon and shared; matching never mutates it.
#[derive(Debug, Clone)]
pub struct GenderMatcher {
    trie: PhraseTrie,
    phrase_count: usize,
}

impl GenderMatcher {
    /// Compile a lexicon, splitting each phrase with the same pipeline that
    /// tokenizes sentences
    pub fn new(lexicon: &Lexicon, pipeline: &dyn NlpPipeline) -> Self {
        Self::from_phrases(
            lexicon
                .iter()
                .map(|(phrase, gender)| (pipeline.phrase_tokens(phrase), gender)),
        )
    }

    /// Compile a lexicon, splitting phrases on whitespace
    pub fn with_whitespace_split(lexicon: &Lexicon) -> Self {
        Self::from_phrases(lexicon.iter().map(|(phrase, gender)| {
            (
                phrase.split_whitespace().map(str::to_string).collect(),
                gender,
            )
        }))
    }

    /// Compile pre-split phrases
    pub fn from_phrases<I>(phrases: I) -> Self
    where
        I: IntoIterator<Item = (Vec<String>, Gender)>,
    {
        let mut trie = PhraseTrie::new();
        let mut phrase_count = 0;

        for (words, gender) in phrases {
            let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
            if words.is_empty() {
                log::debug!("skipping lexicon phrase that produced no tokens");
                continue;
            }
            trie.insert(&words, gender);
            phrase_count += 1;
        }

        log::debug!("compiled gender matcher with {phrase_count} phrases");
        Self { trie, phrase_count }
    }

    /// Number of phrases compiled in
    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    /// Leftmost-longest, non-overlapping phrase matches
    pub fn find_matches(&self, tokens: &[Token]) -> Vec<PhraseMatch> {
        let mut matches = Vec::new();
        if self.phrase_count == 0 {
            return matches;
        }

        let lowered: Vec<String> = tokens.iter().map(Token::lower).collect();
        let mut start = 0;
        while start < lowered.len() {
            match self.trie.longest_prefix(&lowered[start..]) {
                Some((len, gender)) => {
                    matches.push(PhraseMatch {
                        start,
                        end: start + len,
                        gender,
                    });
                    start += len;
                }
                None => start += 1,
            }
        }

        matches
    }

    /// Stamp every token covered by a match with the match's label
    pub fn annotate(&self, sentence: &Sentence) -> GenderAnnotations {
        let mut annotations = GenderAnnotations::unset(sentence.len());
        for m in self.find_matches(sentence.tokens()) {
            for index in m.start..m.end {
                annotations.stamp(index, m.gender);
            }
        }
        annotations
    }
}
