//! Closed-class word tables for the tagger
//!
//! Lookups take lowercase text. Open-class words (nouns, most verbs and
//! adjectives) are left to the suffix rules in [`crate::tagger`].

use genderalize_core::PosTag;

/// Coarse and fine tag of a closed-class word
pub type TagPair = (PosTag, &'static str);

/// Tag of a closed-class word, if `lower` is one
pub fn closed_class(lower: &str) -> Option<TagPair> {
    personal_pronoun(lower)
        .or_else(|| determiner(lower))
        .or_else(|| auxiliary(lower))
        .or_else(|| adposition(lower))
        .or_else(|| conjunction(lower))
        .or_else(|| particle(lower))
        .or_else(|| adverb(lower))
        .or_else(|| adjective(lower))
        .or_else(|| verb(lower))
}

fn personal_pronoun(lower: &str) -> Option<TagPair> {
    let tag = match lower {
        "i" | "me" | "you" | "he" | "him" | "she" | "it" | "we" | "us" | "they" | "them"
        | "myself" | "yourself" | "himself" | "herself" | "hisself" | "itself"
        | "ourselves" | "yourselves" | "themselves" | "theirself" | "mine" | "yours"
        | "hers" | "ours" | "theirs" => "PRP",
        // his and her are resolved against the next token by the tagger
        "his" | "her" => "PRP",
        "my" | "your" | "its" | "our" | "their" => "PRP$",
        "who" | "whom" | "what" => "WP",
        "whose" => "WP$",
        "someone" | "somebody" | "anyone" | "anybody" | "everyone" | "everybody"
        | "nobody" | "nothing" | "something" | "anything" | "everything" => "NN",
        _ => return None,
    };
    Some((PosTag::Pron, tag))
}

fn determiner(lower: &str) -> Option<TagPair> {
    let tag = match lower {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "every" | "each"
        | "some" | "any" | "no" | "all" | "both" | "either" | "neither" | "another" => "DT",
        "which" => "WDT",
        _ => return None,
    };
    Some((PosTag::Det, tag))
}

fn auxiliary(lower: &str) -> Option<TagPair> {
    let tag = match lower {
        "is" | "does" | "has" => "VBZ",
        "am" | "are" | "do" | "have" | "'re" | "’re" | "'m" | "’m" | "'ve" | "’ve" => "VBP",
        "was" | "were" | "did" | "had" => "VBD",
        "be" => "VB",
        "been" => "VBN",
        "being" => "VBG",
        "will" | "would" | "shall" | "should" | "can" | "could" | "may" | "might"
        | "must" | "ca" | "wo" | "'ll" | "’ll" | "'d" | "’d" => "MD",
        _ => return None,
    };
    Some((PosTag::Aux, tag))
}

fn adposition(lower: &str) -> Option<TagPair> {
    match lower {
        "of" | "in" | "on" | "at" | "for" | "with" | "about" | "after" | "before" | "from"
        | "by" | "into" | "onto" | "over" | "under" | "than" | "through" | "during"
        | "without" | "within" | "among" | "between" | "against" | "toward" | "towards"
        | "upon" | "like" | "near" | "off" | "out" | "up" | "down" | "around" | "across"
        | "behind" | "beside" | "beyond" | "per" | "via" => Some((PosTag::Adp, "IN")),
        _ => None,
    }
}

fn conjunction(lower: &str) -> Option<TagPair> {
    match lower {
        "and" | "or" | "but" | "nor" | "yet" => Some((PosTag::Cconj, "CC")),
        "if" | "because" | "while" | "although" | "though" | "unless" | "whether"
        | "until" | "whereas" => Some((PosTag::Sconj, "IN")),
        _ => None,
    }
}

fn particle(lower: &str) -> Option<TagPair> {
    match lower {
        "not" | "n't" | "n’t" => Some((PosTag::Part, "RB")),
        "to" => Some((PosTag::Part, "TO")),
        "'s" | "’s" => Some((PosTag::Part, "POS")),
        _ => None,
    }
}

fn adverb(lower: &str) -> Option<TagPair> {
    let tag = match lower {
        "when" | "where" | "why" | "how" => "WRB",
        "often" | "always" | "never" | "just" | "very" | "too" | "also" | "again"
        | "here" | "there" | "then" | "now" | "still" | "already" | "soon" | "even"
        | "only" | "so" | "ever" | "almost" | "perhaps" | "quite" | "rather" | "away"
        | "back" | "together" | "instead" | "well" | "yesterday" | "today" | "tonight"
        | "tomorrow" => "RB",
        "more" | "less" => "RBR",
        "most" | "least" => "RBS",
        _ => return None,
    };
    Some((PosTag::Adv, tag))
}

fn adjective(lower: &str) -> Option<TagPair> {
    match lower {
        "own" | "new" | "old" | "good" | "bad" | "great" | "little" | "big" | "small"
        | "other" | "same" | "shiny" | "young" | "long" | "short" | "high" | "low"
        | "many" | "much" | "few" | "several" | "such" | "whole" | "last" | "first"
        | "next" | "best" | "worst" | "male" | "female" | "human" => Some((PosTag::Adj, "JJ")),
        _ => None,
    }
}

/// Common verbs that would otherwise fall through to `NOUN`
fn verb(lower: &str) -> Option<TagPair> {
    let tag = match lower {
        "go" | "come" | "know" | "see" | "say" | "tell" | "think" | "want" | "make"
        | "take" | "get" | "give" | "feel" | "leave" | "help" | "ask" | "let" | "keep"
        | "find" | "call" | "try" | "become" | "bring" | "hold" | "meet" | "pay" | "owe" => {
            "VB"
        }
        "goes" | "comes" | "knows" | "sees" | "says" | "tells" | "thinks" | "wants"
        | "makes" | "takes" | "gets" | "gives" | "feels" | "leaves" | "helps" | "asks"
        | "lets" | "keeps" | "finds" | "forgets" | "loves" | "needs" => "VBZ",
        "went" | "came" | "knew" | "saw" | "said" | "told" | "thought" | "made" | "took"
        | "got" | "gave" | "felt" | "left" | "put" | "kept" | "found" | "became" | "brought"
        | "held" | "met" | "paid" | "drank" | "ate" | "ran" | "sang" | "wrote" => "VBD",
        _ => return None,
    };
    Some((PosTag::Verb, tag))
}

/// Abbreviations that keep their trailing period
pub fn is_abbreviation(lower: &str) -> bool {
    matches!(
        lower,
        "mr" | "mrs" | "ms" | "dr" | "prof" | "st" | "jr" | "sr" | "mt" | "vs" | "etc"
            | "sgt" | "capt" | "lt" | "gen" | "col" | "rev" | "fr"
    )
}

/// Tokens after which a new sentence starts
pub fn is_sentence_terminal(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| matches!(c, '.' | '!' | '?' | '…'))
}
