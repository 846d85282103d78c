//! Quiz-level parts of speech and their mapping from Penn Treebank tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrammarError;

/// Words tagged `IN` that learners know as conjunctions
const SUBORDINATORS: &[&str] = &[
    "although", "because", "if", "though", "unless", "whether", "while", "whereas", "that",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Determiner,
    Interjection,
    Other,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 10] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Determiner,
        PartOfSpeech::Interjection,
        PartOfSpeech::Other,
    ];

    /// Coarse category of a Penn Treebank tag. Subtypes such as `NN:U`
    /// (uncountable noun) fall back to their base tag.
    pub fn from_penn(tag: &str) -> Self {
        let base = tag.split(':').next().unwrap_or(tag);
        match base {
            "NN" | "NNS" | "NNP" | "NNPS" => PartOfSpeech::Noun,
            "PRP" | "PRP$" | "WP" | "WP$" => PartOfSpeech::Pronoun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD" => PartOfSpeech::Verb,
            "JJ" | "JJR" | "JJS" => PartOfSpeech::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adverb,
            "IN" | "TO" => PartOfSpeech::Preposition,
            "CC" => PartOfSpeech::Conjunction,
            "DT" | "PDT" | "WDT" => PartOfSpeech::Determiner,
            "UH" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Other,
        }
    }

    /// Like `from_penn`, but subordinating words tagged `IN` count as conjunctions
    pub fn classify(word: &str, tag: &str) -> Self {
        if tag == "IN" && SUBORDINATORS.contains(&word.to_lowercase().as_str()) {
            return PartOfSpeech::Conjunction;
        }
        Self::from_penn(tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Determiner => "Determiner",
            PartOfSpeech::Interjection => "Interjection",
            PartOfSpeech::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Names a person, place, thing or idea (river, Alice, kindness).",
            PartOfSpeech::Pronoun => "Stands in for a noun (she, them, its).",
            PartOfSpeech::Verb => "Expresses an action or state (run, was, could).",
            PartOfSpeech::Adjective => "Describes a noun (old, warm, famous).",
            PartOfSpeech::Adverb => "Modifies a verb, adjective or other adverb (quickly, very, soon).",
            PartOfSpeech::Preposition => "Relates a noun to the rest of the sentence (in, across, with).",
            PartOfSpeech::Conjunction => "Joins words or clauses (and, but, because).",
            PartOfSpeech::Determiner => "Introduces a noun (the, a, every).",
            PartOfSpeech::Interjection => "Expresses emotion on its own (oh, alas).",
            PartOfSpeech::Other => "Numbers, particles and anything else.",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PartOfSpeech {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GrammarError::invalid(format!("Unknown part of speech: {wanted}")))
    }
}
