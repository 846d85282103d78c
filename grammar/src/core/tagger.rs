//! Part-of-speech tagging
//!
//! `PosTagger` is the seam the quiz depends on. `NlpruleTagger` runs the
//! nlprule English pipeline (tokenizer, dictionary tagger, disambiguation
//! rules and chunker) and reports one Penn Treebank tag per token.

use nlprule::{Tokenizer, tokenizer_filename};
use serde::{Deserialize, Serialize};

use crate::core::pos::PartOfSpeech;
use crate::error::{GrammarError, GrammarResult};

/// A token with its Penn Treebank tag. The tag is empty when the tagger
/// knows no reading for the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

#[mockall::automock]
pub trait PosTagger: Send + Sync {
    /// Split a sentence into tokens and tag each one, in order
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;
}

/// Compiled English tokenizer, fetched by the build script
static ENGLISH_TOKENIZER: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/", tokenizer_filename!("en")));

/// Markers the pipeline attaches besides real word classes
const MARKER_TAGS: &[&str] = &["SENT_START", "SENT_END", "PARA_END", "UNKNOWN"];

pub struct NlpruleTagger {
    tokenizer: Tokenizer,
}

impl NlpruleTagger {
    pub fn english() -> GrammarResult<Self> {
        let mut bytes = ENGLISH_TOKENIZER;
        let tokenizer = Tokenizer::from_reader(&mut bytes)
            .map_err(|e| GrammarError::TaggerUnavailable(e.to_string()))?;
        shared::app_info!("🏷️ Loaded the English part-of-speech tagger");
        Ok(Self { tokenizer })
    }
}

impl PosTagger for NlpruleTagger {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        self.tokenizer
            .pipe(sentence)
            .flat_map(|sentence| {
                sentence
                    .tokens()
                    .iter()
                    .filter_map(|token| {
                        let word = token.word().text().as_str();
                        if word.trim().is_empty() {
                            return None;
                        }
                        let readings: Vec<&str> = token
                            .word()
                            .tags()
                            .iter()
                            .map(|data| data.pos().as_str())
                            .collect();
                        let tag = resolve_tag(word, &readings, token.chunks()).unwrap_or_default();
                        Some(TaggedToken::new(word, tag))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Categories a phrase chunk admits, most likely first. `head` marks the
/// last token of a noun phrase.
fn phrase_categories(phrase: &str, head: bool) -> &'static [PartOfSpeech] {
    use PartOfSpeech::*;
    match phrase {
        "VP" => &[Verb, Adverb],
        "NP" if head => &[Noun, Pronoun, Adjective, Determiner],
        "NP" => &[Determiner, Pronoun, Adjective, Noun],
        "ADJP" => &[Adjective, Adverb],
        "ADVP" => &[Adverb],
        "PP" => &[Preposition],
        "SBAR" => &[Conjunction, Preposition],
        "PRT" => &[Adverb, Preposition],
        _ => &[],
    }
}

/// Pick one tag among the readings left after disambiguation. When they
/// disagree on the word class, the phrase chunks (`B-NP-singular`, `I-VP`,
/// `E-NP-plural` and so on) decide.
pub fn resolve_tag<'a>(word: &str, readings: &[&'a str], chunks: &[String]) -> Option<&'a str> {
    let readings: Vec<&str> = readings
        .iter()
        .copied()
        .filter(|tag| !tag.is_empty() && !MARKER_TAGS.contains(tag))
        .collect();
    let first = *readings.first()?;

    let category = PartOfSpeech::classify(word, first);
    if readings
        .iter()
        .all(|tag| PartOfSpeech::classify(word, tag) == category)
    {
        return Some(first);
    }

    let head = chunks.iter().any(|chunk| chunk.starts_with("E-NP"));
    let preferred = chunks
        .iter()
        .filter_map(|chunk| chunk.split('-').nth(1))
        .flat_map(|phrase| phrase_categories(phrase, head));
    for wanted in preferred {
        if let Some(tag) = readings
            .iter()
            .copied()
            .find(|tag| PartOfSpeech::classify(word, tag) == *wanted)
        {
            return Some(tag);
        }
    }

    Some(first)
}
