//! Quiz construction and grading

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashMap;

use crate::core::corpus::Corpus;
use crate::core::pos::PartOfSpeech;
use crate::core::tagger::{PosTagger, TaggedToken};
use crate::core::text::is_word;

/// One quiz question: name the part of speech of `word` in `sentence`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizItem {
    pub sentence: String,
    pub word: String,
    pub tag: String,
    pub answer: PartOfSpeech,
}

/// Pick a random alphabetic token. This is not a plain uniform draw over
/// every alphabetic token: words whose tag maps to a real category are
/// drawn first, and `Other` words (numbers, particles, unknown words) are
/// only used when nothing else is left.
pub fn select_quiz_word<'a, R: Rng + ?Sized>(
    tagged: &'a [TaggedToken],
    rng: &mut R,
) -> Option<&'a TaggedToken> {
    let words: Vec<&TaggedToken> = tagged.iter().filter(|t| is_word(&t.word)).collect();
    let categorised: Vec<&TaggedToken> = words
        .iter()
        .copied()
        .filter(|t| PartOfSpeech::classify(&t.word, &t.tag) != PartOfSpeech::Other)
        .collect();

    let pool = if categorised.is_empty() { &words } else { &categorised };
    pool.choose(rng).copied()
}

/// Draw up to `count` items from distinct sentences. Sentences without a
/// usable word are skipped, so fewer items come back only when the corpus
/// runs out.
pub fn build_quiz<R: Rng + ?Sized>(
    corpus: &Corpus,
    tagger: &dyn PosTagger,
    count: usize,
    rng: &mut R,
) -> Vec<QuizItem> {
    let mut items = Vec::with_capacity(count);

    for sentence in corpus.shuffled(rng) {
        if items.len() >= count {
            break;
        }
        let tagged = tagger.tag(sentence);
        if let Some(chosen) = select_quiz_word(&tagged, rng) {
            items.push(QuizItem {
                sentence: sentence.to_string(),
                word: chosen.word.clone(),
                tag: chosen.tag.clone(),
                answer: PartOfSpeech::classify(&chosen.word, &chosen.tag),
            });
        }
    }

    items
}

/// Form field carrying the answer to item `index`
pub fn answer_field(index: usize) -> String {
    format!("pos_{index}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedAnswer {
    pub word: String,
    pub sentence: String,
    pub selected: Option<PartOfSpeech>,
    pub expected: PartOfSpeech,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOutcome {
    pub answers: Vec<GradedAnswer>,
    pub correct: u32,
    pub total: u32,
    pub score: f64,
}

/// A quiz in progress, kept in the visitor's session
#[derive(Debug, Clone)]
pub struct GrammarQuiz {
    pub name: String,
    pub items: Vec<QuizItem>,
    pub started_at: DateTime<Utc>,
}

impl GrammarQuiz {
    pub fn new(name: impl Into<String>, items: Vec<QuizItem>, started_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            items,
            started_at,
        }
    }

    /// Missing or unknown selections count as wrong
    pub fn grade(&self, form: &HashMap<String, String>) -> QuizOutcome {
        let answers: Vec<GradedAnswer> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = form
                    .get(&answer_field(i))
                    .and_then(|value| value.parse::<PartOfSpeech>().ok());
                GradedAnswer {
                    word: item.word.clone(),
                    sentence: item.sentence.clone(),
                    selected,
                    expected: item.answer,
                    correct: selected == Some(item.answer),
                }
            })
            .collect();

        let total = answers.len() as u32;
        let correct = answers.iter().filter(|a| a.correct).count() as u32;
        QuizOutcome {
            answers,
            correct,
            total,
            score: shared::score::percentage(correct, total),
        }
    }

    /// Seconds between the start of the quiz and `finished_at`
    pub fn time_spent(&self, finished_at: DateTime<Utc>) -> f64 {
        let elapsed = finished_at - self.started_at;
        (elapsed.num_milliseconds() as f64 / 1000.0).max(0.0)
    }
}

/// `ctime`-style local timestamp, e.g. `Tue Mar  5 07:08:09 2024`
pub fn ctime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%a %b %e %H:%M:%S %Y").to_string()
}
