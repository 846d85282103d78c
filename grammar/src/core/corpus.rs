//! Sentence corpus the quiz samples from

use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;

use crate::core::text::split_sentences;
use crate::error::{GrammarError, GrammarResult};

/// Public-domain Project Gutenberg texts bundled with the binary
const BUILTIN_TEXTS: &[&str] = &[
    include_str!("../../corpus/austen-emma.txt"),
    include_str!("../../corpus/carroll-alice.txt"),
    include_str!("../../corpus/melville-moby_dick.txt"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    sentences: Vec<String>,
}

impl Corpus {
    pub fn from_text(text: &str) -> Self {
        Self {
            sentences: split_sentences(text),
        }
    }

    /// Sentences of every bundled text
    pub fn builtin() -> Self {
        Self {
            sentences: BUILTIN_TEXTS.iter().flat_map(|text| split_sentences(text)).collect(),
        }
    }

    /// Read a UTF-8 text file; a file without sentences is an error
    pub async fn load(path: &Path) -> GrammarResult<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| GrammarError::CorpusUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let corpus = Self::from_text(&text);
        if corpus.is_empty() {
            return Err(GrammarError::EmptyCorpus {
                path: path.to_path_buf(),
            });
        }
        shared::app_info!("📚 Loaded {} sentences from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Every sentence once, in random order
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let mut order: Vec<&str> = self.sentences.iter().map(String::as_str).collect();
        order.shuffle(rng);
        order
    }
}
