//! Corpus handling, tagging and quiz logic

pub mod corpus;
pub mod pos;
pub mod quiz;
pub mod tagger;
pub mod text;

pub use corpus::Corpus;
pub use pos::PartOfSpeech;
pub use quiz::{GradedAnswer, GrammarQuiz, QuizItem, QuizOutcome, build_quiz, ctime, select_quiz_word};
pub use tagger::{MockPosTagger, NlpruleTagger, PosTagger, TaggedToken, resolve_tag};
