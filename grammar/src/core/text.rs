//! Sentence splitting and quiz-word checks

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "st.", "prof.", "sr.", "jr.", "rev.", "capt.", "col.", "gen.",
    "vs.", "etc.", "e.g.", "i.e.",
];

const OPENING_PUNCT: &[char] = &['"', '\'', '(', '[', '{', '`'];

fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
        .replace(['\u{201c}', '\u{201d}'], "\"")
}

fn is_abbreviation(word: &str) -> bool {
    let lower = word
        .trim_start_matches(OPENING_PUNCT)
        .to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    // Single capital initial such as "J."
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}

fn ends_sentence(word: &str) -> bool {
    let core = word.trim_end_matches(['"', '\'', ')', ']']);
    core.ends_with(['.', '!', '?']) && !is_abbreviation(core)
}

fn flush_paragraph(paragraph: &mut Vec<&str>, sentences: &mut Vec<String>) {
    let mut current: Vec<&str> = Vec::new();
    for word in paragraph.drain(..) {
        current.push(word);
        if ends_sentence(word) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
}

/// Split text into sentences. Blank lines end paragraphs; a trailing
/// fragment without terminal punctuation (a heading, say) is dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = normalize_quotes(text);
    let mut sentences = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut sentences);
        } else {
            paragraph.extend(line.split_whitespace());
        }
    }
    flush_paragraph(&mut paragraph, &mut sentences);

    sentences
}

/// Purely alphabetic tokens are eligible quiz words
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
