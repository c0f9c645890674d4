//! Data models for the Winograd translation pipeline.

use serde::{Deserialize, Serialize};
use wnlu_common::{NliClass, NliExample};

/// Possessive pronouns whose substitution takes a `'s` suffix.
/// `her` is left out on purpose: it is also an object pronoun.
const POSSESSIVE_PRONOUNS: &[&str] = &["his", "its", "their", "whose"];

/// One schema from the WSC collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinogradSchema {
    /// Text before the ambiguous pronoun (`txt1`).
    pub premise_a: String,
    /// The ambiguous pronoun (`pron`).
    pub pronoun: String,
    /// Text after the pronoun (`txt2`).
    pub premise_b: String,
    /// Candidate referents, in document order.
    pub answers: Vec<String>,
    /// Index into `answers`, when the collection gave a usable `correctAnswer`.
    pub correct_answer: Option<usize>,
}

impl WinogradSchema {
    /// The full sentence with the pronoun in place.
    pub fn premise(&self) -> String {
        join_fragments(&[&self.premise_a, &self.pronoun, &self.premise_b])
    }

    /// The sentence with the pronoun replaced by candidate `answer_index`.
    pub fn hypothesis(&self, answer_index: usize) -> Option<String> {
        let answer = self.answers.get(answer_index)?;
        let mut referent = if POSSESSIVE_PRONOUNS.contains(&self.pronoun.to_lowercase().as_str()) {
            format!("{answer}'s")
        } else {
            answer.clone()
        };
        if self.premise_a.is_empty() {
            referent = capitalise_first(&referent);
        }
        Some(join_fragments(&[&self.premise_a, &referent, &self.premise_b]))
    }

    /// One NLI example per candidate answer: `entailment` for the correct
    /// referent, `neutral` for every other one. Empty when the schema has
    /// no usable correct answer.
    pub fn to_nli_examples(&self, pair_id: &str, genre: &str) -> Vec<NliExample> {
        let Some(correct) = self.correct_answer.filter(|&i| i < self.answers.len()) else {
            return vec![];
        };
        let premise = self.premise();

        (0..self.answers.len())
            .filter_map(|i| {
                let hypothesis = self.hypothesis(i)?;
                Some(NliExample {
                    pair_id: pair_id.to_string(),
                    premise: premise.clone(),
                    hypothesis,
                    label: if i == correct { NliClass::Entailment } else { NliClass::Neutral },
                    genre: Some(genre.to_string()),
                })
            })
            .collect()
    }
}

/// Parse a `correctAnswer` value. `A`/`A.` → 0, `B`/`B.` → 1.
pub fn parse_correct_answer(raw: &str) -> Option<usize> {
    match raw.trim() {
        "A" | "A." => Some(0),
        "B" | "B." => Some(1),
        _ => None,
    }
}

/// Join sentence fragments with single spaces, except before fragments
/// that open with punctuation.
fn join_fragments(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        let glue = part
            .chars()
            .next()
            .is_some_and(|c| !matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '’' | ')'));
        if !out.is_empty() && glue {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

fn capitalise_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
