//! Classifier abstraction.
//!
//! The harness never builds or trains a model; anything that can score a
//! slice of NLI examples plugs in here.

use std::collections::HashMap;

use wnlu_common::{NliClass, NliExample, Result, WnluError};

/// What a classifier returns for one evaluation set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifierOutput {
    /// Genre the classifier attributes to each example.
    pub genres: Vec<String>,
    /// `[entailment, neutral, contradiction]` per example.
    pub scores: Vec<[f64; 3]>,
    /// Summed cost over the whole set.
    pub cost: f64,
}

impl ClassifierOutput {
    /// Argmax class per example.
    pub fn predictions(&self) -> Vec<NliClass> {
        self.scores.iter().map(NliClass::argmax).collect()
    }

    /// Reject output whose rows don't line up with the examples.
    pub fn check_len(&self, expected: usize) -> Result<()> {
        if self.scores.len() != expected || self.genres.len() != expected {
            return Err(WnluError::Classifier(format!(
                "expected {expected} rows, got {} score rows and {} genres",
                self.scores.len(),
                self.genres.len()
            )));
        }
        Ok(())
    }
}

/// Trait for anything that scores NLI examples.
pub trait NliClassifier {
    fn classify(&self, examples: &[NliExample]) -> Result<ClassifierOutput>;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Classifier with canned score rows keyed by `(pair_id, hypothesis)`.
///
/// Unknown examples get `fallback`. Genres echo the example's genre unless
/// overridden.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    scores: HashMap<(String, String), [f64; 3]>,
    genres: HashMap<String, String>,
    fallback: [f64; 3],
    cost_per_example: f64,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            genres: HashMap::new(),
            fallback: [1.0 / 3.0; 3],
            cost_per_example: 0.0,
        }
    }

    /// Score row for one example.
    pub fn with(mut self, pair_id: &str, hypothesis: &str, scores: [f64; 3]) -> Self {
        self.scores.insert((pair_id.to_string(), hypothesis.to_string()), scores);
        self
    }

    /// Report `genre` for every example of `pair_id`.
    pub fn with_genre(mut self, pair_id: &str, genre: &str) -> Self {
        self.genres.insert(pair_id.to_string(), genre.to_string());
        self
    }

    pub fn with_fallback(mut self, scores: [f64; 3]) -> Self {
        self.fallback = scores;
        self
    }

    pub fn with_cost(mut self, cost_per_example: f64) -> Self {
        self.cost_per_example = cost_per_example;
        self
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NliClassifier for MockClassifier {
    fn classify(&self, examples: &[NliExample]) -> Result<ClassifierOutput> {
        let mut output = ClassifierOutput::default();
        for ex in examples {
            let key = (ex.pair_id.clone(), ex.hypothesis.clone());
            output.scores.push(self.scores.get(&key).copied().unwrap_or(self.fallback));
            let genre = self
                .genres
                .get(&ex.pair_id)
                .cloned()
                .or_else(|| ex.genre.clone())
                .unwrap_or_default();
            output.genres.push(genre);
            output.cost += self.cost_per_example;
        }
        Ok(output)
    }
}
