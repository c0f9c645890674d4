//! wnlu-harness — Classifier evaluation harness.
//! - Accuracy and cost over full minibatches, by genre and by sentence length
//! - Confidence dumps in the scorer's input format
//! - Kaggle-style CSV predictions

pub mod classifier;
pub mod evaluate;
pub mod export;

pub use classifier::{ClassifierOutput, MockClassifier, NliClassifier};
pub use evaluate::{
    evaluate_by_length, evaluate_classifier, evaluate_classifier_by_genre, Evaluation,
    GenreEvaluation, LengthBucket, LengthEvaluation,
};
pub use export::{export_confidences, predict, write_kaggle_predictions, KagglePrediction};
