// Answer evaluation module
// Placeholder grading used by the quiz endpoints; not connected to the stored answer keys

use serde_json::Value;
use std::collections::HashMap;

use super::types::AnswerFeedback;

/// Free-text answers longer than this many characters are accepted
const FREE_TEXT_MIN_CHARS: usize = 10;

/// The one multiple-choice answer accepted, whatever the question
const MULTIPLE_CHOICE_ANSWER: &str = "A data structure that represents a vertex in a graph";

/// Answer accepted for every other question type
const DEFAULT_ANSWER: &str = "true";

/// Minimum percentage for a passing quiz
pub const PASS_THRESHOLD: f64 = 70.0;

const CORRECT_MESSAGE: &str = "Great job!";
const INCORRECT_MESSAGE: &str = "Not quite right.";
const EXPLANATION: &str = "Nodes are vertices in a graph that can hold data...";

/// Judge a single answer
///
/// Anything other than a JSON string is incorrect. Length is measured in
/// characters, not bytes.
pub fn evaluate_answer(question_type: Option<&str>, user_answer: &Value) -> bool {
    let Some(answer) = user_answer.as_str() else {
        return false;
    };
    match question_type {
        Some("free_text") => answer.chars().count() > FREE_TEXT_MIN_CHARS,
        Some("multiple_choice") => answer == MULTIPLE_CHOICE_ANSWER,
        _ => answer == DEFAULT_ANSWER,
    }
}

pub const fn feedback_for(correct: bool) -> AnswerFeedback {
    AnswerFeedback {
        correct,
        message: if correct {
            CORRECT_MESSAGE
        } else {
            INCORRECT_MESSAGE
        },
        explanation: EXPLANATION,
    }
}

/// Result of scoring one quiz attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// Percentage of submitted answers judged correct
    pub score: f64,
    pub passed: bool,
}

/// Score an attempt from the feedback the client collected
///
/// `total` is the number of submitted answers; `correct` counts feedback
/// entries whose `correct` field is `true`, matched answer or not.
#[allow(clippy::cast_precision_loss)]
pub fn score_attempt(answers: &HashMap<String, Value>, feedback: &HashMap<String, Value>) -> QuizScore {
    let total = answers.len();
    let correct = feedback
        .values()
        .filter(|entry| entry.get("correct").and_then(Value::as_bool) == Some(true))
        .count();

    let score = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };

    QuizScore {
        correct,
        total,
        score,
        passed: score >= PASS_THRESHOLD,
    }
}
