//! Content loading errors.
//!
//! Every variant aborts startup: the store is either fully valid or not built.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// A content file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content document is not valid TOML or misses a required field.
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },

    #[error("quiz {quiz_id}: duplicate question id {question_id}")]
    DuplicateQuestion {
        quiz_id: String,
        question_id: String,
    },

    /// Section numbers must run 1, 2, 3, ... in stored order.
    #[error("lesson {lesson_id}: expected section {expected}, found {found}")]
    SectionOrder {
        lesson_id: String,
        expected: u32,
        found: u32,
    },

    #[error("quiz {quiz_id}, question {question_id}: correct answer is not one of the options")]
    AnswerNotInOptions {
        quiz_id: String,
        question_id: String,
    },
}
