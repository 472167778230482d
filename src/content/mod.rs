//! Content module
//!
//! Static lessons, quizzes and concepts: typed records, the TOML loader
//! and the read-only store the API serves from.

mod error;
mod loader;
mod model;
mod store;

pub use error::ContentError;
pub use loader::{load_embedded, load_from_dir};
pub use model::{
    Concept, Difficulty, Lesson, LessonSummary, Question, QuestionKind, Quiz, QuizSummary, Section,
};
pub use store::{ContentCounts, ContentStore};
