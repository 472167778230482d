// Content loader module
// Parses the TOML content documents and validates them before the store is built

use serde::Deserialize;
use std::path::Path;

use super::error::ContentError;
use super::model::{Concept, Lesson, QuestionKind, Quiz};
use super::store::ContentStore;

const EMBEDDED_LESSONS: &str = include_str!("../../content/lessons.toml");
const EMBEDDED_QUIZZES: &str = include_str!("../../content/quizzes.toml");
const EMBEDDED_CONCEPTS: &str = include_str!("../../content/concepts.toml");

const LESSONS_FILE: &str = "lessons.toml";
const QUIZZES_FILE: &str = "quizzes.toml";
const CONCEPTS_FILE: &str = "concepts.toml";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LessonsDocument {
    #[serde(default)]
    lessons: Vec<Lesson>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuizzesDocument {
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConceptsDocument {
    #[serde(default)]
    concepts: Vec<Concept>,
}

/// Load the content compiled into the binary
pub fn load_embedded() -> Result<ContentStore, ContentError> {
    load_from_str(EMBEDDED_LESSONS, EMBEDDED_QUIZZES, EMBEDDED_CONCEPTS)
}

/// Load `lessons.toml`, `quizzes.toml` and `concepts.toml` from a directory
pub fn load_from_dir(dir: &Path) -> Result<ContentStore, ContentError> {
    let lessons = read_document(dir, LESSONS_FILE)?;
    let quizzes = read_document(dir, QUIZZES_FILE)?;
    let concepts = read_document(dir, CONCEPTS_FILE)?;
    load_from_str(&lessons, &quizzes, &concepts)
}

/// Parse and validate the three documents, then build the store
pub fn load_from_str(
    lessons: &str,
    quizzes: &str,
    concepts: &str,
) -> Result<ContentStore, ContentError> {
    let lessons: LessonsDocument = parse_document(LESSONS_FILE, lessons)?;
    let quizzes: QuizzesDocument = parse_document(QUIZZES_FILE, quizzes)?;
    let concepts: ConceptsDocument = parse_document(CONCEPTS_FILE, concepts)?;

    for lesson in &lessons.lessons {
        validate_lesson(lesson)?;
    }
    for quiz in &quizzes.quizzes {
        validate_quiz(quiz)?;
    }

    ContentStore::new(lessons.lessons, quizzes.quizzes, concepts.concepts)
}

fn read_document(dir: &Path, name: &str) -> Result<String, ContentError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|source| ContentError::Read { path, source })
}

fn parse_document<T: for<'de> Deserialize<'de>>(
    document: &str,
    text: &str,
) -> Result<T, ContentError> {
    toml::from_str(text).map_err(|source| ContentError::Parse {
        document: document.to_string(),
        source,
    })
}

/// Section numbers must be 1..=n in stored order
fn validate_lesson(lesson: &Lesson) -> Result<(), ContentError> {
    for (expected, section) in (1u32..).zip(&lesson.sections) {
        if section.section_num != expected {
            return Err(ContentError::SectionOrder {
                lesson_id: lesson.lesson_id.clone(),
                expected,
                found: section.section_num,
            });
        }
    }
    Ok(())
}

fn validate_quiz(quiz: &Quiz) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for question in &quiz.questions {
        if !seen.insert(question.question_id.as_str()) {
            return Err(ContentError::DuplicateQuestion {
                quiz_id: quiz.quiz_id.clone(),
                question_id: question.question_id.clone(),
            });
        }

        if let QuestionKind::MultipleChoice {
            options,
            correct_answer,
        } = &question.kind
        {
            if !options.contains(correct_answer) {
                return Err(ContentError::AnswerNotInOptions {
                    quiz_id: quiz.quiz_id.clone(),
                    question_id: question.question_id.clone(),
                });
            }
        }
    }
    Ok(())
}
