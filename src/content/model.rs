// Content record types
// Storage shape of lessons, quizzes and concepts (snake_case, as written in content/*.toml)

use serde::{Deserialize, Serialize};

/// Lesson difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A unit of educational content composed of ordered sections
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lesson {
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub category: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub sections: Vec<Section>,
}

/// A titled content block within a lesson
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// 1-based, contiguous within the lesson
    pub section_num: u32,
    pub section_title: String,
    /// HTML body
    pub body: String,
    #[serde(default)]
    pub code_example: Option<String>,
    #[serde(default)]
    pub key_concepts: Vec<String>,
}

/// A set of questions associated with zero or one lesson
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quiz {
    pub quiz_id: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

/// One quiz item
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub question_text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Question type together with the answer data that type carries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "question_type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_answer: String,
    },
    TrueFalse {
        correct_answer: bool,
    },
    FreeText {
        #[serde(default)]
        keywords: Vec<String>,
    },
    Code {
        #[serde(default)]
        starter_code: String,
    },
}

impl QuestionKind {
    /// Wire name of the question type
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "multiple_choice",
            Self::TrueFalse { .. } => "true_false",
            Self::FreeText { .. } => "free_text",
            Self::Code { .. } => "code",
        }
    }
}

/// A labeled skill linked to the lessons that teach it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Concept {
    pub concept_id: String,
    pub concept_name: String,
    pub category: String,
    pub description: String,
    /// Related lesson ids
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Summary projection of a lesson, used by list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSummary {
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub category: String,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            lesson_id: lesson.lesson_id.clone(),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            difficulty: lesson.difficulty,
            duration_minutes: lesson.duration_minutes,
            category: lesson.category.clone(),
        }
    }
}

/// Summary projection of a quiz, used by list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub quiz_id: String,
    pub lesson_id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            quiz_id: quiz.quiz_id.clone(),
            lesson_id: quiz.lesson_id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            difficulty: quiz.difficulty,
            question_count: quiz.questions.len(),
        }
    }
}
