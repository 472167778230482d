// API types module
// Wire-format (camelCase) views over the content store, plus request bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::content::{
    Concept, Difficulty, Lesson, LessonSummary, Question, QuestionKind, Quiz, QuizSummary, Section,
};

// ============== Content views ==============

/// Full lesson, as returned by `GET /lessons/{id}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonView<'a> {
    pub lesson_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub category: &'a str,
    pub prerequisites: &'a [String],
    pub sections: Vec<SectionView<'a>>,
}

impl<'a> From<&'a Lesson> for LessonView<'a> {
    fn from(lesson: &'a Lesson) -> Self {
        Self {
            lesson_id: &lesson.lesson_id,
            title: &lesson.title,
            description: &lesson.description,
            difficulty: lesson.difficulty,
            duration_minutes: lesson.duration_minutes,
            category: &lesson.category,
            prerequisites: &lesson.prerequisites,
            sections: lesson.sections.iter().map(SectionView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView<'a> {
    pub section_num: u32,
    pub section_title: &'a str,
    pub body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<&'a str>,
    pub key_concepts: &'a [String],
}

impl<'a> From<&'a Section> for SectionView<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            section_num: section.section_num,
            section_title: &section.section_title,
            body: &section.body,
            code_example: section.code_example.as_deref(),
            key_concepts: &section.key_concepts,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummaryView {
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub category: String,
}

impl From<LessonSummary> for LessonSummaryView {
    fn from(summary: LessonSummary) -> Self {
        Self {
            lesson_id: summary.lesson_id,
            title: summary.title,
            description: summary.description,
            difficulty: summary.difficulty,
            duration_minutes: summary.duration_minutes,
            category: summary.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LessonListResponse {
    pub lessons: Vec<LessonSummaryView>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryLessonsResponse {
    pub category: String,
    pub lessons: Vec<LessonSummaryView>,
    pub count: usize,
}

/// Full quiz including correct answers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView<'a> {
    pub quiz_id: &'a str,
    pub lesson_id: Option<&'a str>,
    pub title: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionView<'a>>,
}

impl<'a> From<&'a Quiz> for QuizView<'a> {
    fn from(quiz: &'a Quiz) -> Self {
        Self {
            quiz_id: &quiz.quiz_id,
            lesson_id: quiz.lesson_id.as_deref(),
            title: &quiz.title,
            description: &quiz.description,
            difficulty: quiz.difficulty,
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

/// A question with only the fields its type carries
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView<'a> {
    pub question_id: &'a str,
    pub question_text: &'a str,
    pub question_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_code: Option<&'a str>,
}

/// Correct answer: option text or a boolean
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnswerView<'a> {
    Text(&'a str),
    Flag(bool),
}

impl<'a> From<&'a Question> for QuestionView<'a> {
    fn from(question: &'a Question) -> Self {
        let mut view = Self {
            question_id: &question.question_id,
            question_text: &question.question_text,
            question_type: question.kind.type_name(),
            options: None,
            correct_answer: None,
            keywords: None,
            starter_code: None,
        };
        match &question.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer,
            } => {
                view.options = Some(options);
                view.correct_answer = Some(AnswerView::Text(correct_answer));
            }
            QuestionKind::TrueFalse { correct_answer } => {
                view.correct_answer = Some(AnswerView::Flag(*correct_answer));
            }
            QuestionKind::FreeText { keywords } => view.keywords = Some(keywords),
            QuestionKind::Code { starter_code } => view.starter_code = Some(starter_code),
        }
        view
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummaryView {
    pub quiz_id: String,
    pub lesson_id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
}

impl From<QuizSummary> for QuizSummaryView {
    fn from(summary: QuizSummary) -> Self {
        Self {
            quiz_id: summary.quiz_id,
            lesson_id: summary.lesson_id,
            title: summary.title,
            description: summary.description,
            difficulty: summary.difficulty,
            question_count: summary.question_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizSummaryView>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonQuizzesResponse {
    pub lesson_id: String,
    pub quizzes: Vec<QuizSummaryView>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptView<'a> {
    pub concept_id: &'a str,
    pub concept_name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub resources: &'a [String],
}

impl<'a> From<&'a Concept> for ConceptView<'a> {
    fn from(concept: &'a Concept) -> Self {
        Self {
            concept_id: &concept.concept_id,
            concept_name: &concept.concept_name,
            category: &concept.category,
            description: &concept.description,
            resources: &concept.resources,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConceptListResponse<'a> {
    pub concepts: Vec<ConceptView<'a>>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ============== Request bodies ==============
// Fields that are only echoed or logged accept any JSON value; a missing
// field is `null`. Only `answers` and `feedback` need a fixed shape.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackProgressRequest {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub lesson_id: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub time_spent: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub question_id: Value,
    /// Usually a string; any other JSON value is judged incorrect
    #[serde(default)]
    pub user_answer: Value,
    /// Non-string types fall through to the default rule
    #[serde(default)]
    pub question_type: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuizRequest {
    #[serde(default)]
    pub quiz_id: Value,
    #[serde(default)]
    pub user_id: Value,
    /// questionId -> submitted answer
    #[serde(default)]
    pub answers: HashMap<String, Value>,
    /// questionId -> feedback object from evaluate-answer
    #[serde(default)]
    pub feedback: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateExerciseRequest {
    #[serde(default)]
    pub exercise_id: Value,
    #[serde(default)]
    pub code: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExerciseRequest {
    #[serde(default)]
    pub exercise_id: Value,
    #[serde(default)]
    pub user_id: Value,
}

// ============== Computed responses ==============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerResponse {
    pub correct: bool,
    pub feedback: AnswerFeedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub message: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuizResponse {
    pub quiz_id: Value,
    pub score: f64,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub passed: bool,
}
