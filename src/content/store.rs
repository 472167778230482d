// Content store module
// Immutable lesson/quiz/concept tables with id indexes, built once at startup

use std::collections::HashMap;

use super::error::ContentError;
use super::model::{Concept, Lesson, LessonSummary, Quiz, QuizSummary};

/// Read-only content tables
///
/// Collections keep their load order so list endpoints are deterministic;
/// the indexes give O(1) lookup by id.
#[derive(Debug)]
pub struct ContentStore {
    lessons: Vec<Lesson>,
    lesson_index: HashMap<String, usize>,
    quizzes: Vec<Quiz>,
    quiz_index: HashMap<String, usize>,
    concepts: Vec<Concept>,
}

/// Number of records per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCounts {
    pub lessons: usize,
    pub quizzes: usize,
    pub concepts: usize,
}

impl ContentStore {
    /// Build the store, rejecting duplicate ids in any collection
    pub fn new(
        lessons: Vec<Lesson>,
        quizzes: Vec<Quiz>,
        concepts: Vec<Concept>,
    ) -> Result<Self, ContentError> {
        let lesson_index = build_index("lesson", lessons.iter().map(|l| l.lesson_id.as_str()))?;
        let quiz_index = build_index("quiz", quizzes.iter().map(|q| q.quiz_id.as_str()))?;
        build_index("concept", concepts.iter().map(|c| c.concept_id.as_str()))?;

        Ok(Self {
            lessons,
            lesson_index,
            quizzes,
            quiz_index,
            concepts,
        })
    }

    pub fn get_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lesson_index.get(lesson_id).map(|&i| &self.lessons[i])
    }

    pub fn list_lessons(&self) -> Vec<LessonSummary> {
        self.lessons.iter().map(LessonSummary::from).collect()
    }

    /// Exact, case-sensitive category match
    pub fn list_lessons_by_category(&self, category: &str) -> Vec<LessonSummary> {
        self.lessons
            .iter()
            .filter(|l| l.category == category)
            .map(LessonSummary::from)
            .collect()
    }

    pub fn get_quiz(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quiz_index.get(quiz_id).map(|&i| &self.quizzes[i])
    }

    pub fn list_quizzes(&self) -> Vec<QuizSummary> {
        self.quizzes.iter().map(QuizSummary::from).collect()
    }

    pub fn list_quizzes_by_lesson(&self, lesson_id: &str) -> Vec<QuizSummary> {
        self.quizzes
            .iter()
            .filter(|q| q.lesson_id.as_deref() == Some(lesson_id))
            .map(QuizSummary::from)
            .collect()
    }

    pub fn list_concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            lessons: self.lessons.len(),
            quizzes: self.quizzes.len(),
            concepts: self.concepts.len(),
        }
    }

    /// Cross-references that point at lessons missing from the store
    ///
    /// Covers quiz lesson ids, lesson prerequisites and concept resources.
    /// These are reported, not rejected.
    pub fn dangling_references(&self) -> Vec<String> {
        let mut dangling = Vec::new();

        for lesson in &self.lessons {
            for prereq in &lesson.prerequisites {
                if !self.lesson_index.contains_key(prereq) {
                    dangling.push(format!(
                        "lesson {} lists unknown prerequisite {prereq}",
                        lesson.lesson_id
                    ));
                }
            }
        }

        for quiz in &self.quizzes {
            if let Some(lesson_id) = &quiz.lesson_id {
                if !self.lesson_index.contains_key(lesson_id) {
                    dangling.push(format!(
                        "quiz {} references unknown lesson {lesson_id}",
                        quiz.quiz_id
                    ));
                }
            }
        }

        for concept in &self.concepts {
            for resource in &concept.resources {
                if !self.lesson_index.contains_key(resource) {
                    dangling.push(format!(
                        "concept {} references unknown lesson {resource}",
                        concept.concept_id
                    ));
                }
            }
        }

        dangling
    }
}

fn build_index<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, ContentError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(ContentError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}
