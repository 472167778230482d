// API handlers module
// One function per endpoint; each reads the shared store and returns a JSON reply

use crate::content::ContentStore;
use crate::logger;

use super::evaluate;
use super::mock;
use super::response::{not_found, JsonReply};
use super::types::{
    CategoryLessonsResponse, ConceptListResponse, ConceptView, EvaluateAnswerRequest,
    EvaluateAnswerResponse, HealthResponse, LessonListResponse, LessonQuizzesResponse,
    LessonSummaryView, LessonView, QuizListResponse, QuizSummaryView, QuizView, ScoreQuizRequest,
    ScoreQuizResponse, SubmitExerciseRequest, TrackProgressRequest, ValidateExerciseRequest,
};

pub fn handle_health() -> JsonReply {
    JsonReply::ok(&HealthResponse { status: "ok" })
}

// ============== Lessons ==============

pub fn handle_get_lesson(store: &ContentStore, lesson_id: &str) -> JsonReply {
    store
        .get_lesson(lesson_id)
        .map_or_else(|| not_found("Lesson"), |lesson| JsonReply::ok(&LessonView::from(lesson)))
}

pub fn handle_list_lessons(store: &ContentStore) -> JsonReply {
    let lessons: Vec<LessonSummaryView> = store
        .list_lessons()
        .into_iter()
        .map(LessonSummaryView::from)
        .collect();
    JsonReply::ok(&LessonListResponse {
        count: lessons.len(),
        lessons,
    })
}

/// Unknown categories yield an empty list, not a 404
pub fn handle_lessons_by_category(store: &ContentStore, category: &str) -> JsonReply {
    let lessons: Vec<LessonSummaryView> = store
        .list_lessons_by_category(category)
        .into_iter()
        .map(LessonSummaryView::from)
        .collect();
    JsonReply::ok(&CategoryLessonsResponse {
        category: category.to_string(),
        count: lessons.len(),
        lessons,
    })
}

pub fn handle_list_concepts(store: &ContentStore) -> JsonReply {
    let concepts: Vec<ConceptView> = store.list_concepts().iter().map(ConceptView::from).collect();
    JsonReply::ok(&ConceptListResponse {
        count: concepts.len(),
        concepts,
    })
}

// ============== Quizzes ==============

pub fn handle_get_quiz(store: &ContentStore, quiz_id: &str) -> JsonReply {
    store
        .get_quiz(quiz_id)
        .map_or_else(|| not_found("Quiz"), |quiz| JsonReply::ok(&QuizView::from(quiz)))
}

pub fn handle_list_quizzes(store: &ContentStore) -> JsonReply {
    let quizzes: Vec<QuizSummaryView> = store
        .list_quizzes()
        .into_iter()
        .map(QuizSummaryView::from)
        .collect();
    JsonReply::ok(&QuizListResponse {
        count: quizzes.len(),
        quizzes,
    })
}

pub fn handle_quizzes_by_lesson(store: &ContentStore, lesson_id: &str) -> JsonReply {
    let quizzes: Vec<QuizSummaryView> = store
        .list_quizzes_by_lesson(lesson_id)
        .into_iter()
        .map(QuizSummaryView::from)
        .collect();
    JsonReply::ok(&LessonQuizzesResponse {
        lesson_id: lesson_id.to_string(),
        count: quizzes.len(),
        quizzes,
    })
}

pub fn handle_evaluate_answer(request: &EvaluateAnswerRequest) -> JsonReply {
    let correct = evaluate::evaluate_answer(request.question_type.as_str(), &request.user_answer);
    logger::log_debug(&format!(
        "Evaluated question {} ({}): correct={correct}",
        request.question_id, request.question_type
    ));
    JsonReply::ok(&EvaluateAnswerResponse {
        correct,
        feedback: evaluate::feedback_for(correct),
    })
}

pub fn handle_score_quiz(request: ScoreQuizRequest) -> JsonReply {
    let result = evaluate::score_attempt(&request.answers, &request.feedback);
    logger::log_debug(&format!(
        "Scored quiz {} for user {}: {}/{}",
        request.quiz_id, request.user_id, result.correct, result.total
    ));
    JsonReply::ok(&ScoreQuizResponse {
        quiz_id: request.quiz_id,
        score: result.score,
        correct_answers: result.correct,
        total_questions: result.total,
        passed: result.passed,
    })
}

// ============== Learner progress (sample data) ==============

pub fn handle_track_progress(request: &TrackProgressRequest) -> JsonReply {
    logger::log_debug(&format!(
        "Progress for user {}: lesson={} status={} time_spent={}",
        request.user_id, request.lesson_id, request.status, request.time_spent
    ));
    JsonReply::ok(&mock::track_progress(&request.lesson_id))
}

pub fn handle_user_progress(user_id: &str) -> JsonReply {
    JsonReply::ok(&mock::user_progress(user_id))
}

pub fn handle_skill_map(user_id: &str) -> JsonReply {
    JsonReply::ok(&mock::skill_map(user_id))
}

pub fn handle_recommendations(user_id: &str) -> JsonReply {
    JsonReply::ok(&mock::recommendations(user_id))
}

// ============== Exercises (sample data) ==============

pub fn handle_validate_exercise(request: ValidateExerciseRequest) -> JsonReply {
    let code_len = request.code.as_str().map_or(0, str::len);
    logger::log_debug(&format!(
        "Validating exercise {} ({code_len} bytes of code)",
        request.exercise_id
    ));
    JsonReply::ok(&mock::validate_exercise(request.exercise_id))
}

pub fn handle_submit_exercise(request: SubmitExerciseRequest) -> JsonReply {
    logger::log_debug(&format!(
        "Exercise {} submitted by {}",
        request.exercise_id, request.user_id
    ));
    JsonReply::ok(&mock::submit_exercise(request.exercise_id))
}
