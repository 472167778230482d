//! Route matching module
//!
//! Maps a method and path to an API endpoint, extracting path parameters.
//! Path templates are matched segment by segment. Each segment is
//! percent-decoded after the split, so `{param}` captures decoded text and
//! an encoded `%2F` stays inside its segment.

use hyper::Method;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::ops::Deref;

/// Resolved API endpoint with its path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Lessons,
    Lesson { lesson_id: String },
    LessonsByCategory { category: String },
    Concepts,
    TrackProgress,
    UserProgress { user_id: String },
    SkillMap { user_id: String },
    Recommendations { user_id: String },
    Quizzes,
    Quiz { quiz_id: String },
    QuizzesByLesson { lesson_id: String },
    EvaluateAnswer,
    ScoreQuiz,
    ValidateExercise,
    SubmitExercise,
}

/// Outcome of route matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Found(Endpoint),
    /// Path exists but not for this method; carries the `Allow` header value
    MethodNotAllowed(&'static str),
    NotFound,
}

/// Remove the API mount prefix (e.g. `/api`) if the path carries it
///
/// Only strips on a segment boundary, so `/apis` is left alone.
pub fn strip_api_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Find the endpoint for a method and (unprefixed) path
pub fn match_route(method: &Method, path: &str) -> RouteMatch {
    let Some(decoded) = split_path(path) else {
        return RouteMatch::NotFound;
    };
    let segments: Vec<&str> = decoded.iter().map(Deref::deref).collect();

    let is_read = *method == Method::GET || *method == Method::HEAD;
    let endpoint = if is_read {
        match_get(&segments)
    } else if *method == Method::POST {
        match_post(&segments)
    } else {
        None
    };

    if let Some(endpoint) = endpoint {
        return RouteMatch::Found(endpoint);
    }

    match (
        match_get(&segments).is_some(),
        match_post(&segments).is_some(),
    ) {
        (true, true) => RouteMatch::MethodNotAllowed("GET, HEAD, POST, OPTIONS"),
        (true, false) => RouteMatch::MethodNotAllowed("GET, HEAD, OPTIONS"),
        (false, true) => RouteMatch::MethodNotAllowed("POST, OPTIONS"),
        (false, false) => RouteMatch::NotFound,
    }
}

/// Split into decoded segments; a single trailing slash is tolerated,
/// empty segments anywhere else are not, and neither is a segment that
/// decodes to invalid UTF-8
fn split_path(path: &str) -> Option<Vec<Cow<'_, str>>> {
    let trimmed = path.strip_prefix('/')?;
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    trimmed
        .split('/')
        .map(|segment| {
            if segment.is_empty() {
                None
            } else {
                percent_decode_str(segment).decode_utf8().ok()
            }
        })
        .collect()
}

fn match_get(segments: &[&str]) -> Option<Endpoint> {
    let endpoint = match segments {
        ["healthz"] => Endpoint::Health,
        ["lessons"] => Endpoint::Lessons,
        ["lessons", "category", category] => Endpoint::LessonsByCategory {
            category: (*category).to_string(),
        },
        ["lessons", lesson_id] => Endpoint::Lesson {
            lesson_id: (*lesson_id).to_string(),
        },
        ["concepts"] => Endpoint::Concepts,
        ["users", user_id, "progress"] => Endpoint::UserProgress {
            user_id: (*user_id).to_string(),
        },
        ["users", user_id, "skill-map"] => Endpoint::SkillMap {
            user_id: (*user_id).to_string(),
        },
        ["users", user_id, "recommendations"] => Endpoint::Recommendations {
            user_id: (*user_id).to_string(),
        },
        ["quizzes"] => Endpoint::Quizzes,
        ["quizzes", "lesson", lesson_id] => Endpoint::QuizzesByLesson {
            lesson_id: (*lesson_id).to_string(),
        },
        ["quizzes", quiz_id] => Endpoint::Quiz {
            quiz_id: (*quiz_id).to_string(),
        },
        _ => return None,
    };
    Some(endpoint)
}

fn match_post(segments: &[&str]) -> Option<Endpoint> {
    let endpoint = match segments {
        ["progress", "track"] => Endpoint::TrackProgress,
        ["quizzes", "evaluate-answer"] => Endpoint::EvaluateAnswer,
        ["quizzes", "score"] => Endpoint::ScoreQuiz,
        ["exercises", "validate"] => Endpoint::ValidateExercise,
        ["exercises", "submit"] => Endpoint::SubmitExercise,
        _ => return None,
    };
    Some(endpoint)
}
