//! API request routing module
//!
//! Entry point for HTTP request processing: CORS preflight, body size
//! validation, route matching, JSON body parsing and dispatch to the
//! endpoint handlers. Every response leaves through here so shared headers
//! and the access log are applied in one place.

mod evaluate;
mod handlers;
mod mock;
mod response;
mod types;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::{self, HeaderMap};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, Version};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::content::ContentStore;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{match_route, strip_api_prefix, Endpoint, RouteMatch};

use response::{bad_request, payload_too_large, route_not_found, JsonReply};
use types::{EvaluateAnswerRequest, TrackProgressRequest};

/// Header the frontend uses to identify the learner
const USER_ID_HEADER: &str = "x-user-id";

/// Request headers the router reads once up front
struct RequestContext {
    is_read: bool,
    if_none_match: Option<String>,
    user_id: Option<String>,
}

impl RequestContext {
    fn from_parts(parts: &Parts) -> Self {
        Self {
            is_read: parts.method == Method::GET || parts.method == Method::HEAD,
            if_none_match: header_string(&parts.headers, header::IF_NONE_MATCH.as_str()),
            user_id: header_string(&parts.headers, USER_ID_HEADER),
        }
    }
}

/// Main entry point for API requests
///
/// Generic over the body so tests can drive it with in-memory bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let start = Instant::now();
    let (parts, body) = req.into_parts();
    let config = &state.config;

    logger::log_headers_count(parts.headers.len(), config.logging.show_headers);
    let ctx = RequestContext::from_parts(&parts);
    if let Some(ref user_id) = ctx.user_id {
        logger::log_debug(&format!(
            "{} {} for user {user_id}",
            parts.method,
            parts.uri.path()
        ));
    }

    let mut response = route_request(&parts, body, &ctx, &state).await;
    http::apply_common_headers(
        &mut response,
        &config.http.server_name,
        config.http.enable_cors,
    );

    if config.logging.access_log {
        let entry = build_access_entry(&parts, &ctx, &response, remote_addr, start);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the request to a response, before shared headers are applied
async fn route_request<B>(
    parts: &Parts,
    body: B,
    ctx: &RequestContext,
    state: &AppState,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let http_config = &state.config.http;

    // 1. CORS preflight answers for any path
    if parts.method == Method::OPTIONS {
        return http::build_options_response(http_config.enable_cors);
    }

    // 2. Reject oversized bodies before reading them
    if let Some(reply) = check_body_size(&parts.headers, http_config.max_body_size) {
        return reply.into_response();
    }

    // 3. Match the route on the unprefixed path
    let path = strip_api_prefix(parts.uri.path(), &http_config.api_prefix);
    let endpoint = match match_route(&parts.method, path) {
        RouteMatch::Found(endpoint) => endpoint,
        RouteMatch::MethodNotAllowed(allow) => {
            logger::log_warning(&format!(
                "Method not allowed: {} {}",
                parts.method,
                parts.uri.path()
            ));
            return response::method_not_allowed(allow);
        }
        RouteMatch::NotFound => return route_not_found().into_response(),
    };

    // 4. Dispatch; only POST routes consume the body
    if ctx.is_read {
        let reply = dispatch_read(&endpoint, &state.store);
        let etag_source = reply.body.clone();
        return http::apply_etag(
            reply.into_response(),
            &etag_source,
            ctx.if_none_match.as_deref(),
        );
    }

    let reply = match read_body(body, http_config.max_body_size).await {
        Ok(bytes) => dispatch_write(&endpoint, &bytes),
        Err(reply) => reply,
    };
    reply.into_response()
}

/// GET/HEAD endpoints
fn dispatch_read(endpoint: &Endpoint, store: &ContentStore) -> JsonReply {
    match endpoint {
        Endpoint::Health => handlers::handle_health(),
        Endpoint::Lessons => handlers::handle_list_lessons(store),
        Endpoint::Lesson { lesson_id } => handlers::handle_get_lesson(store, lesson_id),
        Endpoint::LessonsByCategory { category } => {
            handlers::handle_lessons_by_category(store, category)
        }
        Endpoint::Concepts => handlers::handle_list_concepts(store),
        Endpoint::UserProgress { user_id } => handlers::handle_user_progress(user_id),
        Endpoint::SkillMap { user_id } => handlers::handle_skill_map(user_id),
        Endpoint::Recommendations { user_id } => handlers::handle_recommendations(user_id),
        Endpoint::Quizzes => handlers::handle_list_quizzes(store),
        Endpoint::Quiz { quiz_id } => handlers::handle_get_quiz(store, quiz_id),
        Endpoint::QuizzesByLesson { lesson_id } => {
            handlers::handle_quizzes_by_lesson(store, lesson_id)
        }
        Endpoint::TrackProgress
        | Endpoint::EvaluateAnswer
        | Endpoint::ScoreQuiz
        | Endpoint::ValidateExercise
        | Endpoint::SubmitExercise => route_not_found(),
    }
}

/// POST endpoints, each parsing its own JSON body
fn dispatch_write(endpoint: &Endpoint, body: &[u8]) -> JsonReply {
    match endpoint {
        Endpoint::TrackProgress => with_json(body, |req: TrackProgressRequest| {
            handlers::handle_track_progress(&req)
        }),
        Endpoint::EvaluateAnswer => with_json(body, |req: EvaluateAnswerRequest| {
            handlers::handle_evaluate_answer(&req)
        }),
        Endpoint::ScoreQuiz => with_json(body, handlers::handle_score_quiz),
        Endpoint::ValidateExercise => with_json(body, handlers::handle_validate_exercise),
        Endpoint::SubmitExercise => with_json(body, handlers::handle_submit_exercise),
        _ => route_not_found(),
    }
}

/// Parse the body as `T` and hand it to `handler`, or answer 400
///
/// The body must be a JSON object; arrays would otherwise deserialize
/// positionally into `T`.
fn with_json<T, F>(body: &[u8], handler: F) -> JsonReply
where
    T: DeserializeOwned,
    F: FnOnce(T) -> JsonReply,
{
    let parsed = serde_json::from_slice::<Value>(body)
        .map_err(|e| e.to_string())
        .and_then(|value| {
            if value.is_object() {
                serde_json::from_value::<T>(value).map_err(|e| e.to_string())
            } else {
                Err("expected a JSON object".to_string())
            }
        });

    match parsed {
        Ok(request) => handler(request),
        Err(e) => {
            logger::log_warning(&format!("Rejected request body: {e}"));
            bad_request(&format!("Invalid JSON: {e}"))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<JsonReply> {
    let content_length = headers.get(header::CONTENT_LENGTH)?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(payload_too_large(max_body_size))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Collect the body, enforcing the size limit for bodies without a
/// Content-Length (chunked uploads)
async fn read_body<B>(body: B, max_body_size: u64) -> Result<Bytes, JsonReply>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => {
            logger::log_error(&format!(
                "Request body too large: over {max_body_size} bytes"
            ));
            Err(payload_too_large(max_body_size))
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(bad_request("Failed to read request body"))
        }
    }
}

fn build_access_entry(
    parts: &Parts,
    ctx: &RequestContext,
    response: &Response<Full<Bytes>>,
    remote_addr: SocketAddr,
    start: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    entry.referer = header_string(&parts.headers, header::REFERER.as_str());
    entry.user_agent = header_string(&parts.headers, header::USER_AGENT.as_str());
    entry.user_id.clone_from(&ctx.user_id);
    entry.request_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2.0",
        Version::HTTP_3 => "3.0",
        _ => "1.1",
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content;
    use hyper::StatusCode;
    use serde_json::json;

    struct TestResponse {
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
    }

    impl TestResponse {
        fn json(&self) -> Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    fn test_state() -> Arc<AppState> {
        let mut config = Config::load_from("/nonexistent/ilp-config").unwrap();
        config.logging.access_log = false;
        config.http.max_body_size = 4096;
        Arc::new(AppState::new(config, content::load_embedded().unwrap()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    async fn send_request(state: &Arc<AppState>, req: Request<Full<Bytes>>) -> TestResponse {
        let response = handle_request(req, Arc::clone(state), peer()).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(state: &Arc<AppState>, uri: &str) -> TestResponse {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap();
        send_request(state, req).await
    }

    async fn post(state: &Arc<AppState>, uri: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap();
        send_request(state, req).await
    }

    #[tokio::test]
    async fn test_get_lesson_camel_case() {
        let state = test_state();
        let resp = get(&state, "/api/lessons/jac-intro-1").await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.headers[header::CONTENT_TYPE], "application/json");

        let lesson = resp.json();
        assert_eq!(lesson["lessonId"], "jac-intro-1");
        assert_eq!(lesson["category"], "jac_basics");
        assert!(lesson["durationMinutes"].is_u64());
        assert!(lesson.get("lesson_id").is_none());

        let sections = lesson["sections"].as_array().unwrap();
        assert!(!sections.is_empty());
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section["sectionNum"], i + 1);
            assert!(section["keyConcepts"].is_array());
        }
    }

    #[tokio::test]
    async fn test_every_lesson_round_trips_by_id() {
        let state = test_state();
        for summary in state.store.list_lessons() {
            let body = get(&state, &format!("/api/lessons/{}", summary.lesson_id))
                .await
                .json();
            assert_eq!(body["lessonId"], summary.lesson_id.as_str());
            let stored = state.store.get_lesson(&summary.lesson_id).unwrap();
            assert_eq!(
                body["sections"].as_array().unwrap().len(),
                stored.sections.len()
            );
        }
    }

    #[tokio::test]
    async fn test_prefix_is_optional() {
        let state = test_state();
        for path in ["/lessons/jac-walkers-1", "/quizzes", "/users/u1/skill-map"] {
            let prefixed = get(&state, &format!("/api{path}")).await;
            let bare = get(&state, path).await;
            assert_eq!(prefixed.status, StatusCode::OK);
            assert_eq!(prefixed.body, bare.body);
        }
    }

    #[tokio::test]
    async fn test_unknown_lesson_and_quiz() {
        let state = test_state();
        let resp = get(&state, "/api/lessons/does-not-exist").await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.json(), json!({"error": "Lesson not found"}));

        let resp = get(&state, "/api/quizzes/does-not-exist").await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.json(), json!({"error": "Quiz not found"}));
    }

    #[tokio::test]
    async fn test_list_lessons_count_matches() {
        let state = test_state();
        for uri in ["/api/lessons", "/lessons"] {
            let body = get(&state, uri).await.json();
            let lessons = body["lessons"].as_array().unwrap();
            assert_eq!(body["count"], lessons.len());
            assert_eq!(lessons.len(), 5);
            // summaries carry no sections
            assert!(lessons.iter().all(|l| l.get("sections").is_none()));
        }
    }

    #[tokio::test]
    async fn test_lessons_by_category() {
        let state = test_state();
        let body = get(&state, "/api/lessons/category/jac_basics").await.json();
        assert_eq!(body["category"], "jac_basics");
        assert_eq!(body["count"], 2);
        let lessons = body["lessons"].as_array().unwrap();
        assert!(lessons.iter().all(|l| l["category"] == "jac_basics"));

        let resp = get(&state, "/api/lessons/category/unknown").await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json()["count"], 0);
    }

    #[tokio::test]
    async fn test_quizzes() {
        let state = test_state();
        let body = get(&state, "/api/quizzes").await.json();
        assert_eq!(body["count"], 3);

        let body = get(&state, "/api/quizzes/lesson/jac-nodes-1").await.json();
        assert_eq!(body["lessonId"], "jac-nodes-1");
        assert_eq!(body["quizzes"][0]["quizId"], "quiz-nodes-edges-1");
        assert_eq!(body["quizzes"][0]["questionCount"], 2);

        let body = get(&state, "/api/quizzes/lesson/no-such-lesson").await.json();
        assert_eq!(body["count"], 0);

        let quiz = get(&state, "/api/quizzes/quiz-jac-basics-1").await.json();
        let questions = quiz["questions"].as_array().unwrap();
        assert_eq!(questions[0]["questionType"], "multiple_choice");
        assert!(questions[0]["options"].is_array());
        assert_eq!(questions[1]["correctAnswer"], true);
        assert_eq!(questions[2]["questionType"], "free_text");
    }

    #[tokio::test]
    async fn test_concepts() {
        let state = test_state();
        let body = get(&state, "/api/concepts").await.json();
        assert_eq!(body["count"], 5);
        assert_eq!(body["concepts"][0]["conceptId"], "nodes-basics");
    }

    #[tokio::test]
    async fn test_repeated_get_is_byte_identical() {
        let state = test_state();
        let first = get(&state, "/api/quizzes/quiz-walkers-1").await;
        let second = get(&state, "/api/quizzes/quiz-walkers-1").await;
        assert_eq!(first.body, second.body);
        assert_eq!(first.headers[header::ETAG], second.headers[header::ETAG]);
    }

    #[tokio::test]
    async fn test_if_none_match_returns_304() {
        let state = test_state();
        let first = get(&state, "/api/lessons").await;
        let etag = first.headers[header::ETAG].to_str().unwrap().to_string();

        let req = Request::builder()
            .uri("/api/lessons")
            .header(header::IF_NONE_MATCH, etag)
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = send_request(&state, req).await;
        assert_eq!(resp.status, StatusCode::NOT_MODIFIED);
        assert!(resp.body.is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_answer() {
        let state = test_state();
        let body = post(
            &state,
            "/api/quizzes/evaluate-answer",
            r#"{"questionId":"q3","userAnswer":"Nodes hold data in the graph","questionType":"free_text"}"#,
        )
        .await
        .json();
        assert_eq!(body["correct"], true);
        assert_eq!(body["feedback"]["message"], "Great job!");

        let body = post(
            &state,
            "/api/quizzes/evaluate-answer",
            r#"{"userAnswer":"false","questionType":"true_false"}"#,
        )
        .await
        .json();
        assert_eq!(body["correct"], false);
        assert_eq!(body["feedback"]["correct"], false);
        assert_eq!(body["feedback"]["message"], "Not quite right.");
    }

    #[tokio::test]
    async fn test_score_quiz() {
        let state = test_state();
        let resp = post(
            &state,
            "/api/quizzes/score",
            r#"{"quizId":"quiz-nodes-edges-1","answers":{"q1":1,"q2":1},"feedback":{"q1":{"correct":true},"q2":{"correct":false}}}"#,
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(
            resp.json(),
            json!({
                "quizId": "quiz-nodes-edges-1",
                "score": 50.0,
                "correctAnswers": 1,
                "totalQuestions": 2,
                "passed": false
            })
        );

        let body = post(&state, "/api/quizzes/score", "{}").await.json();
        assert_eq!(body["totalQuestions"], 0);
        assert_eq!(body["score"], 0.0);
        assert!(body["quizId"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let state = test_state();
        for uri in [
            "/api/progress/track",
            "/api/quizzes/evaluate-answer",
            "/api/quizzes/score",
            "/api/exercises/validate",
            "/api/exercises/submit",
        ] {
            let resp = post(&state, uri, "{not json").await;
            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{uri}");
            let error = resp.json()["error"].as_str().unwrap().to_string();
            assert!(error.starts_with("Invalid JSON: "), "{error}");
        }

        for body in ["[]", "42", r#""text""#, "null"] {
            let resp = post(&state, "/api/exercises/submit", body).await;
            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body}");
        }
    }

    #[tokio::test]
    async fn test_loosely_typed_fields_are_accepted() {
        let state = test_state();
        let resp = post(
            &state,
            "/api/progress/track",
            r#"{"userId":42,"lessonId":"jac-intro-1","status":"completed","timeSpent":"12 minutes"}"#,
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(
            resp.json()["message"],
            "Tracked progress for lesson jac-intro-1"
        );

        let resp = post(
            &state,
            "/api/quizzes/evaluate-answer",
            r#"{"questionId":3,"userAnswer":"true","questionType":7}"#,
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json()["correct"], true);

        let resp = post(
            &state,
            "/api/quizzes/score",
            r#"{"quizId":5,"userId":42,"answers":{"q1":"a"},"feedback":{"q1":{"correct":true}}}"#,
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json()["quizId"], 5);
        assert_eq!(resp.json()["score"], 100.0);

        let resp = post(&state, "/api/exercises/validate", r#"{"exerciseId":7,"code":null}"#).await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json()["exerciseId"], 7);

        let resp = post(&state, "/api/exercises/submit", r#"{"exerciseId":7,"userId":42}"#).await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json()["exerciseId"], 7);
        assert_eq!(resp.json()["pointsEarned"], 10);
    }

    #[tokio::test]
    async fn test_sample_progress_endpoints_echo_user() {
        let state = test_state();
        let body = get(&state, "/api/users/learner-1/progress").await.json();
        assert_eq!(body["userId"], "learner-1");
        assert_eq!(body["lessonsCompleted"], 12);

        let body = get(&state, "/api/users/learner-1/skill-map").await.json();
        assert_eq!(body["userId"], "learner-1");
        assert_eq!(body["concepts"].as_array().unwrap().len(), 3);

        let body = get(&state, "/api/users/learner-1/recommendations").await.json();
        assert_eq!(body["userId"], "learner-1");

        let body = get(&state, "/api/users/jane%20doe/progress").await.json();
        assert_eq!(body["userId"], "jane doe");
        let body = get(&state, "/api/lessons/jac%2Dintro%2D1").await.json();
        assert_eq!(body["lessonId"], "jac-intro-1");
        assert_eq!(body["nextLessons"][0]["lessonId"], "advanced-walkers-1");

        let body = post(
            &state,
            "/api/progress/track",
            r#"{"userId":"learner-1","lessonId":"jac-osp-1","status":"completed","timeSpent":600}"#,
        )
        .await
        .json();
        assert_eq!(body["message"], "Tracked progress for lesson jac-osp-1");
        assert_eq!(body["masteryScore"], 0.8);
    }

    #[tokio::test]
    async fn test_exercise_endpoints() {
        let state = test_state();
        let body = post(
            &state,
            "/api/exercises/validate",
            r#"{"exerciseId":"ex-1","code":"node A {}"}"#,
        )
        .await
        .json();
        assert_eq!(body["exerciseId"], "ex-1");
        assert_eq!(body["allPassed"], true);
        assert_eq!(body["passedTests"], body["totalTests"]);

        let body = post(&state, "/api/exercises/submit", r#"{"exerciseId":"ex-1"}"#)
            .await
            .json();
        assert_eq!(body["success"], true);
        assert_eq!(body["pointsEarned"], 10);
    }

    #[tokio::test]
    async fn test_user_header_does_not_change_output() {
        let state = test_state();
        let plain = get(&state, "/api/lessons/jac-osp-1").await;
        let req = Request::builder()
            .uri("/api/lessons/jac-osp-1")
            .header("X-User-ID", "learner-9")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let with_user = send_request(&state, req).await;
        assert_eq!(plain.body, with_user.body);
    }

    #[tokio::test]
    async fn test_cors_and_server_headers_everywhere() {
        let state = test_state();
        for resp in [
            get(&state, "/api/lessons").await,
            get(&state, "/api/nowhere").await,
            post(&state, "/api/quizzes/score", "oops").await,
        ] {
            assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(resp.headers[header::SERVER], "ilp-server/0.1");
        }
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let state = test_state();
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/quizzes/score")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = send_request(&state, req).await;
        assert_eq!(resp.status, StatusCode::NO_CONTENT);
        assert!(resp
            .headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let state = test_state();
        let resp = get(&state, "/api/nowhere").await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.json(), json!({"error": "Not Found"}));

        let resp = post(&state, "/api/lessons", "{}").await;
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers[header::ALLOW], "GET, HEAD, OPTIONS");
    }

    #[tokio::test]
    async fn test_oversized_body() {
        let state = test_state();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/quizzes/score")
            .header(header::CONTENT_LENGTH, "1000000")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();
        let resp = send_request(&state, req).await;
        assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);

        // no Content-Length header: caught while reading
        let big = format!(r#"{{"code":"{}"}}"#, "x".repeat(8192));
        let resp = post(&state, "/api/exercises/validate", &big).await;
        assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_healthz() {
        let state = test_state();
        let resp = get(&state, "/healthz").await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.json(), json!({"status": "ok"}));
    }
}
