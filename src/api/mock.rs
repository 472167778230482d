// Sample payloads module
// Progress, skill-map, recommendation and exercise endpoints return fixed
// sample data until a learner model backs them. Only echoed ids vary.

use serde::Serialize;
use serde_json::Value;

use crate::content::Difficulty;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackProgressResponse {
    pub success: bool,
    pub message: String,
    pub proficiency: f64,
    pub mastery_score: f64,
}

/// A missing lesson id reads `None`; non-string ids are written as JSON text
pub fn track_progress(lesson_id: &Value) -> TrackProgressResponse {
    let lesson = match lesson_id {
        Value::Null => "None".to_string(),
        Value::String(id) => id.clone(),
        other => other.to_string(),
    };
    TrackProgressResponse {
        success: true,
        message: format!("Tracked progress for lesson {lesson}"),
        proficiency: 0.85,
        mastery_score: 0.8,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressResponse {
    pub user_id: String,
    pub overall_progress: u32,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    pub avg_quiz_score: f64,
    pub current_streak: u32,
    pub hours_this_week: f64,
    pub hours_this_month: u32,
    pub total_hours: u32,
    pub recent_lessons: Vec<RecentLesson>,
    pub weak_areas: Vec<WeakArea>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentLesson {
    pub title: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakArea {
    pub concept_name: &'static str,
    pub proficiency: f64,
}

pub fn user_progress(user_id: &str) -> UserProgressResponse {
    UserProgressResponse {
        user_id: user_id.to_string(),
        overall_progress: 65,
        lessons_completed: 12,
        total_lessons: 20,
        avg_quiz_score: 78.5,
        current_streak: 7,
        hours_this_week: 5.5,
        hours_this_month: 22,
        total_hours: 45,
        recent_lessons: vec![
            RecentLesson {
                title: "Walkers and Traversal",
                category: "walkers",
                status: "completed",
                completed_date: Some("2 days ago"),
            },
            RecentLesson {
                title: "Advanced OSP Patterns",
                category: "osp",
                status: "in_progress",
                completed_date: None,
            },
        ],
        weak_areas: vec![
            WeakArea {
                concept_name: "Advanced Walkers",
                proficiency: 0.45,
            },
            WeakArea {
                concept_name: "Edge Mutations",
                proficiency: 0.55,
            },
        ],
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMapResponse {
    pub user_id: String,
    pub concepts: Vec<ConceptMastery>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMastery {
    pub concept_id: &'static str,
    pub concept_name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub mastery_score: f64,
    pub is_unlocked: bool,
    pub unlock_threshold: f64,
    pub times_practiced: u32,
    /// `null` for concepts never practiced
    pub last_practiced: Option<&'static str>,
    pub strength: &'static str,
}

pub fn skill_map(user_id: &str) -> SkillMapResponse {
    SkillMapResponse {
        user_id: user_id.to_string(),
        concepts: vec![
            ConceptMastery {
                concept_id: "nodes-basics",
                concept_name: "Node Basics",
                category: "core",
                description: "Understanding graph nodes in Jac",
                mastery_score: 0.95,
                is_unlocked: true,
                unlock_threshold: 0.7,
                times_practiced: 15,
                last_practiced: Some("1 day ago"),
                strength: "mastered",
            },
            ConceptMastery {
                concept_id: "walkers",
                concept_name: "Walkers",
                category: "core",
                description: "Graph traversal and walker patterns",
                mastery_score: 0.65,
                is_unlocked: true,
                unlock_threshold: 0.7,
                times_practiced: 8,
                last_practiced: Some("2 days ago"),
                strength: "developing",
            },
            ConceptMastery {
                concept_id: "by-llm",
                concept_name: "byLLM Agents",
                category: "advanced",
                description: "Using LLM decorators for AI integration",
                mastery_score: 0.35,
                is_unlocked: false,
                unlock_threshold: 0.8,
                times_practiced: 2,
                last_practiced: None,
                strength: "weak",
            },
        ],
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub user_id: String,
    pub next_lessons: Vec<RecommendedLesson>,
    pub reasons: Vec<&'static str>,
    pub struggling_concepts: Vec<StrugglingConcept>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLesson {
    pub lesson_id: &'static str,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrugglingConcept {
    pub concept_name: &'static str,
    pub recommendation: &'static str,
}

pub fn recommendations(user_id: &str) -> RecommendationsResponse {
    RecommendationsResponse {
        user_id: user_id.to_string(),
        next_lessons: vec![
            RecommendedLesson {
                lesson_id: "advanced-walkers-1",
                title: "Advanced Walker Patterns",
                difficulty: Difficulty::Intermediate,
                duration_minutes: 45,
                category: "walkers",
            },
            RecommendedLesson {
                lesson_id: "osp-advanced-1",
                title: "Complex OSP Structures",
                difficulty: Difficulty::Advanced,
                duration_minutes: 60,
                category: "osp",
            },
        ],
        reasons: vec![
            "You've mastered walker basics. Time for advanced patterns!",
            "Recommended for deepening your OSP knowledge.",
        ],
        struggling_concepts: vec![StrugglingConcept {
            concept_name: "Edge Mutations",
            recommendation: "Review the edge mutation tutorial",
        }],
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateExerciseResponse {
    pub exercise_id: Value,
    pub all_passed: bool,
    pub passed_tests: u32,
    pub total_tests: u32,
    pub test_details: Vec<TestDetail>,
}

#[derive(Debug, Serialize)]
pub struct TestDetail {
    pub name: &'static str,
    pub passed: bool,
}

/// Submitted code is not executed
pub fn validate_exercise(exercise_id: Value) -> ValidateExerciseResponse {
    let test_details = vec![
        TestDetail {
            name: "Test 1: Basic node creation",
            passed: true,
        },
        TestDetail {
            name: "Test 2: Node attributes",
            passed: true,
        },
        TestDetail {
            name: "Test 3: Edge creation",
            passed: true,
        },
    ];
    ValidateExerciseResponse {
        exercise_id,
        all_passed: true,
        passed_tests: 3,
        total_tests: 3,
        test_details,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExerciseResponse {
    pub success: bool,
    pub exercise_id: Value,
    pub message: &'static str,
    pub points_earned: u32,
}

pub const fn submit_exercise(exercise_id: Value) -> SubmitExerciseResponse {
    SubmitExerciseResponse {
        success: true,
        exercise_id,
        message: "Exercise submitted successfully!",
        points_earned: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_progress_message() {
        let value = serde_json::to_value(track_progress(&json!("jac-intro-1"))).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "Tracked progress for lesson jac-intro-1",
                "proficiency": 0.85,
                "masteryScore": 0.8
            })
        );
    }

    #[test]
    fn test_track_progress_message_for_odd_ids() {
        assert_eq!(
            track_progress(&Value::Null).message,
            "Tracked progress for lesson None"
        );
        assert_eq!(
            track_progress(&json!(42)).message,
            "Tracked progress for lesson 42"
        );
    }

    #[test]
    fn test_user_progress_echoes_id() {
        let value = serde_json::to_value(user_progress("learner-7")).unwrap();
        assert_eq!(value["userId"], "learner-7");
        assert_eq!(value["overallProgress"], 65);
        assert_eq!(value["recentLessons"][0]["completedDate"], "2 days ago");
        assert!(value["recentLessons"][1].get("completedDate").is_none());
    }

    #[test]
    fn test_skill_map_never_practiced_is_null() {
        let value = serde_json::to_value(skill_map("u1")).unwrap();
        let concepts = value["concepts"].as_array().unwrap();
        assert_eq!(concepts.len(), 3);
        assert_eq!(concepts[2]["conceptId"], "by-llm");
        assert!(concepts[2]["lastPracticed"].is_null());
        assert_eq!(concepts[2]["isUnlocked"], false);
    }

    #[test]
    fn test_recommendation_difficulty_is_lowercase() {
        let value = serde_json::to_value(recommendations("u1")).unwrap();
        assert_eq!(value["nextLessons"][0]["difficulty"], "intermediate");
        assert_eq!(value["nextLessons"][1]["durationMinutes"], 60);
    }

    #[test]
    fn test_exercise_payloads() {
        let value = serde_json::to_value(validate_exercise(Value::Null)).unwrap();
        assert!(value["exerciseId"].is_null());
        assert_eq!(value["testDetails"].as_array().unwrap().len(), 3);

        let value = serde_json::to_value(submit_exercise(json!("ex-1"))).unwrap();
        assert_eq!(value["exerciseId"], "ex-1");
        assert_eq!(value["pointsEarned"], 10);
    }
}
