//! Wire types for the lesson and quiz generation endpoints and the per-user
//! search history.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels the generation endpoints accept.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Select-control label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub topic: String,
    pub difficulty: Difficulty,
}

/// Markdown lesson body plus the history row it was saved under.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LessonResponse {
    pub lesson: String,
    #[serde(default)]
    pub history_id: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub history_id: Option<i64>,
}

/// What a history row holds, lesson text or serialized quiz.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Lesson,
    Quiz,
}

/// One row of the history list; content itself is fetched per item.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub content_type: ContentKind,
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HistoryDetail {
    pub id: i64,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub content_type: ContentKind,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_difficulty_lowercase() {
        let request = GenerateRequest {
            topic: "Linear algebra".to_string(),
            difficulty: Difficulty::Intermediate,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"topic":"Linear algebra","difficulty":"intermediate"}"#
        );
    }

    #[test]
    fn difficulty_round_trips_through_strings() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_str_opt(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_str_opt("expert"), None);
    }

    #[test]
    fn history_entries_decode_the_server_list_shape() {
        let entries: Vec<HistoryEntry> = serde_json::from_str(
            r#"[
                {
                    "id": 3,
                    "topic": "Photosynthesis",
                    "difficulty": "beginner",
                    "content_type": "lesson",
                    "created_at": "2026-08-20T10:30:00"
                },
                {
                    "id": 4,
                    "topic": "Calculus",
                    "difficulty": null,
                    "content_type": "quiz",
                    "created_at": "2026-08-21T09:00:00"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content_type, ContentKind::Lesson);
        assert_eq!(entries[1].difficulty, None);
    }

    #[test]
    fn quiz_questions_tolerate_a_missing_explanation() {
        let response: QuizResponse = serde_json::from_str(
            r#"{
                "questions": [
                    {
                        "question": "2 + 2?",
                        "options": ["3", "4", "5", "6"],
                        "correct_answer": "4"
                    }
                ],
                "history_id": 9
            }"#,
        )
        .unwrap();

        assert_eq!(response.questions.len(), 1);
        assert_eq!(response.questions[0].explanation, None);
        assert_eq!(response.history_id, Some(9));
    }
}
