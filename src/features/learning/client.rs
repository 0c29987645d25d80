//! Request helpers for lesson and quiz generation and the search history.
//! Generation calls can take a while on the server side; the shared transport
//! timeout is the only cap applied here.

use crate::app_lib::{AppError, delete_json, get_json, post_json};

use super::types::{
    Difficulty, GenerateRequest, HistoryDetail, HistoryEntry, LessonResponse, MessageResponse,
    QuizResponse,
};

pub async fn generate_lesson(
    topic: &str,
    difficulty: Difficulty,
) -> Result<LessonResponse, AppError> {
    let request = GenerateRequest {
        topic: topic.to_string(),
        difficulty,
    };
    post_json("/api/ai/generate-lesson", &request).await
}

pub async fn generate_quiz(topic: &str, difficulty: Difficulty) -> Result<QuizResponse, AppError> {
    let request = GenerateRequest {
        topic: topic.to_string(),
        difficulty,
    };
    post_json("/api/ai/generate-quiz", &request).await
}

/// Newest-first list of the caller's generation history.
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, AppError> {
    get_json("/api/ai/search-history").await
}

pub async fn fetch_history_item(id: i64) -> Result<HistoryDetail, AppError> {
    get_json(&format!("/api/ai/search-history/{id}")).await
}

pub async fn delete_history_item(id: i64) -> Result<MessageResponse, AppError> {
    delete_json(&format!("/api/ai/search-history/{id}")).await
}

pub async fn clear_history() -> Result<MessageResponse, AppError> {
    delete_json("/api/ai/search-history/clear-all").await
}
