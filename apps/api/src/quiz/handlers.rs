use axum::Json;
use tracing::debug;

use crate::quiz::rules::{recommend, QuizInput, QuizResponse};

/// POST /api/quiz
///
/// Pure evaluation — never touches the store, cannot fail past
/// deserialization.
pub async fn submit_quiz(Json(input): Json<QuizInput>) -> Json<QuizResponse> {
    debug!(
        hair_type = %input.hair_type,
        scalp = ?input.scalp,
        past_treatments = ?input.past_treatments,
        goals = input.goals.len(),
        "quiz submitted"
    );
    Json(recommend(&input))
}
