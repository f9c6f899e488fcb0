use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One diary record. None of the fields are validated beyond their JSON types:
/// `id` is caller-supplied and may repeat, `date` is free-form text and `mood`
/// is not restricted to the moods the quote generator knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiaryEntry {
    pub id: i64,
    #[schema(example = "2025-10-19")]
    pub date: String,
    pub text: String,
    #[schema(example = "neutral")]
    pub mood: String,
}
