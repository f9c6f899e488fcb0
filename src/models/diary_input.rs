use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DiaryEntry;

/// Response for a newly stored entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryResponse {
    pub entry: DiaryEntry,
    pub stoic_comment: String,
    pub stoic_quote: String,
}

/// Response for entry deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteEntryResponse {
    pub message: String,
    pub deleted_entry: DiaryEntry,
}
