pub mod analytics;
pub mod diary;
pub mod diary_input;
pub mod welcome;

pub use analytics::{MoodAnalytics, MoodRecord};
pub use diary::DiaryEntry;
pub use diary_input::{DeleteEntryResponse, EntryResponse};
pub use welcome::{EndpointIndex, WelcomeResponse};
