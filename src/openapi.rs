use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stoic Diary API",
        version = "0.1.0",
        description = "Diary entries tagged with a mood, answered with a stoic comment and quote"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        // Info
        crate::handlers::root_handler::welcome,
        crate::handlers::health::health_check,

        // Entries
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::list_entries,
        crate::handlers::entries_handler::get_entry,
        crate::handlers::entries_handler::delete_entry,

        // Analytics
        crate::handlers::analytics_handler::get_mood_analytics,
    ),
    components(
        schemas(
            crate::models::DiaryEntry,
            crate::models::EntryResponse,
            crate::models::DeleteEntryResponse,
            crate::models::MoodAnalytics,
            crate::models::MoodRecord,
            crate::models::WelcomeResponse,
            crate::models::EndpointIndex,
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check"),
        (name = "entries", description = "Diary entry management"),
        (name = "analytics", description = "Mood analytics (sample data)"),
    )
)]
pub struct ApiDoc;
