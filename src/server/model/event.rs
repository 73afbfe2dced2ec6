use chrono::{DateTime, Utc};

pub struct CreateEventParams {
    pub creator_id: i32,
    pub server_id: i32,
    pub tag_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_time: DateTime<Utc>,
    pub max_slots: Option<i32>,
}

pub struct UpdateEventParams {
    pub title: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    /// `Some(None)` removes the slot cap.
    pub max_slots: Option<Option<i32>>,
}

/// Optional filters for event listings.
#[derive(Default, Clone, Copy)]
pub struct EventFilter {
    pub server_id: Option<i32>,
    pub tag_id: Option<i32>,
}
