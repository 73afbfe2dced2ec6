use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::comment::CommentDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateEventDto {
    pub server_id: i32,
    pub tag_id: i32,
    pub title: String,
    pub event_time: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub description: Option<String>,
    pub max_slots: Option<i32>,
}

/// Partial event update. Omitted fields keep their value; for the nullable
/// fields an explicit JSON `null` clears the stored value, which is why they
/// are double optionals.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub event_time: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub max_slots: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct EventListItemDto {
    pub id: i32,
    pub creator_id: i32,
    pub creator_name: String,
    pub server_id: i32,
    pub server_name: String,
    pub tag_id: i32,
    pub tag_name: String,
    pub title: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub event_time: DateTime<Utc>,
    pub team_size: u64,
    pub max_slots: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct EventDto {
    pub id: i32,
    pub creator_id: i32,
    pub creator_name: String,
    pub server_id: i32,
    pub server_name: String,
    pub tag_id: i32,
    pub tag_name: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub event_time: DateTime<Utc>,
    pub max_slots: Option<i32>,
    pub team: Vec<TeamMemberDto>,
    pub comments: Vec<CommentDto>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TeamMemberDto {
    pub character_id: i32,
    pub character_name: String,
    pub level: i32,
    pub breed_name: String,
    pub owner_id: i32,
    pub owner_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TeamActionDto {
    pub character_id: i32,
}
