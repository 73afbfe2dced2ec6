use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateCommentDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CommentDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub username: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
