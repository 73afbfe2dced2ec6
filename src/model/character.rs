use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateCharacterDto {
    pub server_id: i32,
    pub breed_id: i32,
    pub name: String,
    pub level: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub level: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub server_id: i32,
    pub server_name: String,
    pub breed_id: i32,
    pub breed_name: String,
    pub name: String,
    pub level: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
