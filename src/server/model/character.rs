pub struct CreateCharacterParams {
    pub user_id: i32,
    pub server_id: i32,
    pub breed_id: i32,
    pub name: String,
    pub level: i32,
}

pub struct UpdateCharacterParams {
    pub name: Option<String>,
    pub level: Option<i32>,
}
