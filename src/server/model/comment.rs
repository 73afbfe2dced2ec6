pub struct CreateCommentParams {
    pub event_id: i32,
    pub user_id: i32,
    pub content: String,
}
