use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::comment::{CommentDto, CreateCommentDto},
};

impl ApiClient {
    pub async fn get_comments(&self, event_id: i32) -> Result<Vec<CommentDto>, ApiError> {
        let request = ApiRequest::get(format!("/api/events/{event_id}/comments"));
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn create_comment(
        &self,
        event_id: i32,
        content: String,
    ) -> Result<CommentDto, ApiError> {
        let request = ApiRequest::post(format!("/api/events/{event_id}/comments"))
            .json(&CreateCommentDto { content })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_comment(&self, comment_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/comments/{comment_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }
}
