use crate::{
    client::{
        api::helper::{parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::user::{PaginatedUsersDto, SetAdminDto, UserDto},
};

impl ApiClient {
    /// Gets a page of registered users. Admin only.
    pub async fn get_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsersDto, ApiError> {
        let url = format!("/api/users?page={page}&per_page={per_page}");
        let response = self.send(ApiRequest::get(url)).await?;
        parse_response(response).await
    }

    /// Grants or revokes a user's admin flag. Admin only.
    pub async fn set_admin(&self, user_id: i32, admin: bool) -> Result<UserDto, ApiError> {
        let request =
            ApiRequest::put(format!("/api/users/{user_id}/admin")).json(&SetAdminDto { admin })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }
}
