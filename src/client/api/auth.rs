use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::{
        auth::{LoginDto, RegisterDto},
        user::UserDto,
    },
};

impl ApiClient {
    /// Registers a new account. The session cookies land in the client's
    /// cookie store, so the caller is logged in afterwards.
    pub async fn register(&self, dto: &RegisterDto) -> Result<UserDto, ApiError> {
        let request = ApiRequest::post("/api/auth/register").json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn login(&self, dto: &LoginDto) -> Result<UserDto, ApiError> {
        let request = ApiRequest::post("/api/auth/login").json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = ApiRequest::post("/api/auth/logout");
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }

    /// Gets the currently authenticated user.
    pub async fn get_user(&self) -> Result<UserDto, ApiError> {
        let request = ApiRequest::get("/api/auth/user");
        let response = self.send(request).await?;
        parse_response(response).await
    }
}
