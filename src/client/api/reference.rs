use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::reference::{BreedDto, CreateNamedDto, ServerDto, TagDto},
};

impl ApiClient {
    pub async fn get_servers(&self) -> Result<Vec<ServerDto>, ApiError> {
        let response = self.send(ApiRequest::get("/api/servers")).await?;
        parse_response(response).await
    }

    pub async fn create_server(&self, name: String) -> Result<ServerDto, ApiError> {
        let request = ApiRequest::post("/api/servers").json(&CreateNamedDto { name })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_server(&self, server_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/servers/{server_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }

    pub async fn get_breeds(&self) -> Result<Vec<BreedDto>, ApiError> {
        let response = self.send(ApiRequest::get("/api/breeds")).await?;
        parse_response(response).await
    }

    pub async fn create_breed(&self, name: String) -> Result<BreedDto, ApiError> {
        let request = ApiRequest::post("/api/breeds").json(&CreateNamedDto { name })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_breed(&self, breed_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/breeds/{breed_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }

    pub async fn get_tags(&self) -> Result<Vec<TagDto>, ApiError> {
        let response = self.send(ApiRequest::get("/api/tags")).await?;
        parse_response(response).await
    }

    pub async fn create_tag(&self, name: String) -> Result<TagDto, ApiError> {
        let request = ApiRequest::post("/api/tags").json(&CreateNamedDto { name })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_tag(&self, tag_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/tags/{tag_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }
}
