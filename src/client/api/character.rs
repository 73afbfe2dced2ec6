use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
};

impl ApiClient {
    /// Gets all of the caller's characters.
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, ApiError> {
        let response = self.send(ApiRequest::get("/api/characters")).await?;
        parse_response(response).await
    }

    pub async fn create_character(
        &self,
        dto: &CreateCharacterDto,
    ) -> Result<CharacterDto, ApiError> {
        let request = ApiRequest::post("/api/characters").json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn update_character(
        &self,
        character_id: i32,
        dto: &UpdateCharacterDto,
    ) -> Result<CharacterDto, ApiError> {
        let request = ApiRequest::put(format!("/api/characters/{character_id}")).json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_character(&self, character_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/characters/{character_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }
}
