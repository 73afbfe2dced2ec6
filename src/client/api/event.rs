use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, ApiClient, ApiRequest},
        model::error::ApiError,
    },
    model::event::{
        CreateEventDto, EventDto, PaginatedEventsDto, TeamActionDto, UpdateEventDto,
    },
};

impl ApiClient {
    /// Gets a page of upcoming events, optionally filtered by server and tag.
    pub async fn get_events(
        &self,
        page: u64,
        per_page: u64,
        server_id: Option<i32>,
        tag_id: Option<i32>,
    ) -> Result<PaginatedEventsDto, ApiError> {
        let mut url = format!("/api/events?page={page}&per_page={per_page}");
        if let Some(server_id) = server_id {
            url.push_str(&format!("&server_id={server_id}"));
        }
        if let Some(tag_id) = tag_id {
            url.push_str(&format!("&tag_id={tag_id}"));
        }

        let response = self.send(ApiRequest::get(url)).await?;
        parse_response(response).await
    }

    pub async fn get_event(&self, event_id: i32) -> Result<EventDto, ApiError> {
        let request = ApiRequest::get(format!("/api/events/{event_id}"));
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn create_event(&self, dto: &CreateEventDto) -> Result<EventDto, ApiError> {
        let request = ApiRequest::post("/api/events").json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn update_event(
        &self,
        event_id: i32,
        dto: &UpdateEventDto,
    ) -> Result<EventDto, ApiError> {
        let request = ApiRequest::put(format!("/api/events/{event_id}")).json(dto)?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    pub async fn delete_event(&self, event_id: i32) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/api/events/{event_id}"));
        let response = self.send(request).await?;
        parse_empty_response(response).await
    }

    /// Adds one of the caller's characters to the event's team.
    pub async fn join_event(&self, event_id: i32, character_id: i32) -> Result<EventDto, ApiError> {
        let request = ApiRequest::post(format!("/api/events/{event_id}/join"))
            .json(&TeamActionDto { character_id })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }

    /// Removes one of the caller's characters from the event's team.
    pub async fn leave_event(
        &self,
        event_id: i32,
        character_id: i32,
    ) -> Result<EventDto, ApiError> {
        let request = ApiRequest::post(format!("/api/events/{event_id}/leave"))
            .json(&TeamActionDto { character_id })?;
        let response = self.send(request).await?;
        parse_response(response).await
    }
}
