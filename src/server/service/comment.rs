use sea_orm::DatabaseConnection;

use crate::{
    model::comment::CommentDto,
    server::{
        data::{comment::CommentRepository, event::EventRepository},
        error::{auth::AuthError, AppError},
        model::comment::CreateCommentParams,
        service::moderation::ModerationFilter,
    },
};

const MAX_COMMENT_LEN: usize = 2000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    moderation: &'a ModerationFilter,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, moderation: &'a ModerationFilter) -> Self {
        Self { db, moderation }
    }

    /// Posts a comment on an event.
    ///
    /// # Returns
    /// - `Ok(CommentDto)`: The created comment with the author's name
    /// - `Err(AppError::BadRequest)`: Empty, oversized, or banned content
    /// - `Err(AppError::NotFound)`: No such event
    pub async fn create(
        &self,
        event_id: i32,
        author: &entity::user::Model,
        content: String,
    ) -> Result<CommentDto, AppError> {
        let repo = CommentRepository::new(self.db);

        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let content = content.trim().to_string();

        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Comment must not be empty".to_string(),
            ));
        }
        if content.len() > MAX_COMMENT_LEN {
            return Err(AppError::BadRequest(format!(
                "Comment must be at most {} characters",
                MAX_COMMENT_LEN
            )));
        }
        if let Some(word) = self.moderation.find_banned_word(&content) {
            return Err(AppError::BadRequest(format!(
                "Content contains a banned word: {}",
                word
            )));
        }

        let comment = repo
            .create(CreateCommentParams {
                event_id,
                user_id: author.id,
                content,
            })
            .await?;

        Ok(CommentDto {
            id: comment.id,
            event_id: comment.event_id,
            user_id: comment.user_id,
            username: author.username.clone(),
            content: comment.content,
            created_at: comment.created_at,
        })
    }

    /// Gets an event's comments, oldest first.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<CommentDto>, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let comments = CommentRepository::new(self.db)
            .get_by_event(event_id)
            .await?
            .into_iter()
            .filter_map(|(comment, author)| {
                author.map(|author| CommentDto {
                    id: comment.id,
                    event_id: comment.event_id,
                    user_id: comment.user_id,
                    username: author.username,
                    content: comment.content,
                    created_at: comment.created_at,
                })
            })
            .collect();

        Ok(comments)
    }

    /// Deletes a comment. Only the author or an admin may delete.
    pub async fn delete(
        &self,
        comment_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(
                caller.id,
                "User is not allowed to delete this comment".to_string(),
            )
            .into());
        }

        repo.delete(comment_id).await?;

        Ok(())
    }
}
