use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::{
            character::CharacterRepository,
            reference::{BreedRepository, ServerRepository},
        },
        error::{auth::AuthError, AppError},
        model::character::{CreateCharacterParams, UpdateCharacterParams},
        service::moderation::ModerationFilter,
    },
};

const MAX_LEVEL: i32 = 200;

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    moderation: &'a ModerationFilter,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection, moderation: &'a ModerationFilter) -> Self {
        Self { db, moderation }
    }

    /// Creates a character for the given user.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)`: The created character with server and breed names
    /// - `Err(AppError::BadRequest)`: Unknown server/breed or invalid level
    /// - `Err(AppError::Conflict)`: Name already used on that server
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateCharacterDto,
    ) -> Result<CharacterDto, AppError> {
        let repo = CharacterRepository::new(self.db);

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Character name must not be empty".to_string(),
            ));
        }
        self.check_name(&dto.name)?;
        if !(1..=MAX_LEVEL).contains(&dto.level) {
            return Err(AppError::BadRequest(format!(
                "Level must be between 1 and {}",
                MAX_LEVEL
            )));
        }

        let server = ServerRepository::new(self.db)
            .find_by_id(dto.server_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown server".to_string()))?;

        let breed = BreedRepository::new(self.db)
            .find_by_id(dto.breed_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unknown breed".to_string()))?;

        if repo
            .find_by_server_and_name(dto.server_id, &dto.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A character with that name already exists on this server".to_string(),
            ));
        }

        let character = repo
            .create(CreateCharacterParams {
                user_id,
                server_id: dto.server_id,
                breed_id: dto.breed_id,
                name: dto.name,
                level: dto.level,
            })
            .await?;

        Ok(to_dto(character, server.name, breed.name))
    }

    /// Gets all characters belonging to a user, enriched with server and
    /// breed names.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<CharacterDto>, AppError> {
        let repo = CharacterRepository::new(self.db);
        let server_repo = ServerRepository::new(self.db);
        let breed_repo = BreedRepository::new(self.db);

        let characters = repo.get_by_user(user_id).await?;

        let mut dtos = Vec::with_capacity(characters.len());

        for character in characters {
            let server = server_repo
                .find_by_id(character.server_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;
            let breed = breed_repo
                .find_by_id(character.breed_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Breed not found".to_string()))?;

            dtos.push(to_dto(character, server.name, breed.name));
        }

        Ok(dtos)
    }

    /// Updates a character. Only the owner or an admin may update.
    pub async fn update(
        &self,
        character_id: i32,
        caller: &entity::user::Model,
        dto: UpdateCharacterDto,
    ) -> Result<CharacterDto, AppError> {
        let repo = CharacterRepository::new(self.db);

        let character = repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        require_owner_or_admin(caller, character.user_id, "update this character")?;

        if let Some(level) = dto.level {
            if !(1..=MAX_LEVEL).contains(&level) {
                return Err(AppError::BadRequest(format!(
                    "Level must be between 1 and {}",
                    MAX_LEVEL
                )));
            }
        }
        if let Some(name) = &dto.name {
            if name.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Character name must not be empty".to_string(),
                ));
            }
            self.check_name(name)?;
            if let Some(other) = repo.find_by_server_and_name(character.server_id, name).await? {
                if other.id != character.id {
                    return Err(AppError::Conflict(
                        "A character with that name already exists on this server".to_string(),
                    ));
                }
            }
        }

        let updated = repo
            .update(
                character_id,
                UpdateCharacterParams {
                    name: dto.name,
                    level: dto.level,
                },
            )
            .await?;

        let server = ServerRepository::new(self.db)
            .find_by_id(updated.server_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;
        let breed = BreedRepository::new(self.db)
            .find_by_id(updated.breed_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Breed not found".to_string()))?;

        Ok(to_dto(updated, server.name, breed.name))
    }

    /// Deletes a character. Only the owner or an admin may delete; team
    /// memberships are removed by the cascade.
    pub async fn delete(
        &self,
        character_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        let character = repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        require_owner_or_admin(caller, character.user_id, "delete this character")?;

        repo.delete(character_id).await?;

        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), AppError> {
        if let Some(word) = self.moderation.find_banned_word(name) {
            return Err(AppError::BadRequest(format!(
                "Name contains a banned word: {}",
                word
            )));
        }

        Ok(())
    }
}

fn require_owner_or_admin(
    caller: &entity::user::Model,
    owner_id: i32,
    action: &str,
) -> Result<(), AppError> {
    if caller.id != owner_id && !caller.admin {
        return Err(AuthError::AccessDenied(
            caller.id,
            format!("User is not allowed to {}", action),
        )
        .into());
    }

    Ok(())
}

fn to_dto(
    character: entity::character::Model,
    server_name: String,
    breed_name: String,
) -> CharacterDto {
    CharacterDto {
        id: character.id,
        user_id: character.user_id,
        server_id: character.server_id,
        server_name,
        breed_id: character.breed_id,
        breed_name,
        name: character.name,
        level: character.level,
        created_at: character.created_at,
    }
}
