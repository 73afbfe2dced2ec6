use crate::server::{
    data::character::CharacterRepository,
    model::character::{CreateCharacterParams, UpdateCharacterParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_server_and_name;
mod get_by_user;
mod update;
