use crate::server::data::reference::{BreedRepository, ServerRepository, TagRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod get_all;
