use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, EventFilter, UpdateEventParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod team;
mod update;
