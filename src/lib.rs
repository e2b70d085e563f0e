// SPDX-License-Identifier: MIT

//! Exercise Tracker: a small REST service for logging exercises per user.
//!
//! This crate provides the backend API for creating users, logging
//! exercises against them, and retrieving filtered exercise logs.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
