//! # Project Tracker
//!
//! A small project-tracking API with a multi-timezone clock.
//!
//! ## Features
//! - Create, list and fetch projects
//! - Record and list daily logs per project
//! - Format the current instant across many IANA timezones
//! - Terminal clock that keeps an editable list of zones ticking
//! - Everything lives in memory and resets on restart

/// HTTP routes, handlers and error mapping
pub mod api;
/// Configuration management and environment variables
pub mod config;
/// Data models, repository contract and the in-memory store
pub mod database;
/// Timezone formatting and the injectable clock
pub mod services;
/// Utility functions for datetime, validation, and logging
pub mod utils;
