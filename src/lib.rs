//! MedAI Clerk marketing site
//!
//! A server-rendered landing site for MedAI Clerk, the AI assistant that
//! drafts SOAP notes and suggests ICD-10 codes.
//!
//! # Architecture
//!
//! - **Server**: Axum router with static assets, tracing and request timeouts
//! - **UI**: maud templates composed into a shared page shell
//! - **Config**: defaults, YAML file, environment and CLI layered with `config`
//!
//! # Modules
//!
//! - [`config`]: Layered application configuration
//! - [`site`]: Routes, navigation entries and the clock
//! - [`ui`]: Page shell, landing page and secondary pages
//! - [`server`]: Router construction and startup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod server;
pub mod site;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::site::Clock;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Date source for the footer year.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}
