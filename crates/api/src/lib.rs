//! HTTP layer for the initiative tracker.
//!
//! Routing, request extraction, and response shaping live here. Business
//! rules sit in `initrack-core`, persistence in `initrack-db`.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
