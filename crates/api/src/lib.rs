//! HTTP API: router, request/response mapping, configuration.

pub mod app;
pub mod config;
pub mod middleware;
