/// Basic application code
pub mod app;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Registration errors
pub mod error;
/// Stored and requested registration models
pub mod model;
/// Repositories
pub mod repo;
/// Registration operations
pub mod service;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
