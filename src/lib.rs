//! BandarAbbas AI: a small local-guide chat backend.
//!
//! A question is matched against static JSON listings (places, food, stays,
//! shops) by keyword scoring. The single best listing is handed to a hosted
//! text-generation model, which is constrained to talk about that listing
//! only.
//!
//! - [`store`]: per-category JSON listing files
//! - [`engine`]: classification, scoring, prompt building, generation
//! - [`api`]: axum routes (`POST /api/chat`, `GET /`, `GET /health`)

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod store;
