pub mod app_state;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod generation;
pub mod health;
pub mod openapi;
pub mod pipeline;
pub mod repositories;
pub mod router;
pub mod summaries;
