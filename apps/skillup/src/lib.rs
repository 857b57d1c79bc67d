pub mod analysis;
pub mod api_client;
pub mod cli;
pub mod config;
pub mod courses;
pub mod errors;
pub mod models;
pub mod parsing;
pub mod report;
