// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod state;

pub use api::ApiClient;
pub use error::ApiError;
