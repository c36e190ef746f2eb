/// Environment-driven application settings
pub mod app;

/// Product catalog loading and validation
pub mod catalog;

/// Database connection and table creation for local storage
pub mod database;

pub use app::AppConfig;
