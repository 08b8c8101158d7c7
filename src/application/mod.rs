//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod repository;
pub mod theme;

pub use manage_config::ConfigService;
pub use repository::Repository;
pub use theme::ThemeService;
