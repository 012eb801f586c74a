pub mod config;
pub mod core;
pub mod errors;
pub mod pipeline;

// Re-export commonly used items for convenience
pub use config::AppConfig;
pub use core::*;
pub use errors::{ConfigError, ConfigResult, ServiceError, ServiceResult};
pub use pipeline::{Services, Showcase, Stage};
