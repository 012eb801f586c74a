pub mod config_error;
pub mod service_error;

pub use config_error::{ConfigError, ConfigResult};
pub use service_error::{ServiceError, ServiceResult};
