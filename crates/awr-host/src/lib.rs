pub mod config;
pub mod error;
pub mod executor;
pub mod http;

pub use config::{AuthConfig, ConfigError, HostConfig, HttpServerConfig};
pub use error::ExecError;
pub use executor::{ActionExecutor, Executor};
