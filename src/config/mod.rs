pub mod loader;
pub mod types;

pub use loader::{resolve_endpoint, ConfigError, EndpointSource, ENDPOINT_ENV_VAR};
pub use types::{CounterConfig, DEFAULT_ENDPOINT};
