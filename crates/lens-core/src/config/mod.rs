mod api_config;
pub mod defaults;
mod lens_config;
mod observability_config;
mod session_config;

pub use api_config::ApiConfig;
pub use lens_config::LensConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
