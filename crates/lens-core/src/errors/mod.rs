mod config_error;
mod lens_error;
mod storage_error;
mod transport_error;

pub use config_error::ConfigError;
pub use lens_error::{error_detail, LensError, LensResult};
pub use storage_error::StorageError;
pub use transport_error::TransportError;
