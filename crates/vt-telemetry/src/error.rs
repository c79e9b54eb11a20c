use thiserror::Error;

use vt_registry::RegistryError;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("generator configuration error: {0}")]
    Config(String),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
