use thiserror::Error;

use vt_core::{VehicleId, VtError};

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry was asked about a vehicle it does not hold.  Carries the
    /// id exactly as queried.  Always a programming or configuration error;
    /// never retried.
    #[error("vehicle {0:?} is not registered")]
    UnknownVehicle(String),

    #[error("vehicle {0} is registered more than once")]
    DuplicateVehicle(VehicleId),

    #[error("registry configuration error: {0}")]
    Config(String),

    #[error("registry parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] VtError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
