use thiserror::Error;

use crate::DeliveryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("submission already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
