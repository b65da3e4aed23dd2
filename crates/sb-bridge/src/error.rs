use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Initialization of {step} failed: {message} {location}")]
    Init {
        step: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Upstream request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Producer send failed: {message} {location}")]
    ProducerSend {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] sb_core::CoreError),
}

impl BridgeError {
    #[track_caller]
    pub fn init<M: Into<String>>(step: &'static str, message: M) -> Self {
        Self::Init {
            step,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn producer_send<M: Into<String>>(message: M) -> Self {
        Self::ProducerSend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, BridgeError>;
