//! Framework error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, XUnitError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XUnitError {
    /// `tear_down` returned an error. This is the only failure that escapes `run`.
    #[error("tear_down failed for `{name}`: {message}")]
    TearDown { name: String, message: String },

    #[error("no test method named `{name}`")]
    UnknownMethod { name: String },

    #[error("panicked: {message}")]
    Panicked { message: String },
}

impl XUnitError {
    pub fn tear_down(name: impl Into<String>, error: &anyhow::Error) -> Self {
        Self::TearDown {
            name: name.into(),
            message: format!("{:#}", error),
        }
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    /// Build from the payload of a caught panic.
    pub fn panicked(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        Self::Panicked { message }
    }
}
