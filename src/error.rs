//! Error types shared by the MVP core and the host runtime.

use thiserror::Error;

/// Failures raised by a [`ModelStore`](crate::mvp::ModelStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store does not provide this operation.
    #[error("{operation} is not implemented by this store")]
    NotImplemented { operation: &'static str },

    /// The backing storage failed.
    #[error("storage failure: {0}")]
    Backend(String),
}

/// Errors that can occur while wiring or running an MVP application.
#[derive(Debug, Error)]
pub enum MvpError {
    #[error("presenter with name '{name}' exists")]
    DuplicatePresenter { name: String },

    #[error("model '{model}' store error: {source}")]
    Store {
        model: String,
        #[source]
        source: StoreError,
    },

    #[error("presenter has no model named '{name}'")]
    UnknownModel { name: String },

    #[error("model '{model}' has no value for id {id}")]
    MissingValue { model: String, id: String },

    #[error("model '{model}' value for id {id} would overflow")]
    Overflow { model: String, id: String },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
