//! Commerce error types.

use thiserror::Error;

/// Errors from domain-type construction and cart persistence.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A platform amount string could not be parsed.
    #[error("invalid money amount: {0:?}")]
    InvalidAmount(String),

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Cart storage backend failure.
    #[error("cart storage error")]
    Storage(#[from] StorageError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from a [`CartStorage`](crate::cart::CartStorage) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading the cart slot failed.
    #[error("failed to read cart slot: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the cart slot failed.
    #[error("failed to write cart slot: {0}")]
    Write(#[source] std::io::Error),
}
