//! pkg-score crate
//!
//! This crate is an implementation detail of the `pkg-score` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod aggregate;

#[doc(hidden)]
pub mod batch;

#[doc(hidden)]
pub mod host;

#[doc(hidden)]
pub mod hosting;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod output;

#[doc(hidden)]
pub mod pipeline;

#[doc(hidden)]
pub mod resolve;
