//! # railgraph-error
//!
//! Unified error handling for railgraph.
//!
//! - **ErrorKind**: what went wrong (e.g. InvalidFormat, DeserializationFailed)
//! - **Operation**: where it went wrong (e.g. `collect::node_tuple`)
//! - **Context**: key/value pairs locating the offending input
//! - **Source**: the wrapped lower-level error, if any
//!
//! ## Usage
//!
//! ```rust
//! use railgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidFormat, "edge tuple must have 4 fields")
//!         .with_operation("collect::edge_tuple")
//!         .with_context("index", "3"))
//! }
//! ```
//!
//! External errors are wrapped with `set_source(err)`; callers further up
//! only append context.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using railgraph Error
pub type Result<T> = std::result::Result<T, Error>;
