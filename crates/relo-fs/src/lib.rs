//! Scoped document I/O for Relo
//!
//! The document is fully read and its handle released before any
//! transformation runs; a separate scoped acquisition writes the result
//! atomically afterwards. The two never overlap.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
