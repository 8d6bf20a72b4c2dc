//! Tasmanian Config - Rust binding shim
//!
//! Configuration and error signaling between the Python front end and the
//! three native Tasmanian libraries.
//!
//! # Architecture
//!
//! - **config**: Build-time metadata and library paths (immutable)
//! - **bootstrap**: One-time dynamic-library search path setup (Windows only)
//! - **error**: The `InputError` raised for incorrect caller input
//!
//! # Critical Invariants
//!
//! 1. Config values are fixed at build time and never recomputed
//! 2. `bootstrap()` runs before any native library is loaded, at most once
//! 3. `InputError` keeps its variable name and message separately inspectable

// Module declarations
pub mod bootstrap;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use bootstrap::{bootstrap, BootstrapOutcome, Platform};
pub use config::{BuildInputs, LibraryComponent, ProcessConfig};
pub use error::{InputError, InputResult};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn tasmanian_config(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // PATH must be ready before the front end loads any native library
    bootstrap::bootstrap();

    ffi::config::add_config_attributes(m)?;
    m.add_function(wrap_pyfunction!(ffi::config::library_path, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::config::bootstrap, m)?)?;
    m.add_class::<ffi::input_error::PyInputError>()?;
    Ok(())
}
