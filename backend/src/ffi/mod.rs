//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the installation config and the input error to
//! the Python front end.
//!
//! # Design Principles
//!
//! 1. **Bootstrap first**: The search path is prepared before anything else
//!    in the module is initialized
//! 2. **Plain values**: Config is exposed as module-level strings
//! 3. **One input error**: Every `InputError` surfaces as `TasmanianInputError`

pub mod config;
pub mod input_error;
