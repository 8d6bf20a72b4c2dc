//! Module attributes and functions for the installation config

use pyo3::prelude::*;

use crate::config::{LibraryComponent, ProcessConfig};

/// Add the `__version__`, `__license__`, ... attributes to `m`
///
/// Attribute names match what the pure-Python configuration module always
/// exported, so existing front-end code keeps working.
pub fn add_config_attributes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let config = ProcessConfig::installed();

    m.add("__version__", config.version())?;
    m.add("__license__", config.license())?;
    m.add("__author__", config.author())?;
    m.add("__git_commit_hash__", config.commit_hash())?;

    for (component, path) in config.library_paths() {
        m.add(format!("__path_lib{}__", component.short_name()).as_str(), path)?;
    }
    Ok(())
}

/// Installed path of a native library
///
/// # Example (from Python)
///
/// ```python
/// from tasmanian_config import library_path
///
/// ctypes.cdll.LoadLibrary(library_path("sparsegrid"))
/// ```
///
/// # Errors
///
/// Raises TasmanianInputError if `component` is not one of
/// `sparsegrid`, `dream`, `caddons` (or the matching library stem).
#[pyfunction]
pub fn library_path(component: &str) -> PyResult<String> {
    let component: LibraryComponent = component.parse()?;
    Ok(ProcessConfig::installed().library_path(component).to_string())
}

/// Run the search path bootstrap, returns True if `PATH` was changed
///
/// Importing the module already does this; calling it again is harmless.
#[pyfunction]
pub fn bootstrap() -> bool {
    crate::bootstrap::bootstrap().mutated()
}
