//! Dynamic-library search path bootstrap
//!
//! On Linux and macOS the native Tasmanian libraries carry an rpath, so their
//! transitive dependencies resolve without help. Windows has no rpath: the
//! installation's `bin` directory must be on `PATH` before the first library
//! is loaded. [`bootstrap`] does that once per process.
//!
//! The mutation itself goes through [`SearchPathEnv`], so it can be exercised
//! against an in-memory environment instead of the real one.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::OnceLock;

use crate::config::BuildInputs;

/// Environment variable holding the dynamic-library search path on Windows
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Platform class, derived from the build-time system name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// Any platform whose libraries embed their own search paths
    Other(String),
}

impl Platform {
    /// Parse a `CMAKE_SYSTEM_NAME` style discriminator
    ///
    /// Only the exact value `"Windows"` selects [`Platform::Windows`].
    pub fn from_system_name(system_name: &str) -> Self {
        if system_name == "Windows" {
            Platform::Windows
        } else {
            Platform::Other(system_name.to_string())
        }
    }

    /// Platform this crate was built for
    pub fn embedded() -> Self {
        Self::from_system_name(BuildInputs::EMBEDDED.system_name)
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Separator between entries of a path list on this platform
    pub fn path_list_separator(&self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Other(_) => ':',
        }
    }
}

/// Read/write access to environment variables
///
/// Values are platform strings: an existing search path may hold entries
/// that are not valid UTF-8 and must be written back byte for byte.
pub trait SearchPathEnv {
    fn read(&self, key: &str) -> Option<OsString>;
    fn write(&mut self, key: &str, value: &OsStr);
}

/// The real process environment
///
/// Writes are visible to the whole process and inherited by any child
/// process spawned afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl SearchPathEnv for ProcessEnv {
    fn read(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn write(&mut self, key: &str, value: &OsStr) {
        env::set_var(key, value);
    }
}

impl SearchPathEnv for HashMap<String, OsString> {
    fn read(&self, key: &str) -> Option<OsString> {
        self.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &OsStr) {
        self.insert(key.to_string(), value.to_os_string());
    }
}

/// What a bootstrap run did to the search path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Non-Windows platform, environment left untouched
    Skipped { platform: Platform },
    /// `directory` was prepended; `value` is the new search path
    Prepended { directory: String, value: OsString },
}

impl BootstrapOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, BootstrapOutcome::Prepended { .. })
    }
}

/// Binary directory of an installation: `"{install_prefix}/bin"`
pub fn binary_dir(install_prefix: &str) -> String {
    format!("{install_prefix}/bin")
}

/// Prepend the installation's binary directory to the search path
///
/// Does nothing unless `platform` is Windows. The prepend is unconditional:
/// calling this twice leaves the directory on the path twice. Use
/// [`bootstrap`] for the guarded, once-per-process variant.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use std::ffi::{OsStr, OsString};
/// use tasmanian_config::bootstrap::{prepend_binary_dir, Platform, SearchPathEnv};
///
/// let mut env: HashMap<String, OsString> = HashMap::new();
/// env.write("PATH", OsStr::new(r"C:\A;C:\B"));
///
/// prepend_binary_dir(&Platform::Windows, "/opt/tasmanian", &mut env);
/// assert_eq!(env.read("PATH").unwrap(), r"/opt/tasmanian/bin;C:\A;C:\B");
/// ```
pub fn prepend_binary_dir<E>(platform: &Platform, install_prefix: &str, env: &mut E) -> BootstrapOutcome
where
    E: SearchPathEnv + ?Sized,
{
    if !platform.is_windows() {
        tracing::debug!(?platform, "library search path handled by rpath, nothing to do");
        return BootstrapOutcome::Skipped {
            platform: platform.clone(),
        };
    }

    let directory = binary_dir(install_prefix);
    let mut value = OsString::from(&directory);
    if let Some(current) = env.read(SEARCH_PATH_VAR) {
        value.push(platform.path_list_separator().to_string());
        value.push(current);
    }
    env.write(SEARCH_PATH_VAR, &value);

    tracing::info!(%directory, var = SEARCH_PATH_VAR, "prepended Tasmanian binary directory to library search path");
    BootstrapOutcome::Prepended { directory, value }
}

static BOOTSTRAP: OnceLock<BootstrapOutcome> = OnceLock::new();

/// Prepare the process for loading the native libraries
///
/// Must be called before the first native library is loaded. The first call
/// performs the search path update for the embedded platform and install
/// prefix; every later call, including concurrent ones, returns the recorded
/// outcome without touching the environment again.
pub fn bootstrap() -> &'static BootstrapOutcome {
    BOOTSTRAP.get_or_init(|| {
        let inputs = BuildInputs::EMBEDDED;
        prepend_binary_dir(
            &Platform::from_system_name(inputs.system_name),
            inputs.install_prefix,
            &mut ProcessEnv,
        )
    })
}
