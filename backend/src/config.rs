//! Build-time configuration of the Tasmanian installation
//!
//! The values here are substituted once, when the crate is built (see
//! `build.rs`), and never change while the process runs. Nothing is checked
//! against the filesystem: a library path is reported exactly as it was
//! substituted, whether or not the file exists.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::InputError;

/// One of the three native Tasmanian libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryComponent {
    /// Sparse-grid core (`libtasmaniansparsegrid`)
    SparseGridCore,
    /// DREAM decision/regression extension (`libtasmaniandream`)
    DecisionExtension,
    /// C addons used by batch models (`libtasmaniancaddons`)
    AddonSet,
}

impl LibraryComponent {
    /// All components, in load order
    pub const ALL: [LibraryComponent; 3] = [
        LibraryComponent::SparseGridCore,
        LibraryComponent::DecisionExtension,
        LibraryComponent::AddonSet,
    ];

    /// Short name used in the Python module attributes (`__path_lib{name}__`)
    pub fn short_name(self) -> &'static str {
        match self {
            LibraryComponent::SparseGridCore => "sparsegrid",
            LibraryComponent::DecisionExtension => "dream",
            LibraryComponent::AddonSet => "caddons",
        }
    }

    /// Native library stem, without platform prefix or extension
    pub fn library_stem(self) -> &'static str {
        match self {
            LibraryComponent::SparseGridCore => "tasmaniansparsegrid",
            LibraryComponent::DecisionExtension => "tasmaniandream",
            LibraryComponent::AddonSet => "tasmaniancaddons",
        }
    }
}

impl FromStr for LibraryComponent {
    type Err = InputError;

    /// Parse a component from its short name or its library stem
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LibraryComponent::ALL
            .into_iter()
            .find(|component| name == component.short_name() || name == component.library_stem())
            .ok_or_else(|| {
                InputError::new(
                    "component",
                    format!("unknown library component '{name}', expected one of: sparsegrid, dream, caddons"),
                )
            })
    }
}

impl fmt::Display for LibraryComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Raw substitution inputs, as handed over by the build/install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInputs<'a> {
    /// Platform discriminator, a `CMAKE_SYSTEM_NAME` value such as "Windows" or "Linux"
    pub system_name: &'a str,
    pub install_prefix: &'a str,
    pub version_major: &'a str,
    pub version_minor: &'a str,
    pub license: &'a str,
    pub author: &'a str,
    pub git_hash: &'a str,
    pub libsparsegrid_path: &'a str,
    pub libdream_path: &'a str,
    pub libcaddons_path: &'a str,
}

impl BuildInputs<'static> {
    /// Values embedded into this build of the crate
    pub const EMBEDDED: BuildInputs<'static> = BuildInputs {
        system_name: env!("TASMANIAN_SYSTEM_NAME"),
        install_prefix: env!("TASMANIAN_INSTALL_PREFIX"),
        version_major: env!("TASMANIAN_VERSION_MAJOR"),
        version_minor: env!("TASMANIAN_VERSION_MINOR"),
        license: env!("TASMANIAN_LICENSE"),
        author: env!("TASMANIAN_AUTHOR"),
        git_hash: env!("TASMANIAN_GIT_HASH"),
        libsparsegrid_path: env!("TASMANIAN_LIBSPARSEGRID_PATH"),
        libdream_path: env!("TASMANIAN_LIBDREAM_PATH"),
        libcaddons_path: env!("TASMANIAN_LIBCADDONS_PATH"),
    };
}

/// Immutable record of the installation metadata and library paths
///
/// # Example
/// ```
/// use tasmanian_config::{LibraryComponent, ProcessConfig};
///
/// let config = ProcessConfig::installed();
/// assert!(config.version().contains('.'));
/// assert!(!config.library_path(LibraryComponent::AddonSet).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessConfig {
    version: String,
    license: String,
    author: String,
    commit_hash: String,
    libsparsegrid_path: String,
    libdream_path: String,
    libcaddons_path: String,
}

static INSTALLED: OnceLock<ProcessConfig> = OnceLock::new();

impl ProcessConfig {
    /// Configuration of this installation, materialized on first access
    pub fn installed() -> &'static ProcessConfig {
        INSTALLED.get_or_init(|| ProcessConfig::from_inputs(&BuildInputs::EMBEDDED))
    }

    /// Build a configuration from substitution inputs
    ///
    /// The version is composed as `"{major}.{minor}"`; every other value is
    /// copied verbatim.
    pub fn from_inputs(inputs: &BuildInputs<'_>) -> Self {
        Self {
            version: format!("{}.{}", inputs.version_major, inputs.version_minor),
            license: inputs.license.to_string(),
            author: inputs.author.to_string(),
            commit_hash: inputs.git_hash.to_string(),
            libsparsegrid_path: inputs.libsparsegrid_path.to_string(),
            libdream_path: inputs.libdream_path.to_string(),
            libcaddons_path: inputs.libcaddons_path.to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    /// Installed path of one of the native libraries
    pub fn library_path(&self, component: LibraryComponent) -> &str {
        match component {
            LibraryComponent::SparseGridCore => &self.libsparsegrid_path,
            LibraryComponent::DecisionExtension => &self.libdream_path,
            LibraryComponent::AddonSet => &self.libcaddons_path,
        }
    }

    /// All `(component, path)` pairs in load order
    pub fn library_paths(&self) -> impl Iterator<Item = (LibraryComponent, &str)> + '_ {
        LibraryComponent::ALL
            .into_iter()
            .map(move |component| (component, self.library_path(component)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_matches_embedded_values() {
        let config = ProcessConfig::installed();

        assert_eq!(
            config.version(),
            format!(
                "{}.{}",
                env!("TASMANIAN_VERSION_MAJOR"),
                env!("TASMANIAN_VERSION_MINOR")
            )
        );
        assert_eq!(config.license(), env!("TASMANIAN_LICENSE"));
        assert_eq!(config.author(), env!("TASMANIAN_AUTHOR"));
        assert_eq!(config.commit_hash(), env!("TASMANIAN_GIT_HASH"));
        assert_eq!(
            config.library_path(LibraryComponent::SparseGridCore),
            env!("TASMANIAN_LIBSPARSEGRID_PATH")
        );
        assert_eq!(
            config.library_path(LibraryComponent::DecisionExtension),
            env!("TASMANIAN_LIBDREAM_PATH")
        );
        assert_eq!(
            config.library_path(LibraryComponent::AddonSet),
            env!("TASMANIAN_LIBCADDONS_PATH")
        );
    }

    #[test]
    fn test_installed_is_materialized_once() {
        let first = ProcessConfig::installed() as *const ProcessConfig;
        let second = ProcessConfig::installed() as *const ProcessConfig;
        assert_eq!(first, second);
    }

    #[test]
    fn test_component_names() {
        assert_eq!(LibraryComponent::SparseGridCore.short_name(), "sparsegrid");
        assert_eq!(LibraryComponent::DecisionExtension.short_name(), "dream");
        assert_eq!(LibraryComponent::AddonSet.short_name(), "caddons");
        assert_eq!(LibraryComponent::AddonSet.library_stem(), "tasmaniancaddons");
    }

    #[test]
    fn test_component_from_str() {
        assert_eq!("dream".parse::<LibraryComponent>(), Ok(LibraryComponent::DecisionExtension));
        assert_eq!(
            "tasmaniansparsegrid".parse::<LibraryComponent>(),
            Ok(LibraryComponent::SparseGridCore)
        );

        let err = "fortran".parse::<LibraryComponent>().unwrap_err();
        assert_eq!(err.variable_name(), "component");
        assert!(err.message().contains("'fortran'"));
    }
}
