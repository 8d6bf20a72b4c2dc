//! Build-time substitution for the Tasmanian configuration values.
//!
//! The installer (CMake, a packaging script, or a plain `cargo build`) supplies
//! the values through `TASMANIAN_*` environment variables. Anything unset
//! falls back to a conventional install layout for the target platform. Every
//! value is re-exported to the crate with `cargo:rustc-env` and read back with
//! `env!` in `src/config.rs`.

use std::env;

const INPUTS: &[&str] = &[
    "TASMANIAN_SYSTEM_NAME",
    "TASMANIAN_INSTALL_PREFIX",
    "TASMANIAN_VERSION_MAJOR",
    "TASMANIAN_VERSION_MINOR",
    "TASMANIAN_LICENSE",
    "TASMANIAN_AUTHOR",
    "TASMANIAN_GIT_HASH",
    "TASMANIAN_LIBSPARSEGRID_PATH",
    "TASMANIAN_LIBDREAM_PATH",
    "TASMANIAN_LIBCADDONS_PATH",
];

fn main() {
    for key in INPUTS {
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let system_name = input("TASMANIAN_SYSTEM_NAME").unwrap_or_else(|| system_name_for(&target_os));

    let install_prefix = input("TASMANIAN_INSTALL_PREFIX").unwrap_or_else(|| {
        if system_name == "Windows" {
            "C:/Program Files/Tasmanian".to_string()
        } else {
            "/usr/local".to_string()
        }
    });

    let version_major = input("TASMANIAN_VERSION_MAJOR")
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION_MAJOR").expect("CARGO_PKG_VERSION_MAJOR"));
    let version_minor = input("TASMANIAN_VERSION_MINOR")
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION_MINOR").expect("CARGO_PKG_VERSION_MINOR"));

    let license = input("TASMANIAN_LICENSE")
        .unwrap_or_else(|| "BSD 3-Clause with UT-Battelle disclaimer".to_string());
    let author = input("TASMANIAN_AUTHOR").unwrap_or_else(|| "Miroslav Stoyanov".to_string());
    let git_hash = input("TASMANIAN_GIT_HASH")
        .unwrap_or_else(|| "Tasmanian git hash is not available here".to_string());

    let sparsegrid = input("TASMANIAN_LIBSPARSEGRID_PATH")
        .unwrap_or_else(|| default_library_path(&system_name, &install_prefix, "tasmaniansparsegrid"));
    let dream = input("TASMANIAN_LIBDREAM_PATH")
        .unwrap_or_else(|| default_library_path(&system_name, &install_prefix, "tasmaniandream"));
    let caddons = input("TASMANIAN_LIBCADDONS_PATH")
        .unwrap_or_else(|| default_library_path(&system_name, &install_prefix, "tasmaniancaddons"));

    emit("TASMANIAN_SYSTEM_NAME", &system_name);
    emit("TASMANIAN_INSTALL_PREFIX", &install_prefix);
    emit("TASMANIAN_VERSION_MAJOR", &version_major);
    emit("TASMANIAN_VERSION_MINOR", &version_minor);
    emit("TASMANIAN_LICENSE", &license);
    emit("TASMANIAN_AUTHOR", &author);
    emit("TASMANIAN_GIT_HASH", &git_hash);
    emit("TASMANIAN_LIBSPARSEGRID_PATH", &sparsegrid);
    emit("TASMANIAN_LIBDREAM_PATH", &dream);
    emit("TASMANIAN_LIBCADDONS_PATH", &caddons);
}

/// Only an unset variable falls back; an empty value is substituted as is.
fn input(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn emit(key: &str, value: &str) {
    // rustc-env values are line based
    if value.contains('\n') {
        panic!("{key} must be a single line, got {value:?}");
    }
    println!("cargo:rustc-env={key}={value}");
}

/// Maps a Cargo target OS onto the matching `CMAKE_SYSTEM_NAME` value.
fn system_name_for(target_os: &str) -> String {
    match target_os {
        "windows" => "Windows".to_string(),
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

fn default_library_path(system_name: &str, install_prefix: &str, stem: &str) -> String {
    match system_name {
        "Windows" => format!("{install_prefix}/bin/{stem}.dll"),
        "Darwin" => format!("{install_prefix}/lib/lib{stem}.dylib"),
        _ => format!("{install_prefix}/lib/lib{stem}.so"),
    }
}
