//! Build script for injecting version information at compile time.
//!
//! Release builds may set VERSION to stamp the binary; otherwise the
//! package version from Cargo.toml is used.

fn main() {
    println!("cargo:rerun-if-env-changed=VERSION");

    if let Ok(version) = std::env::var("VERSION") {
        println!("cargo:rustc-env=APP_VERSION={}", version);
    }
}
