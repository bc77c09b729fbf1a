use std::env;
use std::process::Command;

/// Export `name` to the crate, preferring a value set in the build
/// environment over the computed fallback.
fn stamp(name: &str, fallback: impl FnOnce() -> String) {
    let value = env::var(name).unwrap_or_else(|_| fallback());
    println!("cargo:rustc-env={name}={value}");
    println!("cargo:rerun-if-env-changed={name}");
}

fn short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    stamp("EGG_TIMER_VERSION", || {
        env::var("CARGO_PKG_VERSION").unwrap_or_default()
    });
    // Tarball builds have no git checkout.
    stamp("EGG_TIMER_COMMIT", || {
        short_head().unwrap_or_else(|| String::from("unknown"))
    });
    println!("cargo:rerun-if-changed=.git/HEAD");
}
