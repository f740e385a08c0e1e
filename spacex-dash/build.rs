//! Build script for spacex-dash.
//!
//! Copies the launch records CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. The dashboard cannot start without it,
//! so a missing fixture fails the build instead of embedding a placeholder.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURE: &str = "../fixtures/spacex_launch_dash.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let src = Path::new(FIXTURE);
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    if !src.exists() {
        panic!("Launch records fixture {} not found", FIXTURE);
    }
    fs::copy(src, &dest).unwrap_or_else(|e| {
        panic!("Failed to copy {} to {}: {}", FIXTURE, dest.display(), e);
    });

    println!("cargo:rerun-if-changed={}", FIXTURE);
    println!("cargo:rerun-if-changed=build.rs");
}
