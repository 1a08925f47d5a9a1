//! Common test utilities

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the resband binary
pub fn resband_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push(format!("resband{}", std::env::consts::EXE_SUFFIX));
    path
}

/// Run resband with the given arguments, colors disabled
pub fn run_resband(args: &[&str]) -> Output {
    Command::new(resband_bin())
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute resband")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
