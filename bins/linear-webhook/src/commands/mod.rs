//! Command implementations

pub mod sign;
pub mod verify;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the raw delivery body from a file, or from stdin when no path is given.
pub fn read_body(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read body from {}", path.display())),
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("Failed to read body from stdin")?;
            Ok(body)
        }
    }
}
