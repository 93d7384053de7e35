//! Render command publishing a stored document

use std::fs;
use std::path::PathBuf;

use starbase::AppResult;
use tracing::debug;

use blockwright_host::{Document, HostConfig};

use crate::commands::bootstrap_registry;

/// Run the render command: load a document, publish it through the
/// registry, and write or print the resulting markup.
pub fn run_render(input: PathBuf, output: Option<PathBuf>, config: Option<PathBuf>) -> AppResult {
    let config = match config {
        Some(path) => match HostConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: Failed to load host configuration: {}", e);
                return Ok(Some(1));
            }
        },
        None => HostConfig::default(),
    };

    let registry = match bootstrap_registry(config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: Failed to set up block registry: {}", e);
            return Ok(Some(1));
        }
    };

    let document = match Document::load(&input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: Failed to load document: {}", e);
            return Ok(Some(1));
        }
    };
    debug!("Loaded document with {} block(s)", document.len());

    let markup = match document.publish(&registry) {
        Ok(markup) => markup,
        Err(e) => {
            eprintln!("Error: Failed to publish document: {}", e);
            return Ok(Some(1));
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &markup) {
                eprintln!("Error: Failed to write output: {}", e);
                return Ok(Some(1));
            }
            println!(
                "✓ Published {} block(s) to {}",
                document.len(),
                path.display()
            );
        }
        None => print!("{}", markup),
    }

    Ok(None)
}
