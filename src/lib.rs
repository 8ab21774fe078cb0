//! Static directory index generation.
//!
//! Scans the working directory tree and writes an `index.html` listing
//! the root's regular files plus every descendant subdirectory that
//! already carries an index page of its own.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub mod format;
pub mod model;
pub mod scan;
mod template;

/// Name of the generated page; doubles as the marker that makes a
/// subdirectory linkable.
pub const OUTPUT_NAME: &str = "index.html";

/// Application container, holding the root of the scanned tree.
pub struct App {
    root: PathBuf,
}

impl App {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Generates the index page for the root directory.
    ///
    /// The output file is created before any scanning, so a run that
    /// cannot produce output fails immediately with nothing written.
    /// Row order is the walker's pre-order directory rows first, then
    /// the root's files sorted by name.
    ///
    /// # Errors
    /// Returns an error if the output file cannot be created or if the
    /// root directory itself cannot be read.
    pub fn run(&self) -> Result<()> {
        let mut out = File::create(self.root.join(OUTPUT_NAME))
            .with_context(|| format!("unable to create {OUTPUT_NAME}"))?;

        let dirs = scan::walk_dirs(&self.root)?;
        let files = scan::list_files(&self.root)?;

        let mut page = String::from(template::header());
        for entry in dirs.iter().chain(files.iter()) {
            page.push_str(&template::row(entry));
        }
        page.push_str(&template::footer(Local::now()));

        out.write_all(page.as_bytes())?;

        println!("{OUTPUT_NAME} created successfully.");
        Ok(())
    }
}
