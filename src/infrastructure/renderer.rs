// src/infrastructure/renderer.rs
use crate::ports::Site;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, instrument};

/// Writes rendered sites to disk and hands the entry page to the system browser.
#[derive(Debug, Default)]
pub struct PageRenderer;

impl PageRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write every page of `site` into `dir`. Returns the entry page path.
    pub fn write_site(&self, site: &Site, dir: &Path) -> Result<PathBuf> {
        for page in &site.pages {
            let file_path = dir.join(&page.file_name);
            File::create(&file_path)
                .with_context(|| format!("Failed to create page at {}", file_path.display()))?
                .write_all(page.html.as_bytes())
                .with_context(|| format!("Failed to write page {}", page.file_name))?;
        }
        debug!(dir = ?dir, pages = site.pages.len(), "Wrote site");
        Ok(dir.join(&site.entry))
    }

    /// Write `site` into a fresh temp dir and open its entry page.
    ///
    /// The dir is not removed on exit: the browser reads it after we return.
    pub fn show(&self, site: &Site) -> Result<PathBuf> {
        let dir = Builder::new()
            .prefix("hrview-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?
            .keep();
        let entry = self.write_site(site, &dir)?;
        self.open_in_browser(&entry)?;
        Ok(entry)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        Ok(())
    }
}
