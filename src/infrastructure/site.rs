//! Static site output.
//!
//! Produces the two files a host needs next to the wasm-bindgen bundle:
//!
//! ```text
//! <out>/index.html             pre-rendered page, mount root, loader script
//! <out>/manifest.webmanifest   web app manifest
//! ```

use crate::app::PageState;
use crate::domain::error::Result;
use crate::manifest::{WebManifest, MANIFEST_FILE};
use crate::ui::render_document;
use crate::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated page.
pub const INDEX_FILE: &str = "index.html";

/// Writes the page and its manifest into `out_dir`, creating it if needed.
///
/// Returns the paths written, page first.
///
/// # Errors
///
/// Returns [`LandingError::Io`](crate::LandingError::Io) if the directory or a
/// file cannot be written, and
/// [`LandingError::Manifest`](crate::LandingError::Manifest) if the manifest
/// fails to serialize.
pub fn write_site<P: AsRef<Path>>(out_dir: P, state: &PageState, config: &Config) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let _span = tracing::debug_span!("write_site", out_dir = %out_dir.display()).entered();

    fs::create_dir_all(out_dir)?;

    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, render_document(state, config))?;
    tracing::debug!(path = %index_path.display(), "wrote page");

    let manifest = WebManifest::new(&state.content, &state.theme, config);
    let manifest_path = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, manifest.to_json()?)?;
    tracing::debug!(path = %manifest_path.display(), "wrote manifest");

    Ok(vec![index_path, manifest_path])
}
