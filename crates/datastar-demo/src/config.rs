//! # Configuration
//!
//! Demo settings are loaded with [`confique`] from layered sources.
//!
//! ## Priority
//!
//! 1. **CLI flags**: `generate --out <path>` overrides the output path.
//! 2. **Environment variables**: `DATASTAR_DEMO_OUTPUT`, `DATASTAR_DEMO_TITLE`,
//!    `DATASTAR_DEMO_SCRIPT_URL`.
//! 3. **Config file**: `datastar-demo.toml` in the working directory, or the
//!    file given with `--config`. A missing file is skipped.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `output` | `docs/index.html` | Where `generate` writes the page |
//! | `title` | `Datastar Attributes Demo` | Page `<title>` and heading |
//! | `script_url` | Datastar 1.0.0-RC.6 CDN bundle | Client script loaded by the page |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "datastar-demo.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Path of the generated page.
    #[config(default = "docs/index.html", env = "DATASTAR_DEMO_OUTPUT")]
    pub output: PathBuf,

    /// Title shown in the browser tab and page heading.
    #[config(default = "Datastar Attributes Demo", env = "DATASTAR_DEMO_TITLE")]
    pub title: String,

    /// Datastar client bundle the page loads as a module script.
    #[config(
        default = "https://cdn.jsdelivr.net/gh/starfederation/datastar@1.0.0-RC.6/bundles/datastar.js",
        env = "DATASTAR_DEMO_SCRIPT_URL"
    )]
    pub script_url: String,
}

impl DemoConfig {
    /// Load from the environment and the given file (or the default file).
    pub fn load(file: Option<&Path>) -> Result<Self, confique::Error> {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        tracing::debug!(file = %file.display(), "loading config");
        DemoConfig::builder().env().file(file).load()
    }
}
