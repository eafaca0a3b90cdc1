// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::{QueryConfig, ScanConfig};
use crate::error::{Error, Result};

/// Optional `satchel.json` manifest. Every key is optional.
///
/// `satchel index` reads `output` and `scan`; `satchel search` reads `query`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    /// Output file, relative to the site root.
    pub output: Option<String>,
    pub scan: ScanConfig,
    pub query: QueryConfig,
}

impl InputManifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let manifest: InputManifest =
            serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version > 1 {
            return Err(Error::Config(format!(
                "unsupported manifest version {}",
                self.version
            )));
        }
        self.scan.validate()?;
        self.query.weights.validate()
    }
}
