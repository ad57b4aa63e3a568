// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Shipdeck", "shipdeck"));

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_BASE_URL: &str = "SHIPDECK_BACKEND_URL";
/// Name the web dashboard used; still honoured.
pub const LEGACY_ENV_BASE_URL: &str = "VITE_BACKEND_URL";
pub const ENV_TIMEOUT: &str = "SHIPDECK_TIMEOUT_SECS";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileSettings {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Source {
    Flag,
    Env(&'static str),
    File(PathBuf),
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Flag => f.write_str("--base-url"),
            Source::Env(name) => write!(f, "${}", name),
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub base_url_source: Source,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url_source: Source::Default,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// `Ok(None)` when the file does not exist.
pub fn read_file(path: &Path) -> Result<Option<FileSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let parsed: FileSettings =
        toml::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(Some(parsed))
}

impl Settings {
    /// Precedence: flag, then environment, then config file, then default.
    /// Empty values count as unset.
    pub fn resolve<F>(
        base_url_flag: Option<&str>,
        timeout_flag: Option<u64>,
        env: F,
        file: Option<(FileSettings, PathBuf)>,
    ) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let (file, file_path) = match file {
            Some((f, p)) => (f, Some(p)),
            None => (FileSettings::default(), None),
        };

        let (base_url, base_url_source) = if let Some(flag) = present(base_url_flag.map(str::to_string)) {
            (flag, Source::Flag)
        } else if let Some(v) = present(env(ENV_BASE_URL)) {
            (v, Source::Env(ENV_BASE_URL))
        } else if let Some(v) = present(env(LEGACY_ENV_BASE_URL)) {
            (v, Source::Env(LEGACY_ENV_BASE_URL))
        } else if let (Some(v), Some(p)) = (present(file.base_url), file_path) {
            (v, Source::File(p))
        } else {
            (DEFAULT_BASE_URL.to_string(), Source::Default)
        };

        let timeout_secs = match timeout_flag {
            Some(t) => t,
            None => match present(env(ENV_TIMEOUT)) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid ${} '{}', expected seconds", ENV_TIMEOUT, raw))?,
                None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        };

        Ok(Settings {
            base_url: base_url.trim().to_string(),
            timeout_secs,
            base_url_source,
        })
    }

    pub fn load(base_url_flag: Option<&str>, timeout_flag: Option<u64>) -> Result<Settings> {
        let file = match config_path() {
            Ok(path) => read_file(&path)?.map(|f| (f, path)),
            Err(e) => {
                tracing::debug!(error = %e, "no config dir, skipping config file");
                None
            }
        };
        Settings::resolve(base_url_flag, timeout_flag, |k| std::env::var(k).ok(), file)
    }
}
