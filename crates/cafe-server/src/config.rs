//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `cafe-directory.{toml,yaml,json}` in the working directory, then `CAFE_*`
//! environment variables (e.g. `CAFE_BIND_ADDRESS`, `CAFE_MAX_UPLOAD_BYTES`).

use anyhow::{Context, Result};
use config::Environment;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_address: String,
    /// JSON document holding cafes and blogs
    pub data_path: PathBuf,
    /// Directory served as static files; uploads land in `<public_dir>/uploads`
    pub public_dir: PathBuf,
    /// Largest accepted request body; bounds image uploads
    pub max_upload_bytes: usize,
}

/// 20 MiB
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

impl Config {
    pub fn upload_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }
}

pub fn load_config() -> Result<Config> {
    info!("Loading configuration...");
    build_config(
        "cafe-directory",
        Environment::with_prefix("CAFE").try_parsing(true),
    )
}

/// Defaults, then the optional file `<file_stem>.*`, then `env`
fn build_config(file_stem: &str, env: Environment) -> Result<Config> {
    let settings = config::Config::builder()
        .set_default("bind_address", "0.0.0.0:3000")?
        .set_default("data_path", "data.json")?
        .set_default("public_dir", "public")?
        .set_default("max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
        .add_source(config::File::with_name(file_stem).required(false))
        .add_source(env)
        .build()
        .context("Failed to read configuration sources")?;

    settings
        .try_deserialize::<Config>()
        .context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// `CAFE_*` variables from a fixed map instead of the process environment
    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("CAFE")
            .try_parsing(true)
            .source(Some(vars))
    }

    #[test]
    fn test_upload_dir_under_public() {
        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            data_path: PathBuf::from("data.json"),
            public_dir: PathBuf::from("/srv/public"),
            max_upload_bytes: 1024,
        };
        assert_eq!(config.upload_dir(), PathBuf::from("/srv/public/uploads"));
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("cafe-directory");

        let config = build_config(stem.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn test_file_then_env_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cafe-directory.toml"),
            "bind_address = \"127.0.0.1:8080\"\ndata_path = \"/var/lib/cafes/data.json\"\nmax_upload_bytes = 1048576\n",
        )
        .unwrap();
        let stem = dir.path().join("cafe-directory");

        let from_file = build_config(stem.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(from_file.bind_address, "127.0.0.1:8080");
        assert_eq!(from_file.data_path, PathBuf::from("/var/lib/cafes/data.json"));
        assert_eq!(from_file.public_dir, PathBuf::from("public"));
        assert_eq!(from_file.max_upload_bytes, 1_048_576);

        let from_env = build_config(
            stem.to_str().unwrap(),
            env(&[
                ("CAFE_BIND_ADDRESS", "127.0.0.1:9090"),
                ("CAFE_MAX_UPLOAD_BYTES", "4096"),
            ]),
        )
        .unwrap();
        assert_eq!(from_env.bind_address, "127.0.0.1:9090");
        assert_eq!(from_env.data_path, PathBuf::from("/var/lib/cafes/data.json"));
        assert_eq!(from_env.max_upload_bytes, 4096);
    }
}
