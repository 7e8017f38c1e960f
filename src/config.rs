use crate::error::{EvalError, Result};
use crate::types::config::SupevalConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "supeval.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".supeval/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/supeval/config.toml";

pub fn load_config(root: &Path) -> Result<Option<SupevalConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Repo,
    Local,
}

impl Layer {
    fn name(self) -> &'static str {
        match self {
            Layer::Global => "global",
            Layer::Repo => "repo",
            Layer::Local => "local",
        }
    }
}

/// Layers global, repo and local files; the repo file must exist for any config to load.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SupevalConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        info!(
            "no {} found in {}; using defaults",
            DEFAULT_CONFIG_FILE,
            root.display()
        );
        return Ok(None);
    }

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let candidates = [
        (Layer::Global, global_path),
        (Layer::Repo, Some(repo_path.as_path())),
        (Layer::Local, Some(local_path.as_path())),
    ];

    let mut merged = Value::Table(Map::new());
    let mut applied = Vec::new();
    for (layer, path) in candidates {
        let Some(path) = path.filter(|path| path.exists()) else {
            continue;
        };
        let overridden = merge_layer(&mut merged, read_toml_value(path)?);
        for key in &overridden {
            debug!(layer = layer.name(), key = %key, "config key overridden");
        }
        applied.push(layer.name());
    }
    info!(layers = %applied.join(" > "), "loaded config");

    let cfg: SupevalConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| EvalError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EvalError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Deep-merges `overlay` into `merged` and returns the dotted keys it replaced.
fn merge_layer(merged: &mut Value, overlay: Value) -> Vec<String> {
    let mut overridden = Vec::new();
    merge_value(merged, overlay, "", &mut overridden);
    overridden
}

fn merge_value(slot: &mut Value, overlay: Value, key: &str, overridden: &mut Vec<String>) {
    if let (Value::Table(table), Value::Table(overlay_table)) = (&mut *slot, &overlay) {
        for (child, value) in overlay_table {
            let dotted = if key.is_empty() {
                child.clone()
            } else {
                format!("{key}.{child}")
            };
            match table.get_mut(child) {
                Some(existing) => merge_value(existing, value.clone(), &dotted, overridden),
                None => {
                    table.insert(child.clone(), value.clone());
                }
            }
        }
        return;
    }
    overridden.push(key.to_string());
    *slot = overlay;
}
