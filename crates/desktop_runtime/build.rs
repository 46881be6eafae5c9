use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    title: String,
    icon: String,
    url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TierTables {
    manager: Vec<String>,
    cashier: Vec<String>,
    user: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    shell: toml::Table,
    windows: toml::Table,
    dock: toml::Table,
    tiers: TierTables,
    apps: Vec<AppEntry>,
}

fn validate(manifest: &DesktopManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "desktop config schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }

    let mut seen = HashSet::new();
    for app in &manifest.apps {
        for (field, value) in [
            ("id", &app.id),
            ("title", &app.title),
            ("icon", &app.icon),
            ("url", &app.url),
        ] {
            if value.trim().is_empty() {
                panic!("app `{}` in {path} has an empty `{field}`", app.id);
            }
        }
        if !seen.insert(app.id.as_str()) {
            panic!("duplicate app id `{}` in {path}", app.id);
        }
    }

    for (tier, ids) in [
        ("manager", &manifest.tiers.manager),
        ("cashier", &manifest.tiers.cashier),
        ("user", &manifest.tiers.user),
    ] {
        for id in ids {
            if !seen.contains(id.as_str()) {
                panic!("tier `{tier}` in {path} references unknown app id `{id}`");
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
