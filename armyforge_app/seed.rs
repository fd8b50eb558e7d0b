use std::path::Path;

use armyforge_game::models::faction::parse_faction_bytes;
use armyforge_types::{catalog::FactionData, errors::ApplicationError};

/// Faction catalogs shipped with the binary, as `(file name, content)`.
const BUNDLED_FACTIONS: &[(&str, &str)] = &[
    (
        "disciples-de-la-guerre_aof.json",
        include_str!("data/factions/disciples-de-la-guerre_aof.json"),
    ),
    (
        "disciples-de-la-guerre_aofr.json",
        include_str!("data/factions/disciples-de-la-guerre_aofr.json"),
    ),
    (
        "soeurs-benies_gf.json",
        include_str!("data/factions/soeurs-benies_gf.json"),
    ),
];

/// Parses the bundled seed dataset.
pub fn bundled_factions() -> Result<Vec<FactionData>, ApplicationError> {
    BUNDLED_FACTIONS
        .iter()
        .map(|(name, content)| {
            parse_faction_bytes(content.as_bytes()).map_err(|e| {
                ApplicationError::Infrastructure(format!("bundled faction {name}: {e}"))
            })
        })
        .collect()
}

/// Reads every `*.json` faction file in `dir`, in file name order.
///
/// A missing directory yields nothing; unreadable or invalid files are
/// logged and skipped.
pub async fn load_data_dir(dir: &Path) -> Vec<FactionData> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Cannot read faction data directory");
            return vec![];
        }
    };

    let mut paths = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    paths.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Failed listing faction data directory");
                break;
            }
        }
    }
    paths.sort();

    let mut factions = Vec::with_capacity(paths.len());
    for path in paths {
        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable faction file");
                continue;
            }
        };
        match parse_faction_bytes(&content) {
            Ok(data) => factions.push(data),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping invalid faction file");
            }
        }
    }
    factions
}
