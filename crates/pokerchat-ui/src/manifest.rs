use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use pokerchat_core::{
    Card, IconError, IconId, IconTables, LowerIcons, LowerKey, ParseCardError, Slot, Suit,
    UpperIcons,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the JSON manifest used by [`IconManifest::current`].
pub const MANIFEST_ENV: &str = "POKERCHAT_ICON_MANIFEST";

/// Key of the face-down entry in both tables.
pub const FACE_DOWN_KEY: &str = "face_down";

/// On-disk form of the icon tables.
///
/// Upper keys use card notation (`As`, `Td`), lower keys suit notation
/// (`s`, `d`); both tables also carry a [`FACE_DOWN_KEY`] entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct IconManifest {
    pub upper: BTreeMap<String, IconId>,
    pub lower: BTreeMap<String, IconId>,
}

static CURRENT: Lazy<Result<IconTables, ManifestError>> = Lazy::new(load_current);

fn load_current() -> Result<IconTables, ManifestError> {
    let Ok(path) = std::env::var(MANIFEST_ENV) else {
        tracing::debug!(
            target: "pokerchat_ui::manifest",
            "no {MANIFEST_ENV} set; using placeholder icons"
        );
        return IconManifest::placeholder()
            .into_tables()
            .map_err(|source| ManifestError::Invalid {
                path: PathBuf::from("<placeholder>"),
                source,
            });
    };

    let tables = IconManifest::load_tables(&path);
    match &tables {
        Ok(_) => tracing::info!(
            target: "pokerchat_ui::manifest",
            path = %path,
            "loaded icon manifest"
        ),
        Err(err) => tracing::error!(
            target: "pokerchat_ui::manifest",
            path = %path,
            error = %err,
            "icon manifest rejected"
        ),
    }
    tables
}

impl IconManifest {
    /// Unicode card glyphs, complete for every card.
    pub fn placeholder() -> Self {
        let mut upper: BTreeMap<String, IconId> = Card::standard_deck()
            .map(|card| {
                let glyph = format!("{}{}", card.rank, card.suit.symbol());
                (card.to_string(), IconId::new(glyph))
            })
            .collect();
        upper.insert(FACE_DOWN_KEY.to_string(), IconId::new("🂠"));

        let mut lower: BTreeMap<String, IconId> = Suit::ALL
            .into_iter()
            .map(|suit| (suit.to_string(), IconId::new(suit.symbol().to_string())))
            .collect();
        lower.insert(FACE_DOWN_KEY.to_string(), IconId::new("▒"));

        Self { upper, lower }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read, parse and validate a manifest in one step.
    pub fn load_tables(path: impl AsRef<Path>) -> Result<IconTables, ManifestError> {
        let path = path.as_ref();
        Self::from_path(path)?
            .into_tables()
            .map_err(|source| ManifestError::Invalid {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Process-wide tables: the manifest named by [`MANIFEST_ENV`], or the
    /// placeholder glyphs when it is unset. Loaded once.
    pub fn current() -> Result<&'static IconTables, &'static ManifestError> {
        Lazy::force(&CURRENT).as_ref()
    }

    pub fn into_tables(self) -> Result<IconTables, TableError> {
        let upper = self
            .upper
            .into_iter()
            .map(|(key, icon)| -> Result<(Slot, IconId), TableError> {
                let slot = if key == FACE_DOWN_KEY {
                    Slot::Absent
                } else {
                    key.parse::<Card>()
                        .map(Slot::Concrete)
                        .map_err(|source| TableError::Key {
                            table: "upper",
                            key: key.clone(),
                            source,
                        })?
                };
                Ok((slot, icon))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let lower = self
            .lower
            .into_iter()
            .map(|(key, icon)| -> Result<(LowerKey, IconId), TableError> {
                let lower_key = if key == FACE_DOWN_KEY {
                    LowerKey::FaceDown
                } else {
                    key.parse::<Suit>()
                        .map(LowerKey::Suit)
                        .map_err(|source| TableError::Key {
                            table: "lower",
                            key: key.clone(),
                            source,
                        })?
                };
                Ok((lower_key, icon))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IconTables::new(
            UpperIcons::from_entries(upper)?,
            LowerIcons::from_entries(lower)?,
        ))
    }
}

/// A manifest whose entries do not form complete icon tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("{table} table key `{key}` is not valid notation: {source}")]
    Key {
        table: &'static str,
        key: String,
        #[source]
        source: ParseCardError,
    },
    #[error(transparent)]
    Icons(#[from] IconError),
}

/// Errors surfaced when loading manifest files.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read icon manifest {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse icon manifest {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("invalid icon manifest {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl ManifestError {
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Read { path, .. }
            | ManifestError::Parse { path, .. }
            | ManifestError::Invalid { path, .. } => path.as_path(),
        }
    }
}
