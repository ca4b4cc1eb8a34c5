//! Known-tag discovery
//!
//! Two ways to learn which labels a user already has:
//!
//! - [`active_labels`]: every non-color label currently attached to some
//!   path in the local store, via the reverse index.
//! - [`known_tags`]: every tag name the Finder has recorded in the user's
//!   synced preferences property list, including tags not currently
//!   attached to anything. This reads
//!   `~/Library/SyncedPreferences/com.apple.finder.plist` and therefore
//!   only works from an unrestricted process: inside an App Sandbox the
//!   container id environment variable is set and the call fails fast with
//!   [`DiscoveryError::RestrictedEnvironment`] instead of silently
//!   returning an empty or partial list.
//!
//! On hosts without the preferences file (any non-macOS machine) the
//! synced-preferences read yields an empty list.

pub mod error;

pub use error::DiscoveryError;

use crate::colors::{ColorIndex, ColorTable};
use crate::store::Database;
use plist::Value;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Environment variable the platform sets on sandboxed processes
const SANDBOX_CONTAINER_VAR: &str = "APP_SANDBOX_CONTAINER_ID";

/// Relative location of the Finder's synced preferences under the home dir
const FINDER_PREFS_RELATIVE: &str = "Library/SyncedPreferences/com.apple.finder.plist";

/// One tag the Finder knows about, with its associated color (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownTag {
    /// The tag name
    pub name: String,
    /// The color recorded for the tag; `ColorIndex::None` when uncolored
    /// or when the recorded number is out of range
    pub color: ColorIndex,
}

/// Is this process running inside a restricted (sandboxed) environment?
#[must_use]
pub fn is_restricted_environment() -> bool {
    std::env::var_os(SANDBOX_CONTAINER_VAR).is_some()
}

/// Every distinct non-color label currently in use in the store
///
/// Canonical color labels are filtered out against the table, so the
/// result is purely the free-text tags users have applied.
///
/// # Errors
/// Returns `DiscoveryError` if the store's label index cannot be read.
pub fn active_labels(db: &Database, table: &ColorTable) -> Result<BTreeSet<String>, DiscoveryError> {
    let all = db.list_all_labels()?;
    Ok(all
        .into_iter()
        .filter(|label| table.index_of_label(label).is_none())
        .collect())
}

/// Every tag recorded in the user's synced Finder preferences
///
/// Fails fast with `RestrictedEnvironment` before any file access when the
/// process is sandboxed. A missing preferences file yields an empty list.
///
/// # Errors
/// Returns `DiscoveryError` if the environment is restricted or the
/// preferences file exists but cannot be parsed.
pub fn known_tags(table: &ColorTable) -> Result<Vec<KnownTag>, DiscoveryError> {
    known_tags_inner(is_restricted_environment(), default_prefs_path(), table)
}

fn default_prefs_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(FINDER_PREFS_RELATIVE))
}

fn known_tags_inner(
    restricted: bool,
    prefs: Option<PathBuf>,
    table: &ColorTable,
) -> Result<Vec<KnownTag>, DiscoveryError> {
    if restricted {
        return Err(DiscoveryError::RestrictedEnvironment);
    }

    let Some(path) = prefs else {
        return Ok(Vec::new());
    };
    if !path.exists() {
        return Ok(Vec::new());
    }

    let value = Value::from_file(&path)?;
    Ok(parse_known_tags(&value, table))
}

/// Extract known tags from a parsed Finder preferences property list
///
/// The tag list lives at `values.FinderTagDict.value.FinderTags`, an array
/// of dictionaries with `n` (name) and `l` (color number) entries. Entries
/// whose name matches a canonical color label are skipped; unparseable
/// entries are ignored.
#[must_use]
pub fn parse_known_tags(value: &Value, table: &ColorTable) -> Vec<KnownTag> {
    let Some(tags) = finder_tags_array(value) else {
        return Vec::new();
    };

    tags.iter()
        .filter_map(|entry| {
            let dict = entry.as_dictionary()?;
            let name = dict.get("n")?.as_string()?.to_string();
            if table.index_of_label(&name).is_some() {
                return None;
            }
            let color = dict
                .get("l")
                .and_then(Value::as_signed_integer)
                .and_then(|raw| ColorIndex::from_raw(raw).ok())
                .unwrap_or(ColorIndex::None);
            Some(KnownTag { name, color })
        })
        .collect()
}

fn finder_tags_array(value: &Value) -> Option<&Vec<Value>> {
    value
        .as_dictionary()?
        .get("values")?
        .as_dictionary()?
        .get("FinderTagDict")?
        .as_dictionary()?
        .get("value")?
        .as_dictionary()?
        .get("FinderTags")?
        .as_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LabelStore;
    use crate::testing::TestDb;
    use plist::Dictionary;
    use std::path::Path;

    fn table() -> ColorTable {
        ColorTable::finder_default()
    }

    fn finder_prefs(entries: &[(&str, Option<i64>)]) -> Value {
        let tags: Vec<Value> = entries
            .iter()
            .map(|(name, color)| {
                let mut d = Dictionary::new();
                d.insert("n".to_string(), Value::String((*name).to_string()));
                if let Some(raw) = color {
                    d.insert("l".to_string(), Value::Integer((*raw).into()));
                }
                Value::Dictionary(d)
            })
            .collect();

        let mut value_dict = Dictionary::new();
        value_dict.insert("FinderTags".to_string(), Value::Array(tags));
        let mut tag_dict = Dictionary::new();
        tag_dict.insert("value".to_string(), Value::Dictionary(value_dict));
        let mut values = Dictionary::new();
        values.insert("FinderTagDict".to_string(), Value::Dictionary(tag_dict));
        let mut root = Dictionary::new();
        root.insert("values".to_string(), Value::Dictionary(values));
        Value::Dictionary(root)
    }

    #[test]
    fn test_parse_known_tags_extracts_names_and_colors() {
        let prefs = finder_prefs(&[("Work", Some(6)), ("Travel", None), ("Archive", Some(99))]);
        let tags = parse_known_tags(&prefs, &table());

        assert_eq!(
            tags,
            vec![
                KnownTag {
                    name: "Work".into(),
                    color: ColorIndex::Red
                },
                KnownTag {
                    name: "Travel".into(),
                    color: ColorIndex::None
                },
                // Out-of-range color numbers degrade to None
                KnownTag {
                    name: "Archive".into(),
                    color: ColorIndex::None
                },
            ]
        );
    }

    #[test]
    fn test_parse_known_tags_skips_canonical_color_labels() {
        let prefs = finder_prefs(&[("Red", Some(6)), ("Work", Some(2))]);
        let tags = parse_known_tags(&prefs, &table());

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Work");
    }

    #[test]
    fn test_parse_known_tags_tolerates_unexpected_shape() {
        assert!(parse_known_tags(&Value::String("junk".into()), &table()).is_empty());
        assert!(parse_known_tags(&Value::Dictionary(Dictionary::new()), &table()).is_empty());
    }

    #[test]
    fn test_restricted_environment_fails_fast() {
        let result = known_tags_inner(true, None, &table());
        assert!(matches!(result, Err(DiscoveryError::RestrictedEnvironment)));
    }

    #[test]
    fn test_missing_prefs_file_yields_empty() {
        let result =
            known_tags_inner(false, Some(PathBuf::from("/nonexistent/prefs.plist")), &table());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_known_tags_from_real_plist_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("com.apple.finder.plist");
        finder_prefs(&[("Projects", Some(4))])
            .to_file_xml(&path)
            .unwrap();

        let tags = known_tags_inner(false, Some(path), &table()).unwrap();
        assert_eq!(
            tags,
            vec![KnownTag {
                name: "Projects".into(),
                color: ColorIndex::Blue
            }]
        );
    }

    #[test]
    fn test_active_labels_filters_color_labels() {
        let test_db = TestDb::new();
        let db = test_db.db();

        db.set(
            Path::new("a.txt"),
            &["Red".to_string(), "Work".to_string()].into_iter().collect(),
        )
        .unwrap();
        db.set(
            Path::new("b.txt"),
            &["Blue".to_string(), "Travel".to_string()].into_iter().collect(),
        )
        .unwrap();

        let active = active_labels(db, &table()).unwrap();
        assert_eq!(
            active,
            ["Travel".to_string(), "Work".to_string()].into_iter().collect()
        );
    }
}
