//! Dictionary sources and the compiled-cache format.
//!
//! Everything here resolves to a plain `HashMap<String, u64>`; how the map
//! was produced (text file, JSON, compiled cache, some external store) is
//! irrelevant to the engine, which only ever sees a finished `Dictionary`.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid dictionary cache: {0}")]
    Cache(#[from] bincode::Error),

    #[error("invalid dictionary line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// On-disk shape of the compiled cache. A wrapper struct (rather than a bare
/// map) keeps room for versioning the format later.
#[derive(serde::Serialize, serde::Deserialize)]
struct CompiledDictionary {
    entries: HashMap<String, u64>,
}

/// Load entries from a plain-text dictionary: one `word frequency` pair per
/// line, whitespace separated, `#` comments and blank lines skipped. Extra
/// trailing fields (e.g. a part-of-speech tag column) are ignored.
pub fn load_text_entries(path: &Path) -> Result<HashMap<String, u64>, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = HashMap::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let word = fields.next().ok_or_else(|| PersistError::Parse {
            line: number + 1,
            reason: "missing word".into(),
        })?;
        let frequency = fields
            .next()
            .ok_or_else(|| PersistError::Parse {
                line: number + 1,
                reason: "missing frequency".into(),
            })?
            .parse::<u64>()
            .map_err(|e| PersistError::Parse {
                line: number + 1,
                reason: e.to_string(),
            })?;
        entries.insert(word.to_string(), frequency);
    }
    tracing::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load entries from a JSON object of `{"word": frequency}` pairs.
pub fn load_json_entries(path: &Path) -> Result<HashMap<String, u64>, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    let entries: HashMap<String, u64> = serde_json::from_reader(reader)?;
    tracing::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load entries picking the format from the file extension:
/// `.json` -> JSON, `.bin` -> compiled cache, anything else -> text lines.
pub fn load_entries(path: &Path) -> Result<HashMap<String, u64>, PersistError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json_entries(path),
        Some("bin") => load_cache(path),
        _ => load_text_entries(path),
    }
}

/// Write the compiled cache atomically: serialize into a temp file in the
/// target directory, then persist it over `path`.
pub fn save_cache(entries: &HashMap<String, u64>, path: &Path) -> Result<(), PersistError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let cache = CompiledDictionary { entries: entries.clone() };
    let temp_file = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &cache)?;
    temp_file.persist(path).map_err(|e| e.error)?;

    tracing::info!("saved {} entries to {}", entries.len(), path.display());
    Ok(())
}

pub fn load_cache(path: &Path) -> Result<HashMap<String, u64>, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    let cache: CompiledDictionary = bincode::deserialize_from(reader)?;
    tracing::info!("loaded {} entries from {}", cache.entries.len(), path.display());
    Ok(cache.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_text_entries_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# demo dictionary").unwrap();
        writeln!(file, "china 1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "研究生 4 n").unwrap();
        drop(file);

        let entries = load_text_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["china"], 1);
        assert_eq!(entries["研究生"], 4);
    }

    #[test]
    fn test_text_entries_bad_frequency() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict.txt");
        std::fs::write(&path, "china one\n").unwrap();

        match load_text_entries(&path) {
            Err(PersistError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dict.json");
        std::fs::write(&path, r#"{"ab": 5, "a": 1, "b": 1}"#).unwrap();

        let entries = load_json_entries(&path).unwrap();
        assert_eq!(entries["ab"], 5);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dict.bin");
        let entries: HashMap<String, u64> =
            [("生命".to_string(), 10), ("的".to_string(), 1)].into_iter().collect();

        save_cache(&entries, &path).unwrap();
        let loaded = load_cache(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_load_entries_picks_format_by_extension() {
        let dir = tempdir().unwrap();

        let text = dir.path().join("dict.txt");
        std::fs::write(&text, "vip 1\n").unwrap();
        assert_eq!(load_entries(&text).unwrap()["vip"], 1);

        let json = dir.path().join("dict.json");
        std::fs::write(&json, r#"{"vip": 2}"#).unwrap();
        assert_eq!(load_entries(&json).unwrap()["vip"], 2);

        let bin = dir.path().join("dict.bin");
        let entries: HashMap<String, u64> = [("vip".to_string(), 3)].into_iter().collect();
        save_cache(&entries, &bin).unwrap();
        assert_eq!(load_entries(&bin).unwrap()["vip"], 3);
    }
}
