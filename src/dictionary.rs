use std::collections::HashMap;
use std::path::Path;

/// Source of definitions for candidate words.
///
/// `lookup` returns `None` both for "not a word" and for any failure the
/// implementation chooses not to surface; the search engine treats the two
/// identically and never retries.
pub trait Dictionary {
    fn lookup(&self, candidate: &str) -> Option<String>;
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn lookup(&self, candidate: &str) -> Option<String> {
        (**self).lookup(candidate)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, candidate: &str) -> Option<String> {
        (**self).lookup(candidate)
    }
}

/// In-memory word→definition map. Doubles as the offline dictionary source
/// (loaded from a JSON object file) and as a test double.
#[derive(Debug, Clone, Default)]
pub struct MapDictionary {
    entries: HashMap<String, String>,
}

impl MapDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load from a JSON file containing a single `{"word": "definition"}`
    /// object.
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for MapDictionary {
    fn lookup(&self, candidate: &str) -> Option<String> {
        self.entries.get(candidate).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lookup_hit_and_miss() {
        let dict = MapDictionary::from_entries([("אב", "father")]);
        assert_eq!(dict.lookup("אב"), Some("father".to_string()));
        assert_eq!(dict.lookup("בא"), None);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = MapDictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.lookup("אב"), None);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"אב": "father", "בא": "came"}}"#).unwrap();

        let dict = MapDictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup("בא"), Some("came".to_string()));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(MapDictionary::load(file.path()).is_err());
    }

    #[test]
    fn test_boxed_dictionary_delegates() {
        let dict: Box<dyn Dictionary> = Box::new(MapDictionary::from_entries([("אב", "father")]));
        assert_eq!(dict.lookup("אב"), Some("father".to_string()));
    }
}
