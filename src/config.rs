use std::env;
use std::path::PathBuf;

use crate::lookup::DEFAULT_CAPACITY;

const LEXICON_FILE: &str = "lexicon.json";

/// Runtime settings resolved from flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub capacity: usize,
}

impl Config {
    pub fn from_env(db_flag: Option<PathBuf>, capacity: Option<usize>) -> Self {
        Self {
            db_path: resolve_db_path(db_flag, |var| env::var(var).ok()),
            capacity: capacity.unwrap_or(DEFAULT_CAPACITY),
        }
    }
}

/// First match wins: explicit flag, `$WNSEARCHDIR`, `$WNHOME/dict`, then
/// `./dict`. Blank variables are treated as unset.
pub fn resolve_db_path(
    flag: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    let var = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(dir) = var("WNSEARCHDIR") {
        return PathBuf::from(dir).join(LEXICON_FILE);
    }
    if let Some(home) = var("WNHOME") {
        return PathBuf::from(home).join("dict").join(LEXICON_FILE);
    }
    PathBuf::from("dict").join(LEXICON_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn flag_wins() {
        let path = resolve_db_path(
            Some(PathBuf::from("/tmp/x.json")),
            vars(&[("WNSEARCHDIR", "/opt/wn")]),
        );
        assert_eq!(path, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn searchdir_before_home() {
        let path = resolve_db_path(
            None,
            vars(&[("WNSEARCHDIR", "/opt/wn"), ("WNHOME", "/usr/wn")]),
        );
        assert_eq!(path, PathBuf::from("/opt/wn/lexicon.json"));
    }

    #[test]
    fn home_uses_dict_subdirectory() {
        let path = resolve_db_path(None, vars(&[("WNHOME", "/usr/wn")]));
        assert_eq!(path, PathBuf::from("/usr/wn/dict/lexicon.json"));
    }

    #[test]
    fn blank_values_fall_through() {
        let path = resolve_db_path(None, vars(&[("WNSEARCHDIR", "  "), ("WNHOME", "")]));
        assert_eq!(path, PathBuf::from("dict/lexicon.json"));
    }

    #[test]
    fn capacity_defaults_to_search_buffer() {
        let config = Config::from_env(Some(PathBuf::from("a.json")), None);
        assert_eq!(config.capacity, 200 * 1024);
        assert_eq!(Config::from_env(None, Some(64)).capacity, 64);
    }
}
