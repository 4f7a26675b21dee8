//! Flat-file dictionary lookups: common given names and sensitive words.
//!
//! Both are plain line-oriented files loaded once into in-memory maps.
//! Expected layout under a base directory:
//!
//!   {base}/list/CommonChineseNames.txt   — one name per line
//!   {base}/list/SensitiveWords.txt       — lines of `key:alt1;alt2;...`

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ListError;

fn read_list_file(base: &Path, file: &str) -> Result<String, ListError> {
    let path = base.join("list").join(file);
    fs::read_to_string(&path).map_err(|source| ListError::Load { path, source })
}

// ── Common names ─────────────────────────────────────────────────────────

/// Membership set of common Chinese given names.
#[derive(Debug, Default)]
pub struct CommonNames {
    names: HashSet<String>,
}

impl CommonNames {
    /// Load `{base}/list/CommonChineseNames.txt`.
    pub fn load(base: &Path) -> Result<Self, ListError> {
        let content = read_list_file(base, "CommonChineseNames.txt")?;

        let mut names = HashSet::new();
        for line in content.lines() {
            let name = line.trim();
            if !name.is_empty() {
                names.insert(name.to_string());
            }
        }

        debug!(total = names.len(), "loaded common names list");
        Ok(Self { names })
    }

    /// Membership count for a name: 1 if listed, 0 otherwise.
    pub fn query(&self, name: &str) -> u32 {
        self.names.contains(name) as u32
    }

    /// Number of loaded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ── Sensitive words ──────────────────────────────────────────────────────

/// Sensitive words keyed by pinyin, each with its listed alternates.
#[derive(Debug, Default)]
pub struct SensitiveWords {
    words: HashMap<String, Vec<String>>,
}

impl SensitiveWords {
    /// Load `{base}/list/SensitiveWords.txt`.
    ///
    /// Lines without exactly one `:` separator are silently skipped.
    pub fn load(base: &Path) -> Result<Self, ListError> {
        let content = read_list_file(base, "SensitiveWords.txt")?;

        let mut words = HashMap::new();
        for line in content.lines() {
            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() != 2 {
                continue;
            }
            let alternates = parts[1].split(';').map(str::to_string).collect();
            words.insert(parts[0].to_string(), alternates);
        }

        debug!(total = words.len(), "loaded sensitive words list");
        Ok(Self { words })
    }

    /// Alternates recorded for a pinyin key; empty if the key is absent.
    pub fn query(&self, pinyin: &str) -> &[String] {
        self.words.get(pinyin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of loaded keys.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Create a throwaway `{base}/list/` directory holding one file.
    fn temp_base(test: &str, file: &str, content: &str) -> PathBuf {
        let base = std::env::temp_dir()
            .join("lunar_convert_tests")
            .join(format!("{}_{}", test, std::process::id()));
        fs::create_dir_all(base.join("list")).unwrap();
        fs::write(base.join("list").join(file), content).unwrap();
        base
    }

    #[test]
    fn common_names_membership() {
        let base = temp_base(
            "common_names",
            "CommonChineseNames.txt",
            "伟\n芳\n 娜 \n\n军\n",
        );
        let names = CommonNames::load(&base).unwrap();
        assert_eq!(4, names.len());
        assert_eq!(1, names.query("伟"));
        assert_eq!(1, names.query("娜")); // whitespace trimmed
        assert_eq!(0, names.query("不存在"));
    }

    #[test]
    fn sensitive_words_alternates() {
        let base = temp_base(
            "sensitive_words",
            "SensitiveWords.txt",
            "dupi:杜撰;肚皮\nbroken line\na:b:c\nshazi:沙子\n",
        );
        let words = SensitiveWords::load(&base).unwrap();
        // "broken line" has no separator and "a:b:c" has two; both skipped.
        assert_eq!(2, words.len());
        assert_eq!(vec!["杜撰".to_string(), "肚皮".to_string()], words.query("dupi"));
        assert_eq!(vec!["沙子".to_string()], words.query("shazi"));
        assert!(words.query("missing").is_empty());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let base = PathBuf::from("/nonexistent/base/dir");
        assert!(matches!(
            CommonNames::load(&base),
            Err(ListError::Load { .. })
        ));
        assert!(matches!(
            SensitiveWords::load(&base),
            Err(ListError::Load { .. })
        ));
    }
}
