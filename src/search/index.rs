//! The static, pre-built index of searchable entries.
//!
//! The index arrives as a JSON object mapping entry names to arrays of
//! descriptor records, optionally wrapped in the JavaScript assignment the
//! documentation generator emits:
//!
//! ```text
//! var nitdocQuickSearchRawList = {"Array": [{"url": "array.html", "txt": "A collection"}]};
//! ```
//!
//! Key order in the source is the index's iteration order.

use crate::error::IndexError;
use ahash::AHashMap;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use serde_json::error::Category;
use std::{fmt, path::Path, sync::Arc};

/// One descriptor record as it appears in the index file.
///
/// Both fields are optional so that a malformed record loads instead of
/// failing the whole index; navigation guards against a missing url.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "txt")]
    pub text: Option<String>,
}

impl Descriptor {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            text: Some(text.into()),
        }
    }
}

/// A searchable entry: a name together with one descriptor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub url: Option<String>,
    pub text: Option<String>,
}

impl IndexEntry {
    /// The target link, if the record carries a usable one.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Immutable mapping from entry name to its descriptor records.
///
/// Entries are flattened in iteration order: all records of the first name,
/// then all records of the second name, and so on.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<Arc<IndexEntry>>,
    by_name: AHashMap<String, (usize, usize)>,
}

impl SearchIndex {
    /// Builds an index from `(name, records)` groups in order.
    ///
    /// A repeated name replaces the earlier records but keeps the position of
    /// its first occurrence. Empty names are skipped.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Descriptor>)>,
        S: Into<String>,
    {
        let mut ordered: Vec<(String, Vec<Descriptor>)> = Vec::new();
        let mut positions: AHashMap<String, usize> = AHashMap::new();

        for (name, records) in groups {
            let name = name.into();
            if name.is_empty() {
                tracing::warn!("Skipping index entry with an empty name");
                continue;
            }
            match positions.get(&name) {
                Some(&position) => {
                    tracing::debug!("Duplicate index key '{}', replacing its records", name);
                    ordered[position].1 = records;
                }
                None => {
                    positions.insert(name.clone(), ordered.len());
                    ordered.push((name, records));
                }
            }
        }

        let mut entries = Vec::new();
        let mut by_name = AHashMap::with_capacity(ordered.len());
        for (name, records) in ordered {
            let start = entries.len();
            for record in records {
                if record.url.is_none() || record.text.is_none() {
                    tracing::warn!("Index entry '{}' has an incomplete record: {:?}", name, record);
                }
                entries.push(Arc::new(IndexEntry {
                    name: name.clone(),
                    url: record.url,
                    text: record.text,
                }));
            }
            by_name.insert(name, (start, entries.len()));
        }

        Self { entries, by_name }
    }

    /// Parses a JSON index object.
    pub fn from_json(source: &str) -> Result<Self, IndexError> {
        let raw: RawIndex =
            serde_json::from_str(source).map_err(|err| classify_error(source, err))?;
        Ok(Self::from_groups(raw.0))
    }

    /// Parses either a bare JSON object or a `var name = {...};` script.
    pub fn from_script(source: &str) -> Result<Self, IndexError> {
        Self::from_json(strip_assignment(source))
    }

    /// Loads an index file from disk.
    pub async fn load(path: &Path) -> Result<Self, IndexError> {
        let start = std::time::Instant::now();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| IndexError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let index = Self::from_script(&source)?;
        tracing::info!(
            "Loaded search index from {}: {} names, {} entries in {:?}",
            path.display(),
            index.name_count(),
            index.len(),
            start.elapsed()
        );
        Ok(index)
    }

    /// All entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<IndexEntry>> {
        self.entries.iter()
    }

    /// Records filed under `name`, in order. Empty if the name is unknown.
    pub fn get(&self, name: &str) -> &[Arc<IndexEntry>] {
        match self.by_name.get(name) {
            Some(&(start, end)) => &self.entries[start..end],
            None => &[],
        }
    }

    /// Number of entries (one per descriptor record).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct names.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}

fn classify_error(source: &str, err: serde_json::Error) -> IndexError {
    match err.classify() {
        Category::Data if !source.trim_start().starts_with('{') => IndexError::NotAnObject,
        Category::Data => IndexError::Record(err),
        Category::Io | Category::Syntax | Category::Eof => IndexError::Syntax(err),
    }
}

/// Strips a leading `var ident =` (or `let`/`const`) and a trailing `;`.
fn strip_assignment(source: &str) -> &str {
    let trimmed = source.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }
    let body = ["var ", "let ", "const "]
        .iter()
        .find_map(|keyword| trimmed.strip_prefix(keyword))
        .and_then(|rest| rest.split_once('='))
        .map_or(trimmed, |(_, value)| value.trim());
    body.strip_suffix(';').unwrap_or(body).trim_end()
}

/// Ordered view of the index object, preserving key order and duplicates.
struct RawIndex(Vec<(String, Vec<Descriptor>)>);

impl<'de> Deserialize<'de> for RawIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawIndexVisitor;

        impl<'de> Visitor<'de> for RawIndexVisitor {
            type Value = RawIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from entry names to arrays of {url, txt} records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, records)) = map.next_entry::<String, Vec<Descriptor>>()? {
                    groups.push((name, records));
                }
                Ok(RawIndex(groups))
            }
        }

        deserializer.deserialize_map(RawIndexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    fn names(index: &SearchIndex) -> Vec<&str> {
        index.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn test_key_order_is_preserved() {
        let index = SearchIndex::from_json(
            r#"{"Zeta": [{"url": "z.html", "txt": "z"}],
                "Alpha": [{"url": "a.html", "txt": "a"}],
                "Mid": [{"url": "m.html", "txt": "m"}]}"#,
        )
        .unwrap();
        check!(names(&index) == ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_multiple_records_flatten_in_order() {
        let index = SearchIndex::from_json(
            r#"{"to_s": [{"url": "a.html#to_s", "txt": "A"}, {"url": "b.html#to_s", "txt": "B"}],
                "Array": [{"url": "array.html", "txt": "A collection"}]}"#,
        )
        .unwrap();
        check!(index.len() == 3);
        check!(index.name_count() == 2);
        check!(names(&index) == ["to_s", "to_s", "Array"]);
        let records = index.get("to_s");
        check!(records.len() == 2);
        check!(records[1].url.as_deref() == Some("b.html#to_s"));
        check!(index.get("Missing").is_empty());
    }

    #[rstest]
    #[case(r#"{"Array": [{"url": "array.html", "txt": "A collection"}]}"#)]
    #[case(r#"{"Array": [{"url": "array.html", "text": "A collection"}]}"#)]
    #[case(r#"var nitdocQuickSearchRawList = {"Array": [{"url": "array.html", "txt": "A collection"}]};"#)]
    #[case("const list = {\"Array\": [{\"url\": \"array.html\", \"txt\": \"A collection\"}]}\n")]
    fn test_accepted_formats(#[case] source: &str) {
        let index = SearchIndex::from_script(source).unwrap();
        let entry = &index.get("Array")[0];
        check!(entry.url.as_deref() == Some("array.html"));
        check!(entry.text.as_deref() == Some("A collection"));
    }

    #[test]
    fn test_duplicate_key_replaces_records_in_place() {
        let index = SearchIndex::from_json(
            r#"{"A": [{"url": "1.html", "txt": "one"}],
                "B": [{"url": "2.html", "txt": "two"}],
                "A": [{"url": "3.html", "txt": "three"}]}"#,
        )
        .unwrap();
        check!(names(&index) == ["A", "B"]);
        check!(index.get("A")[0].url.as_deref() == Some("3.html"));
    }

    #[test]
    fn test_malformed_records_load() {
        let index =
            SearchIndex::from_json(r#"{"NoUrl": [{"txt": "missing"}], "Blank": [{"url": "  "}]}"#)
                .unwrap();
        check!(index.len() == 2);
        check!(index.get("NoUrl")[0].target().is_none());
        check!(index.get("Blank")[0].target().is_none());
        check!(index.get("Blank")[0].text.is_none());
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let index = SearchIndex::from_json(r#"{"": [{"url": "x.html", "txt": "x"}], "Ok": []}"#)
            .unwrap();
        check!(index.is_empty());
        check!(index.name_count() == 1);
    }

    #[test]
    fn test_rejects_non_object() {
        let_assert!(Err(IndexError::NotAnObject) = SearchIndex::from_json("[1, 2, 3]"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let_assert!(Err(IndexError::Syntax(_)) = SearchIndex::from_script("var x = {;"));
    }

    #[test]
    fn test_rejects_bad_record_shape() {
        let_assert!(Err(IndexError::Record(_)) = SearchIndex::from_json(r#"{"A": "nope"}"#));
    }
}
