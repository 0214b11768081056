use crate::http_cache::structs::http_headers::HttpHeaders;
use std::collections::BTreeMap;

impl HttpHeaders {
    pub fn new() -> HttpHeaders {
        HttpHeaders::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Replaces any existing value.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Folds into an existing value as `old, new`.
    pub fn append(&mut self, name: &str, value: &str) {
        self.entries
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted by lowercased name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for HttpHeaders {
    fn from(entries: BTreeMap<String, String>) -> Self {
        let mut headers = HttpHeaders::new();
        for (name, value) in entries {
            headers.append(&name, &value);
        }
        headers
    }
}

impl From<HttpHeaders> for BTreeMap<String, String> {
    fn from(headers: HttpHeaders) -> Self {
        headers.entries
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HttpHeaders {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut headers = HttpHeaders::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}
