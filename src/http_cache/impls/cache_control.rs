use crate::http_cache::structs::cache_control::CacheControl;

impl CacheControl {
    /// Parses `no-cache, max-age=60, private="x"`. Names are lowercased, quotes stripped.
    pub fn parse(header: &str) -> CacheControl {
        let mut control = CacheControl::default();
        for directive in header.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }
            let (name, value) = match directive.split_once('=') {
                Some((name, value)) => (name.trim(), Some(value.trim().trim_matches('"').to_string())),
                None => (directive, None),
            };
            control.directives.insert(name.to_ascii_lowercase(), value);
        }
        control
    }

    /// Inverse of [`CacheControl::parse`], directives in name order.
    pub fn create(&self) -> String {
        self.directives
            .iter()
            .map(|(name, value)| match value {
                Some(value) => format!("{}={}", name, value),
                None => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn set(&mut self, name: &str, value: Option<&str>) {
        self.directives.insert(name.to_ascii_lowercase(), value.map(str::to_string));
    }

    pub fn has(&self, name: &str) -> bool {
        self.directives.contains_key(&name.to_ascii_lowercase())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.directives.get(&name.to_ascii_lowercase())?.as_deref()
    }

    /// Numeric argument of a delta-seconds directive; `None` when absent or not a number.
    pub fn seconds(&self, name: &str) -> Option<i64> {
        self.value(name)?.parse::<i64>().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
