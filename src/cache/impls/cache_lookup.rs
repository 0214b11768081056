use crate::cache::enums::cache_lookup::CacheLookup;

impl<T> CacheLookup<T> {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, CacheLookup::Miss)
    }

    pub fn hit(self) -> Option<T> {
        match self {
            CacheLookup::Hit(value) => Some(value),
            CacheLookup::Miss => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.hit().unwrap_or(default)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> CacheLookup<U> {
        match self {
            CacheLookup::Hit(value) => CacheLookup::Hit(f(value)),
            CacheLookup::Miss => CacheLookup::Miss,
        }
    }
}

impl<T> From<Option<T>> for CacheLookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => CacheLookup::Hit(value),
            None => CacheLookup::Miss,
        }
    }
}
