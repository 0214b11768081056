/// Result of a cache read. A stored `null`, `false` or `0` is a `Hit`, never a `Miss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
}
