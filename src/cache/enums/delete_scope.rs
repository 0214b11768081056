#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    /// Only the path itself, which must be a file.
    File,
    /// Everything below the path; the root directory itself is kept.
    Tree,
}
