#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryFilter {
    All,
    ExpiredOnly,
}
