use std::collections::BTreeMap;

/// Directive name (lowercased) to optional argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub(crate) directives: BTreeMap<String, Option<String>>,
}
