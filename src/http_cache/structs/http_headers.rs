use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header names are stored lowercased; repeated headers are folded into one comma-separated value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct HttpHeaders {
    pub(crate) entries: BTreeMap<String, String>,
}
