use crate::cache::enums::delete_scope::DeleteScope;
use crate::cache::enums::error_policy::ErrorPolicy;
use crate::cache::enums::expiry_filter::ExpiryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePolicy {
    pub scope: DeleteScope,
    pub expiry: ExpiryFilter,
    pub on_error: ErrorPolicy,
}
