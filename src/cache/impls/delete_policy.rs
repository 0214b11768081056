use crate::cache::enums::delete_scope::DeleteScope;
use crate::cache::enums::error_policy::ErrorPolicy;
use crate::cache::enums::expiry_filter::ExpiryFilter;
use crate::cache::structs::delete_policy::DeletePolicy;

impl DeletePolicy {
    /// `clear`: everything under the cache root, stop on the first failure.
    pub fn purge() -> DeletePolicy {
        DeletePolicy {
            scope: DeleteScope::Tree,
            expiry: ExpiryFilter::All,
            on_error: ErrorPolicy::Abort,
        }
    }

    /// `garbage_collect`: expired files only, keep going past failures.
    pub fn sweep_expired() -> DeletePolicy {
        DeletePolicy {
            scope: DeleteScope::Tree,
            expiry: ExpiryFilter::ExpiredOnly,
            on_error: ErrorPolicy::Continue,
        }
    }

    pub fn single_file() -> DeletePolicy {
        DeletePolicy {
            scope: DeleteScope::File,
            expiry: ExpiryFilter::All,
            on_error: ErrorPolicy::Abort,
        }
    }
}
