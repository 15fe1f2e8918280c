//! Error types for the Web Storage backend

use kvsync_core::storage::{StorageError, QUOTA_EXCEEDED_ERR};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for Web Storage operations
pub type Result<T> = std::result::Result<T, WebStorageError>;

/// Errors that can occur during Web Storage operations
#[derive(Debug, Error)]
pub enum WebStorageError {
    /// The storage area is missing or access to it was denied
    #[error("Web Storage not available: {0}")]
    NotAvailable(String),

    /// The browser refused a write for lack of space
    #[error("Web Storage quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other exception raised by the Storage API
    #[error("Web Storage request error: {0}")]
    Request(String),
}

/// Whether a `DOMException` signals a full storage area.
///
/// Browsers disagree on the name; Firefox historically used its own.
pub fn is_quota_exception(name: &str, code: u16) -> bool {
    code == QUOTA_EXCEEDED_ERR
        || name == "QuotaExceededError"
        || name == "NS_ERROR_DOM_QUOTA_REACHED"
}

impl From<JsValue> for WebStorageError {
    fn from(val: JsValue) -> Self {
        if let Some(exception) = val.dyn_ref::<web_sys::DomException>() {
            let name = exception.name();
            let msg = format!("{}: {}", name, exception.message());
            if is_quota_exception(&name, exception.code()) {
                return WebStorageError::QuotaExceeded(msg);
            }
            return WebStorageError::Request(msg);
        }

        let msg = js_sys::JSON::stringify(&val)
            .map(String::from)
            .unwrap_or_else(|_| format!("{:?}", val));
        WebStorageError::Request(msg)
    }
}

/// Convert WebStorageError to StorageError for the storage trait
impl From<WebStorageError> for StorageError {
    fn from(err: WebStorageError) -> Self {
        match err {
            WebStorageError::NotAvailable(msg) => StorageError::Unsupported(msg),
            WebStorageError::QuotaExceeded(msg) => StorageError::QuotaExceeded(msg),
            WebStorageError::Request(msg) => StorageError::Backend(format!("Web Storage: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exception_variants() {
        assert!(is_quota_exception("QuotaExceededError", 0));
        assert!(is_quota_exception("NS_ERROR_DOM_QUOTA_REACHED", 1014));
        assert!(is_quota_exception("", 22));
        assert!(!is_quota_exception("SecurityError", 18));
    }

    #[test]
    fn test_into_storage_error() {
        let err: StorageError = WebStorageError::QuotaExceeded("full".into()).into();
        assert!(err.is_quota_exceeded());

        let err: StorageError = WebStorageError::NotAvailable("denied".into()).into();
        assert!(matches!(err, StorageError::Unsupported(_)));
    }
}
