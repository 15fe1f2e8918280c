//! Per-call sync options: legacy callbacks and the routing flag.

use crate::sync::SyncResponse;

type SuccessCallback<'a> = Box<dyn FnOnce(&SyncResponse) + 'a>;
type ErrorCallback<'a> = Box<dyn FnOnce(&str) + 'a>;
type CompleteCallback<'a> = Box<dyn FnOnce(Option<&SyncResponse>) + 'a>;

/// Options accepted by every [`crate::sync::SyncStrategy`].
///
/// Callbacks run synchronously, before the returned future is handed back:
/// `success` or `error` first, then `complete`.
#[derive(Default)]
pub struct SyncOptions<'a> {
    pub(crate) success: Option<SuccessCallback<'a>>,
    pub(crate) error: Option<ErrorCallback<'a>>,
    pub(crate) complete: Option<CompleteCallback<'a>>,
    pub(crate) use_default_transport: bool,
}

impl<'a> SyncOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the resolved value.
    pub fn on_success(mut self, f: impl FnOnce(&SyncResponse) + 'a) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    /// Called with the rejection message.
    pub fn on_error(mut self, f: impl FnOnce(&str) + 'a) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    /// Called after either outcome with the resolved value, if any.
    pub fn on_complete(mut self, f: impl FnOnce(Option<&SyncResponse>) + 'a) -> Self {
        self.complete = Some(Box::new(f));
        self
    }

    /// Bypass local storage and route the call to the default transport.
    pub fn use_default_transport(mut self) -> Self {
        self.use_default_transport = true;
        self
    }

    pub fn wants_default_transport(&self) -> bool {
        self.use_default_transport
    }
}

impl std::fmt::Debug for SyncOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncOptions")
            .field("success", &self.success.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .field("use_default_transport", &self.use_default_transport)
            .finish()
    }
}
