use web_sys::{AbortController, AbortSignal};

/// Owns an `AbortController` for the requests a view effect starts.
///
/// Dropping the scope aborts whatever is still in flight, so effect teardown
/// (unmount or a dependency change) turns stale responses into
/// [`ApiError::Aborted`](crate::error::ApiError::Aborted).
pub struct RequestScope {
    controller: Option<AbortController>,
}

impl RequestScope {
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                tracing::warn!(?err, "AbortController unavailable, requests cannot be cancelled");
                None
            }
        };
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}
