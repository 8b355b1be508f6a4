//! Browser observer trait.

/// Receives state-change notifications from a
/// [`PokemonBrowser`](crate::browser::PokemonBrowser).
///
/// Called on the browser's owning context after the state change has been
/// applied, while the browser is still mutably borrowed. Implementations must
/// not call back into the browser; read its state once the triggering
/// `handle_message` (or `process_*`) call has returned.
/// Every method defaults to a no-op.
pub trait BrowserObserver: Send + Sync {
    /// A `load_initial` succeeded.
    fn on_list_loaded(&self) {}

    /// A `load_more` succeeded.
    fn on_more_loaded(&self) {}

    /// Search mode changed the visible list (remote hit, local fallback or cleared query).
    fn on_list_updated(&self) {}

    /// A page fetch failed. `message` is human readable.
    fn on_load_failed(&self, _message: &str) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BrowserObserver for NoopObserver {}
