/// Custom user events for the GUI event loop.
///
/// These let the background render worker wake the main UI thread when a
/// new frame or error is waiting in the presenter mailbox.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that a new render event may be available from the presenter.
    ///
    /// Note: receiving this does NOT automatically trigger a redraw. The
    /// handler must call `window.request_redraw()` after pumping the
    /// presenter mailbox.
    Wake,
}
