use crate::controllers::interactive::events::render::RenderEvent;

/// Receives completed frames and render failures from the worker thread.
pub trait PresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
