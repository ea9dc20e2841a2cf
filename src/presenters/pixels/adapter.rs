use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::PresenterPort;
use crate::input::gui::events::GuiEvent;
use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

/// Mailbox between the render worker thread and the UI thread.
///
/// The worker deposits the latest event and wakes the event loop; the UI
/// thread drains it on the next redraw. Only the most recent event is kept,
/// older undelivered frames are superseded anyway.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn render_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().unwrap().take()
    }
}
