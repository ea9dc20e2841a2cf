use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::PresenterPort;
use crate::core::data::point::Point;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

const OVERLAY_RED: [u8; 3] = [255, 0, 0];

/// Presents rendered frames into a `pixels` framebuffer.
///
/// Keeps the most recently accepted frame so the canvas can be repainted
/// (for example to move the drag overlay) without waiting for the worker.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    last_frame_rgb: Option<Vec<u8>>,
    last_presented_generation: u64,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            last_frame_rgb: None,
            last_presented_generation: 0,
            last_render_duration: None,
            last_error_message: None,
        }
    }

    pub fn share_adapter(&self) -> Arc<dyn PresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn PresenterPort>
    }

    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    /// Drains the adapter mailbox, accepting frames that are newer than the
    /// one on screen and still match the current canvas size.
    pub fn pump_events(&mut self) {
        if let Some(event) = self.adapter.render_event() {
            match event {
                RenderEvent::Frame(frame) => {
                    if frame.generation > self.last_presented_generation
                        && frame.pixel_buffer.size().width() == self.width
                        && frame.pixel_buffer.size().height() == self.height
                    {
                        self.accept_frame(&frame);
                    }
                }
                RenderEvent::Error(error) => {
                    if error.generation >= self.last_presented_generation {
                        self.last_error_message = Some(error.message);
                    }
                }
            }
        }
    }

    pub fn render(&mut self, drag_overlay: Option<(Point, Point)>) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        match self.last_frame_rgb.take() {
            Some(rgb) => {
                self.blit_rgb(&rgb);
                self.last_frame_rgb = Some(rgb);
            }
            None => self.draw_placeholder(),
        }

        if let Some((start, current)) = drag_overlay {
            self.draw_overlay_outline(start, current);
        }

        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");

        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");

        // Stale frame no longer matches the canvas
        self.last_frame_rgb = None;
    }

    fn accept_frame(&mut self, frame: &FrameData) {
        self.last_frame_rgb = Some(frame.pixel_buffer.bytes().to_vec());
        self.last_presented_generation = frame.generation;
        self.last_render_duration = Some(frame.render_duration);
        self.last_error_message = None;
    }

    fn blit_rgb(&mut self, rgb: &[u8]) {
        let dest = self.pixels.frame_mut();

        for (src_pixel, dst_pixel) in rgb.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }

    fn draw_placeholder(&mut self) {
        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 255;
        }
    }

    fn draw_overlay_outline(&mut self, start: Point, current: Point) {
        let clamp_x = |x: i32| x.clamp(0, self.width as i32 - 1) as u32;
        let clamp_y = |y: i32| y.clamp(0, self.height as i32 - 1) as u32;

        let left = clamp_x(start.x.min(current.x));
        let right = clamp_x(start.x.max(current.x));
        let top = clamp_y(start.y.min(current.y));
        let bottom = clamp_y(start.y.max(current.y));

        for x in left..=right {
            self.put_overlay_pixel(x, top);
            self.put_overlay_pixel(x, bottom);
        }
        for y in top..=bottom {
            self.put_overlay_pixel(left, y);
            self.put_overlay_pixel(right, y);
        }
    }

    fn put_overlay_pixel(&mut self, x: u32, y: u32) {
        let offset = ((y * self.width + x) * 4) as usize;
        let frame = self.pixels.frame_mut();
        frame[offset] = OVERLAY_RED[0];
        frame[offset + 1] = OVERLAY_RED[1];
        frame[offset + 2] = OVERLAY_RED[2];
        frame[offset + 3] = 255;
    }
}
