use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::constants::{BUDGET_PRESET_DETAIL, BUDGET_PRESET_FAST, BUDGET_PRESET_QUALITY};
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::navigation::command::NavigationCommand;
use crate::core::navigation::view_state::ViewState;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoopBuilder,
    keyboard::Key,
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelbrot Viewer";

struct GuiApp {
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    view_state: ViewState,
    cursor: Point,
    left_pressed: bool,
    dragging: bool,
    press_position: Point,
}

impl GuiApp {
    fn new(window: &'static Window, presenter: PixelsPresenter) -> Self {
        let size = window.inner_size();
        let controller = InteractiveController::new(presenter.share_adapter());

        Self {
            width: size.width,
            height: size.height,
            presenter,
            controller,
            view_state: ViewState::new(),
            cursor: Point { x: 0, y: 0 },
            left_pressed: false,
            dragging: false,
            press_position: Point { x: 0, y: 0 },
        }
    }

    fn raster_size(&self) -> Option<RasterSize> {
        RasterSize::new(self.width, self.height).ok()
    }

    /// Applies a navigation command and submits a render request if the
    /// resulting view differs from the one on screen.
    fn dispatch(&mut self, command: NavigationCommand) {
        let Some(size) = self.raster_size() else {
            return;
        };

        if self.view_state.apply(command, size) {
            self.submit_render_request();
        }
    }

    fn submit_render_request(&mut self) {
        let Some(size) = self.raster_size() else {
            return;
        };

        let request = RenderRequest {
            viewport: self.view_state.viewport(),
            size,
            budget: self.view_state.budget(),
        };
        self.controller.submit_request(request);
    }

    fn handle_cursor_moved(&mut self, position: Point) {
        self.cursor = position;

        if self.left_pressed && !self.dragging {
            self.dragging = true;
            self.dispatch(NavigationCommand::BeginDrag(self.press_position));
        }
        if self.dragging {
            self.dispatch(NavigationCommand::UpdateDrag(self.cursor));
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.left_pressed = true;
                self.press_position = self.cursor;
            }
            (MouseButton::Left, ElementState::Released) => {
                self.left_pressed = false;
                if self.dragging {
                    self.dragging = false;
                    self.dispatch(NavigationCommand::EndDrag(self.cursor));
                } else {
                    self.dispatch(NavigationCommand::ZoomIn(self.press_position));
                }
            }
            (MouseButton::Right, ElementState::Pressed) => {
                self.dispatch(NavigationCommand::ZoomOut(self.cursor));
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: Key<&str>) {
        match key {
            Key::Character("1") => self.dispatch(NavigationCommand::SetBudget(BUDGET_PRESET_FAST)),
            Key::Character("2") => {
                self.dispatch(NavigationCommand::SetBudget(BUDGET_PRESET_QUALITY));
            }
            Key::Character("3") => {
                self.dispatch(NavigationCommand::SetBudget(BUDGET_PRESET_DETAIL));
            }
            Key::Character("r" | "R") => self.dispatch(NavigationCommand::Reset),
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.submit_render_request();
    }

    fn update_title(&self, window: &Window) {
        if let Some(message) = self.presenter.last_error_message() {
            window.set_title(&format!("{WINDOW_TITLE} — {message}"));
        } else if let Some(duration) = self.presenter.last_render_duration() {
            window.set_title(&format!(
                "{WINDOW_TITLE} — budget {} — {} ms",
                self.view_state.budget(),
                duration.as_millis()
            ));
        }
    }

    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        self.presenter.pump_events();
        self.update_title(window);

        let overlay = self
            .view_state
            .drag()
            .map(|selection| (selection.start, selection.current));

        self.presenter.render(overlay)
    }
}

pub fn run_gui() {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    let event_loop_proxy = event_loop.create_proxy();

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let presenter = PixelsPresenter::new(window, event_loop_proxy);
    let mut app = GuiApp::new(window, presenter);
    app.submit_render_request();

    let mut redraw_pending = true;

    event_loop
        .run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    app.controller.shutdown();
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    if let Err(e) = app.redraw(window) {
                        eprintln!("Render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    app.resize(size.width, size.height);
                    redraw_pending = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.handle_cursor_moved(Point {
                        x: position.x as i32,
                        y: position.y as i32,
                    });
                    redraw_pending = true;
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    app.handle_mouse_input(*state, *button);
                    redraw_pending = true;
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed {
                        app.handle_key(key_event.logical_key.as_ref());
                        redraw_pending = true;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .expect("Event loop error");
}
