use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::PresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::{RenderFrameCancelableError, render_frame_cancelable};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn PresenterPort>,
}

/// Runs the render pipeline on a dedicated worker thread, latest-wins.
///
/// Each submission bumps a generation counter; the counter doubles as the
/// cancel signal for whatever the worker is currently rendering. Superseded
/// renders are cancelled and their results discarded, so at most one
/// `(viewport, budget)` pair is ever presented per sequence point and stale
/// frames never reach the presenter.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn PresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a request, replacing any not-yet-started one, and cancels the
    /// in-flight render. Returns the submission's generation id.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            // The job is stale as soon as a newer generation is submitted
            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(pixel_buffer) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderOutcome::Cancelled) => {
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderOutcome> {
        render_frame_cancelable(&request.viewport, request.size, request.budget, cancel).map_err(
            |e| match e {
                RenderFrameCancelableError::Cancelled(_) => RenderOutcome::Cancelled,
                RenderFrameCancelableError::Failed(err) => RenderOutcome::Error(err.to_string()),
            },
        )
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::default_viewport;
    use crate::core::data::raster_size::RasterSize;
    use std::thread;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl PresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn small_request() -> RenderRequest {
        RenderRequest {
            viewport: default_viewport(),
            size: RasterSize::new(4, 4).unwrap(),
            budget: 10,
        }
    }

    fn failing_request() -> RenderRequest {
        // budget 0 is rejected by the pipeline, producing an error event
        RenderRequest {
            viewport: default_viewport(),
            size: RasterSize::new(4, 4).unwrap(),
            budget: 0,
        }
    }

    fn extract_generation(events: &[RenderEvent]) -> u64 {
        events
            .iter()
            .find_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(err) => Some(err.generation),
            })
            .expect("should have at least one event with a generation")
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        let request = small_request();
        let generation = controller.submit_request(request);
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert_eq!(frame.pixel_buffer.size(), request.size);
                    assert_eq!(frame.pixel_buffer.bytes().len(), 4 * 4 * 3);
                    saw_frame = true;
                }
                RenderEvent::Error(error) => {
                    panic!("unexpected render error: {}", error.message);
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        controller.submit_request(small_request());
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");
        let gen_a = extract_generation(&events_a);

        controller.submit_request(small_request());
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");
        let gen_b = extract_generation(&events_b);

        assert!(
            gen_b > gen_a,
            "generation B ({}) should be greater than A ({})",
            gen_b,
            gen_a
        );

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        let submitted = controller.submit_request(small_request());
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        assert_eq!(extract_generation(&events), submitted);
        assert_eq!(controller.last_completed_generation(), submitted);

        controller.shutdown();
    }

    #[test]
    fn test_failing_request_emits_error_event() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        let submitted = controller.submit_request(failing_request());
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected an error event");

        let mut saw_error = false;
        for event in &events {
            if let RenderEvent::Error(error) = event {
                saw_error = true;
                assert_eq!(error.generation, submitted);
            }
        }

        assert!(saw_error, "expected at least one error event");
        assert_eq!(controller.last_completed_generation(), submitted);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_requests_do_not_emit_cancellation_errors() {
        // Superseded renders are cancelled silently; only frames may appear
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller =
            InteractiveController::new(Arc::clone(&presenter_port) as Arc<dyn PresenterPort>);

        let mut last_gen = 0;
        for _ in 0..5 {
            last_gen = controller.submit_request(small_request());
        }

        thread::sleep(Duration::from_millis(500));
        let events = presenter_port.take_events();

        for event in &events {
            if let RenderEvent::Error(err) = event {
                panic!("cancellation should not emit errors: {}", err.message);
            }
        }

        let max_emitted_gen = events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(_) => None,
            })
            .max()
            .unwrap_or(0);

        assert!(max_emitted_gen > 0, "expected at least one frame");
        assert!(
            max_emitted_gen <= last_gen,
            "emitted generation {} should be <= last submitted {}",
            max_emitted_gen,
            last_gen
        );

        controller.shutdown();
    }

    #[test]
    fn test_stale_generation_filter() {
        // The filtering discipline the presenter applies to incoming frames
        struct PresenterState {
            last_presented_generation: u64,
        }

        impl PresenterState {
            fn present(&mut self, generation: u64) -> bool {
                if generation > self.last_presented_generation {
                    self.last_presented_generation = generation;
                    true
                } else {
                    false
                }
            }
        }

        let mut state = PresenterState {
            last_presented_generation: 0,
        };

        assert!(state.present(3), "first frame should be presented");
        assert!(!state.present(1), "late frame 1 should be rejected");
        assert!(!state.present(2), "late frame 2 should be rejected");
        assert!(state.present(5), "newer frame should be presented");
        assert!(!state.present(4), "late frame 4 should be rejected");
        assert_eq!(state.last_presented_generation, 5);
    }
}
