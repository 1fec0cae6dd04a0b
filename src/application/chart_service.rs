use crate::domain::{
    chart::{reduce, ChartScreen, ScreenEvent},
    logging::{get_logger, LogComponent},
    market_data::{BarRepository, BarSeries, Timeframe},
};
use futures::future::{AbortHandle, Abortable};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type Listener = std::rc::Rc<dyn Fn(&ChartScreen)>;

/// Application service driving the chart screen.
///
/// Owns the screen state, feeds every mutation through the pure reducer,
/// and republishes the result to subscribed listeners. Fetches are
/// cancel-on-supersede: selecting a timeframe aborts the previous
/// in-flight request, and a fetch generation guards the window between
/// abort and completion so a stale payload can never overwrite a newer
/// state.
pub struct ChartScreenService<R> {
    repository: R,
    state: Arc<Mutex<ChartScreen>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    fetch_generation: Arc<AtomicU64>,
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl<R: BarRepository> ChartScreenService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: Arc::new(Mutex::new(ChartScreen::Initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            fetch_generation: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> ChartScreen {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Register a redraw callback; it fires on every state change.
    pub fn subscribe(&self, listener: impl Fn(&ChartScreen) + 'static) {
        self.listeners.lock().expect("listener lock poisoned").push(std::rc::Rc::new(listener));
    }

    fn dispatch(&self, event: ScreenEvent) {
        let next = {
            let mut state = self.state.lock().expect("state lock poisoned");
            let next = reduce(&state, event);
            *state = next.clone();
            next
        };
        // snapshot before invoking: a listener may dispatch again
        let snapshot: Vec<Listener> =
            self.listeners.lock().expect("listener lock poisoned").clone();
        for listener in snapshot {
            listener(&next);
        }
    }

    /// Fetch a fresh batch for `timeframe`, superseding any running fetch.
    pub async fn select_timeframe(&self, timeframe: Timeframe) {
        if let Some(previous) = self.in_flight.lock().expect("fetch lock poisoned").take() {
            previous.abort();
        }
        let generation = self.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;

        get_logger().info(
            LogComponent::Application("ChartScreen"),
            &format!("Loading bars for timeframe {}", timeframe),
        );
        self.dispatch(ScreenEvent::LoadStarted(timeframe));

        let (handle, registration) = AbortHandle::new_pair();
        *self.in_flight.lock().expect("fetch lock poisoned") = Some(handle);

        let result = Abortable::new(self.repository.load_bars(timeframe), registration).await;

        if self.fetch_generation.load(Ordering::SeqCst) != generation {
            get_logger().info(
                LogComponent::Application("ChartScreen"),
                &format!("Discarding superseded fetch for timeframe {}", timeframe),
            );
            return;
        }
        self.in_flight.lock().expect("fetch lock poisoned").take();

        match result {
            Err(_aborted) => {}
            Ok(Ok(bars)) => {
                let series = BarSeries::new(bars);
                if !series.is_newest_first() {
                    get_logger().warn(
                        LogComponent::Application("ChartScreen"),
                        &format!(
                            "Bars for timeframe {} are not strictly newest-first",
                            timeframe
                        ),
                    );
                }
                get_logger().info(
                    LogComponent::Application("ChartScreen"),
                    &format!("Loaded {} bars for timeframe {}", series.len(), timeframe),
                );
                self.dispatch(ScreenEvent::BarsLoaded { timeframe, bars: series });
            }
            Ok(Err(error)) => {
                get_logger().error(
                    LogComponent::Application("ChartScreen"),
                    &format!("Fetch for timeframe {} failed: {}", timeframe, error),
                );
                self.dispatch(ScreenEvent::LoadFailed { timeframe, reason: error.to_string() });
            }
        }
    }

    /// Re-dispatch the failed timeframe's fetch.
    pub async fn retry(&self) {
        let failed = match self.state() {
            ChartScreen::Failed { timeframe, .. } => Some(timeframe),
            _ => None,
        };
        if let Some(timeframe) = failed {
            self.select_timeframe(timeframe).await;
        }
    }

    /// One gesture frame: multiplicative zoom factor + pixel pan delta.
    pub fn on_gesture(&self, zoom_factor: f32, pan_dx: f32) {
        self.dispatch(ScreenEvent::Gesture { zoom: zoom_factor, pan_dx });
    }

    /// Host layout pass reported a new surface width.
    pub fn on_surface_resized(&self, surface_width: f32) {
        self.dispatch(ScreenEvent::SurfaceResized(surface_width));
    }
}
