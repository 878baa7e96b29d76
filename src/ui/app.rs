use crate::fetch::CountSource;
use crate::ui::counter::{CounterControl, CounterIntent, CounterReducer, CounterState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Store;
use ratatui::layout::Rect;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

pub struct App {
    should_quit: bool,
    area: Rect,
    focused: CounterControl,
    animation_tick: u8,
    fetch_amount: u32,
    /// Counter slice (MVI pattern).
    counter: Store<CounterReducer>,
    /// Collaborator for the fetch transition (resource, managed outside MVI).
    source: Arc<dyn CountSource>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        source: Arc<dyn CountSource>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
        fetch_amount: u32,
    ) -> Self {
        Self {
            should_quit: false,
            area: Rect::default(),
            focused: CounterControl::default(),
            animation_tick: 0,
            fetch_amount,
            counter: Store::default(),
            source,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn counter(&self) -> &CounterState {
        self.counter.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.counter.subscribe()
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn fetch_amount(&self) -> u32 {
        self.fetch_amount
    }

    pub fn focused(&self) -> CounterControl {
        self.focused
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    /// Advance the spinner. Returns true when a redraw is needed.
    pub fn on_tick(&mut self) -> bool {
        if self.counter().status.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            true
        } else {
            false
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Dispatch the store operation behind a control and focus it.
    pub fn activate(&mut self, control: CounterControl) {
        self.focused = control;
        match control {
            CounterControl::Increment => self.increment(),
            CounterControl::Decrement => self.decrement(),
            CounterControl::Fetch => self.fetch_amount_of(self.fetch_amount),
        }
    }

    pub fn increment(&mut self) {
        self.counter.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.counter.dispatch(CounterIntent::Decrement);
    }

    /// Start a fetch for `amount`.
    ///
    /// The store moves to loading before this returns. The network call
    /// runs on the async runtime and posts the resolved or rejected phase
    /// back through the event channel; it cannot be cancelled.
    pub fn fetch_amount_of(&mut self, amount: u32) {
        self.counter.dispatch(CounterIntent::FetchStarted);
        self.animation_tick = 0;

        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tracing::info!(amount, source = source.name(), "Fetch dispatched");

        self.runtime.spawn(async move {
            let intent = match source.fetch_delta(amount).await {
                Ok(delta) => {
                    tracing::info!(amount, delta, "Fetch resolved");
                    CounterIntent::FetchResolved { delta }
                }
                Err(err) => {
                    tracing::warn!(amount, error = %err, "Fetch rejected");
                    CounterIntent::FetchRejected
                }
            };
            if events.send(AppEvent::Counter(intent)).is_err() {
                tracing::debug!("Event loop gone, dropping fetch outcome");
            }
        });
    }

    /// Apply an intent posted back by a settled fetch.
    pub fn on_counter_intent(&mut self, intent: CounterIntent) {
        self.counter.dispatch(intent);
    }
}
