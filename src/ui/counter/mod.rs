//! Counter feature module.
//!
//! A single store slice holding an integer and the status of the most
//! recent fetch, the reducer that folds counter intents into it, and the
//! view that renders it with its three controls.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterState, CounterStatus};
pub use view::{control_at, render_counter, view_layout, CounterControl, ViewLayout};
