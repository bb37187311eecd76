pub mod component;
pub mod intent;
pub mod reducer;
pub mod state;

pub use component::VisitorCounter;
pub use intent::{CounterIntent, Trigger};
pub use reducer::reduce;
pub use state::CounterState;
