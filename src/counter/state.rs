/// View state of the visitor counter.
///
/// Exactly one variant is ever active. The state is rebuilt from `Idle` each
/// time the component mounts and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CounterState {
    /// Not yet triggered, or the current page is outside the allow-list.
    #[default]
    Idle,
    /// The counting call is in flight.
    Loading,
    /// The service answered; `count` is the most recently received value.
    Success { count: u64 },
    /// The call failed. Presentation falls back to the generic label.
    Error,
}

impl CounterState {
    /// The received count, when there is one.
    pub fn count(&self) -> Option<u64> {
        match self {
            CounterState::Success { count } => Some(*count),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CounterState::Loading)
    }
}
