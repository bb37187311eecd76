use crate::counter::intent::CounterIntent;
use crate::counter::state::CounterState;

/// Pure transition function for the counter state machine.
///
/// `Succeed` and `Fail` only mean something while a call is in flight; in any
/// other state they leave the state untouched. The component additionally
/// enforces last-trigger-wins with sequence numbers before applying them.
pub fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
    match (state, intent) {
        (_, CounterIntent::Skip) => CounterState::Idle,
        (_, CounterIntent::Start) => CounterState::Loading,
        (_, CounterIntent::Reset) => CounterState::Idle,
        (CounterState::Loading, CounterIntent::Succeed { count }) => {
            CounterState::Success { count }
        }
        (CounterState::Loading, CounterIntent::Fail) => CounterState::Error,
        (state, _) => state,
    }
}
