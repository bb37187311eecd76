/// Causal event that may start a counting cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Initial page load.
    PageLoad { path: String },
    /// In-page navigation to a new path.
    PathChange { path: String },
}

impl Trigger {
    /// The page path this trigger was fired for.
    pub fn path(&self) -> &str {
        match self {
            Trigger::PageLoad { path } | Trigger::PathChange { path } => path,
        }
    }
}

/// State-transition inputs processed by [`reduce`](crate::counter::reduce).
///
/// The component translates each trigger and call outcome into one of these;
/// no other code mutates the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Trigger fired for a page outside the allow-list.
    Skip,
    /// The counting call went out.
    Start,
    /// The call resolved with a usable count.
    Succeed { count: u64 },
    /// The call failed (transport, service, or protocol).
    Fail,
    /// Teardown; the next mount starts over.
    Reset,
}
