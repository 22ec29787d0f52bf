/// Control actions a simulation observer may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current frame.
    StopEarly,
}
