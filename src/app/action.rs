use crate::api::ApiCall;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug)]
pub enum Action {
    /// Run one HTTP round-trip on a background task.
    Request(ApiCall),
    Quit,
}
