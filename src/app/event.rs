use crate::api::{ApiCall, ApiError};
use crossterm::event::Event as CrosstermEvent;
use serde_json::Value;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A request finished; `call` is echoed back so the result reaches the right screen.
    ApiResponse {
        call: ApiCall,
        result: Result<Value, ApiError>,
    },

    /// Tick for notice expiry and the loading spinner
    Tick,
}
