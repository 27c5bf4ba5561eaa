use lodge_club::Club;

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub club: Arc<Club>,
}
