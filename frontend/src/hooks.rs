use yew::prelude::*;

use crate::session_context::Session;

/// Session facts from the nearest [`crate::session_context::SessionProvider`].
///
/// Outside a provider the session is read-only and dated today, so a
/// misplaced component can never offer mutations.
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| Session {
        has_update_access: false,
        today: crate::utils::today(),
    })
}
