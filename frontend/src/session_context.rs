use chrono::NaiveDate;
use yew::prelude::*;

use crate::{access, utils};

/// Facts about the current user and day, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub has_update_access: bool,
    pub today: NaiveDate,
}

impl Session {
    fn detect() -> Self {
        let session = Self {
            has_update_access: access::has_update_access(),
            today: utils::today(),
        };
        if !session.has_update_access {
            web_sys::console::log_1(&"Read-only session: update access not granted".into());
        }
        session
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(Session::detect);
    html! {
        <ContextProvider<Session> context={*session}>
            {props.children.clone()}
        </ContextProvider<Session>>
    }
}
