use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config::MOCK_SERVER_MODE, i18n::current::header as t, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    let nav_link = |target: Route, label: &'static str| {
        let active = route.as_ref() == Some(&target);
        html! {
            <Link<Route>
                to={target}
                classes={classes!(
                    "px-3",
                    "py-2",
                    "rounded-lg",
                    "text-sm",
                    "font-medium",
                    if active { "bg-[var(--primary)] text-white" } else { "hover:text-[var(--primary)]" }
                )}
            >
                { label }
            </Link<Route>>
        }
    };

    html! {
        <header class="border-b border-[var(--border)] bg-[var(--surface)]">
            <div class="mx-auto flex max-w-7xl items-center gap-6 px-6 py-3">
                <Link<Route> to={Route::Home} classes="text-lg font-semibold">
                    { t::BRAND_NAME }
                </Link<Route>>
                <nav class="flex items-center gap-2" aria-label={t::NAV_MAIN_ARIA}>
                    { nav_link(Route::IndividualParameters, t::NAV_PARAMETERS) }
                    { nav_link(Route::SpideringAttributes, t::NAV_ATTRIBUTES) }
                    { nav_link(Route::SpideringEvents, t::NAV_EVENTS) }
                </nav>
                if MOCK_SERVER_MODE {
                    <span class="ml-auto rounded-full border px-2 py-0.5 text-xs uppercase">
                        { t::MOCK_BADGE }
                    </span>
                }
            </div>
        </header>
    }
}
