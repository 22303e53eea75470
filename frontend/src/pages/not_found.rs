use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found_page as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-3xl px-6 py-12 space-y-3">
            <h2 class="text-xl font-semibold">{ t::TITLE }</h2>
            <p>{ t::BODY }</p>
            <Link<Route> to={Route::IndividualParameters} classes="link-button">
                { crate::i18n::current::header::NAV_PARAMETERS }
            </Link<Route>>
        </main>
    }
}
