use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::header::Header,
    pages::{self, ListPage},
    resources::{
        attributes::SpideringAttributes, events::SpideringEvents,
        parameters::IndividualParameters,
    },
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/config/individual-parameters")]
    IndividualParameters,

    #[at("/config/spidering-attributes")]
    SpideringAttributes,

    #[at("/config/spidering-events")]
    SpideringEvents,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::IndividualParameters} /> },
        Route::IndividualParameters => html! { <ListPage<IndividualParameters> /> },
        Route::SpideringAttributes => html! { <ListPage<SpideringAttributes> /> },
        Route::SpideringEvents => html! { <ListPage<SpideringEvents> /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
