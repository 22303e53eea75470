use yew::prelude::*;

use crate::{i18n::current::filter_bar as t, utils::input_checked};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub show_active: bool,
    pub show_inactive: bool,
    /// `(show_active, show_inactive)` after a checkbox flipped.
    pub on_change: Callback<(bool, bool)>,
    pub on_refresh: Callback<()>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let has_selection = props.show_active || props.show_inactive;

    let on_active = {
        let on_change = props.on_change.clone();
        let show_inactive = props.show_inactive;
        Callback::from(move |event: Event| on_change.emit((input_checked(&event), show_inactive)))
    };
    let on_inactive = {
        let on_change = props.on_change.clone();
        let show_active = props.show_active;
        Callback::from(move |event: Event| on_change.emit((show_active, input_checked(&event))))
    };
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <div class="flex flex-wrap items-center gap-4">
            <label class="flex items-center gap-2">
                <input type="checkbox" checked={props.show_active} onchange={on_active} />
                { t::SHOW_ACTIVE }
            </label>
            <label class="flex items-center gap-2">
                <input type="checkbox" checked={props.show_inactive} onchange={on_inactive} />
                { t::SHOW_INACTIVE }
            </label>
            <button
                type="button"
                class="btn-secondary"
                disabled={!has_selection || props.loading}
                title={(!has_selection).then_some(t::NO_SELECTION_HINT)}
                onclick={on_refresh}
            >
                { t::REFRESH }
            </button>
            if !has_selection {
                <span class="text-sm text-[var(--warning)]">{ t::NO_SELECTION_HINT }</span>
            }
        </div>
    }
}
