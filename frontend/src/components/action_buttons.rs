use param_console_shared::{ActionState, RowAction, RowCapabilities};
use yew::prelude::*;

use crate::i18n::current::actions as t;

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub capabilities: RowCapabilities,
    pub has_update_access: bool,
    pub on_action: Callback<RowAction>,
}

/// Edit or reinstate, then delete. Missing capabilities render nothing.
#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    let button = |action: RowAction, label: &'static str, icon: &'static str| {
        let state = props.capabilities.action_state(action, props.has_update_access);
        if state == ActionState::Hidden {
            return Html::default();
        }
        let enabled = state == ActionState::Enabled;
        let onclick = {
            let on_action = props.on_action.clone();
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                if enabled {
                    on_action.emit(action);
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes!("action-button", (!enabled).then_some("opacity-40 cursor-not-allowed"))}
                title={if enabled { label } else { t::NO_ACCESS_TOOLTIP }}
                aria-label={label}
                disabled={!enabled}
                onclick={onclick}
            >
                { icon }
            </button>
        }
    };

    html! {
        <div class="flex items-center gap-2">
            { button(RowAction::Edit, t::EDIT, "✎") }
            { button(RowAction::Reinstate, t::REINSTATE, "↺") }
            { button(RowAction::Delete, t::DELETE, "🗑") }
        </div>
    }
}
