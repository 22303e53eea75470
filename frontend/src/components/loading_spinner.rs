use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Dim whatever the spinner is layered over.
    #[prop_or(false)]
    pub overlay: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div class="flex items-center justify-center p-4" role="status" aria-live="polite" aria-busy="true">
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            <span class="sr-only">{ t::LOADING }</span>
        </div>
    };

    if props.overlay {
        html! {
            <div class="loading-spinner-overlay absolute inset-0 z-10 flex items-center justify-center bg-white/60">
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
