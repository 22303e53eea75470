use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Error,
    Notice,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub messages: Vec<String>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(BannerTone::Error)]
    pub tone: BannerTone,
    /// Notices fade out on their own; errors stay until dismissed.
    #[prop_or(false)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.messages.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.messages.clone()),
            move |(visible, auto_dismiss, _messages)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.messages.iter().all(|message| message.trim().is_empty()) || !*is_open {
        return Html::default();
    }

    let (role, tone_class) = match props.tone {
        BannerTone::Error => ("alert", "error-banner"),
        BannerTone::Notice => ("status", "notice-banner"),
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(tone_class, "flex", "items-start", "gap-3", "rounded-xl", "px-4", "py-3", "text-sm", "w-full")}
            role={role}
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                if props.tone == BannerTone::Error {
                    <p class="font-semibold">{ t::TITLE }</p>
                }
                <ul class="space-y-1">
                    { for props.messages.iter().map(|message| html! { <li>{ message }</li> }) }
                </ul>
            </div>
            if props.on_close.is_some() || props.auto_dismiss {
                <button
                    type="button"
                    class="ml-4 inline-flex h-7 w-7 items-center justify-center rounded-full hover:bg-black/10"
                    aria-label={t::CLOSE_ARIA}
                    onclick={close_button}
                >
                    {"×"}
                </button>
            }
        </div>
    }
}
