use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Backdrop clicks and the × button are ignored while busy.
    #[prop_or(false)]
    pub busy: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close_click = {
        let on_close = props.on_close.clone();
        let busy = props.busy;
        Callback::from(move |_: MouseEvent| {
            if !busy {
                on_close.emit(());
            }
        })
    };
    let stop_bubble = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
            role="dialog"
            aria-modal="true"
            aria-label={props.title.clone()}
            onclick={close_click.clone()}
        >
            <div
                class="relative w-full max-w-2xl rounded-xl bg-[var(--surface)] p-6 shadow-xl"
                onclick={stop_bubble}
            >
                <div class="mb-4 flex items-center justify-between">
                    <h2 class="text-lg font-semibold">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="rounded-full px-2 text-lg leading-none hover:bg-black/10"
                        aria-label={t::CLOSE}
                        disabled={props.busy}
                        onclick={close_click}
                    >
                        { "×" }
                    </button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
