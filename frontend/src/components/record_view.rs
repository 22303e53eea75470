use param_console_shared::FormModel;
use yew::prelude::*;

use super::{error_banner::ErrorBanner, modal::Modal};
use crate::{i18n::current::common as t, resources::RecordEndpoints};

#[derive(Properties, PartialEq)]
pub struct RecordViewProps<R: RecordEndpoints> {
    pub record: R::Record,
    pub on_close: Callback<()>,
}

/// Read-only view modal.
#[function_component(RecordView)]
pub fn record_view<R: RecordEndpoints>(props: &RecordViewProps<R>) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let body = match FormModel::from_record(&props.record, R::FORM_FIELDS, false) {
        Ok(model) => html! {
            <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2 text-sm">
                { for model.fields().iter().map(|field| html! {
                    <>
                        <dt class="font-semibold">{ field.label }</dt>
                        <dd>{ field.display_value(model.value(field.key)).to_string() }</dd>
                    </>
                }) }
            </dl>
        },
        Err(err) => html! { <ErrorBanner messages={err.messages()} /> },
    };

    html! {
        <Modal title={R::VIEW_TITLE} on_close={props.on_close.clone()}>
            { body }
            <div class="mt-6 flex justify-end">
                <button type="button" class="btn-secondary" onclick={close}>{ t::CLOSE }</button>
            </div>
        </Modal>
    }
}
