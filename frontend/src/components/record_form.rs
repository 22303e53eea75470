use param_console_shared::{ConfigRecord, FieldKind, FieldSpec, FormModel};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{error_banner::ErrorBanner, modal::Modal};
use crate::{
    api,
    i18n::current::common as t,
    resources::RecordEndpoints,
    utils::{input_value, select_value},
};

/// What the modify modal is doing to its record.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormMode {
    Create,
    Edit,
    Reinstate,
}

#[derive(Properties, PartialEq)]
pub struct RecordFormProps<R: RecordEndpoints> {
    /// Fetched details, or an empty record when creating.
    pub record: R::Record,
    pub mode: FormMode,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// `true` when the record was saved and the opener should refresh.
    pub on_close: Callback<bool>,
}

/// Modify modal: typed inputs, local validation, then save.
#[function_component(RecordForm)]
pub fn record_form<R: RecordEndpoints>(props: &RecordFormProps<R>) -> Html {
    let is_new = props.mode == FormMode::Create;
    let model = {
        let record = props.record.clone();
        use_state(move || FormModel::from_record(&record, R::FORM_FIELDS, is_new))
    };
    let errors = use_state(Vec::<String>::new);
    let saving = use_state(|| false);

    let title = props.title.clone().unwrap_or_else(|| {
        AttrValue::from(match props.mode {
            FormMode::Create | FormMode::Edit => R::EDIT_TITLE,
            FormMode::Reinstate => R::REINSTATE_TITLE,
        })
    });

    let form = match &*model {
        Ok(form) => form.clone(),
        Err(err) => {
            let close = props.on_close.reform(|_| false);
            return html! {
                <Modal title={title} on_close={close}>
                    <ErrorBanner messages={err.messages()} />
                </Modal>
            };
        },
    };

    let on_field = {
        let model = model.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            if let Ok(current) = &*model {
                let mut next = current.clone();
                next.set(key, value);
                model.set(Ok(next));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let base = props.record.clone();
        let mode = props.mode;
        let errors = errors.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            let mut record = match form.apply_to(&base) {
                Ok(record) => record,
                Err(err) => {
                    errors.set(err.messages());
                    return;
                },
            };
            if mode == FormMode::Reinstate {
                record.flags_mut().reinstate_flag = true;
            }
            errors.set(Vec::new());
            saving.set(true);
            let errors = errors.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::save_record(R::ENDPOINTS, &record).await {
                    Ok(()) => {
                        saving.set(false);
                        on_close.emit(true);
                    },
                    Err(messages) => {
                        saving.set(false);
                        errors.set(messages);
                    },
                }
            });
        })
    };

    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(false))
    };

    html! {
        <Modal title={title} on_close={props.on_close.reform(|_| false)} busy={*saving}>
            <form class="space-y-3" onsubmit={on_submit} novalidate={true}>
                { for form.fields().iter().map(|field| field_input(field, &form, *saving, &on_field)) }
                <ErrorBanner messages={(*errors).clone()} />
                <div class="mt-6 flex justify-end gap-3">
                    <button type="button" class="btn-secondary" onclick={cancel} disabled={*saving}>
                        { t::CANCEL }
                    </button>
                    <button type="submit" class="btn-primary" disabled={*saving}>
                        { if *saving { t::SAVING } else { t::SAVE } }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn field_input(
    field: &'static FieldSpec,
    form: &FormModel,
    saving: bool,
    on_field: &Callback<(&'static str, String)>,
) -> Html {
    let key = field.key;
    let value = form.value(key).to_string();
    let disabled = saving || !field.is_editable(form.is_new());
    let input_id = format!("field-{key}");

    let control = match field.kind {
        FieldKind::Choice(options) => {
            let onchange = on_field.reform(move |event: Event| (key, select_value(&event)));
            html! {
                <select id={input_id.clone()} {onchange} {disabled}>
                    <option value="" selected={value.is_empty()}></option>
                    { for options.iter().map(|(code, label)| html! {
                        <option key={*code} value={*code} selected={value == *code}>{ *label }</option>
                    }) }
                </select>
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            let oninput = on_field.reform(move |event: InputEvent| {
                (
                    key,
                    event
                        .target_dyn_into::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default(),
                )
            });
            let onchange = on_field.reform(move |event: Event| (key, input_value(&event)));
            html! {
                <input
                    id={input_id.clone()}
                    type={input_type}
                    step={(kind == FieldKind::Number).then_some("any")}
                    {value}
                    {oninput}
                    {onchange}
                    {disabled}
                    required={field.required}
                />
            }
        },
    };

    html! {
        <div class="grid grid-cols-[10rem_1fr] items-center gap-3">
            <label for={input_id}>
                { field.label }
                if field.required { <span aria-hidden="true">{ " *" }</span> }
            </label>
            { control }
        </div>
    }
}
