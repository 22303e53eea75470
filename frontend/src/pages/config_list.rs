use std::marker::PhantomData;

use param_console_shared::{
    ConfigRecord, DataVersion, DeleteOutcome, DeleteTarget, ListQuery, RowAction,
    SearchTracker,
};
use yew::prelude::*;

use super::expandable_row::ExpandableRow;
use crate::{
    api,
    components::{
        action_buttons::ActionButtons,
        error_banner::{BannerTone, ErrorBanner},
        filter_bar::FilterBar,
        loading_spinner::LoadingSpinner,
        modal::Modal,
        pagination::Pagination,
        record_form::{FormMode, RecordForm},
        record_view::RecordView,
    },
    hooks::use_session,
    i18n::{
        current::{common as common_text, delete_dialog as delete_text, list_page as t},
        fill_one,
    },
    resources::{ConfigResource, RecordEndpoints},
};

/// Modal currently layered over the list.
#[derive(Clone, PartialEq)]
enum ListModal<T> {
    View(T),
    Form(T, FormMode),
}

#[derive(Properties, PartialEq)]
pub struct ListPageProps<R: ConfigResource> {
    #[prop_or_default]
    pub resource: PhantomData<R>,
}

/// Filtered, paginated list of one resource with expandable rows.
#[function_component(ListPage)]
pub fn list_page<R: ConfigResource>(_props: &ListPageProps<R>) -> Html {
    let session = use_session();
    let query = use_state(ListQuery::default);
    let rows = use_state(Vec::<R::Record>::new);
    let total = use_state(|| 0_usize);
    let loading = use_state(|| false);
    let errors = use_state(Vec::<String>::new);
    let notice = use_state(|| None::<&'static str>);
    let version = use_state(DataVersion::default);
    let modal = use_state(|| None::<ListModal<R::Record>>);
    let delete_target = use_state(|| None::<DeleteTarget>);
    let delete_errors = use_state(Vec::<String>::new);
    let deleting = use_state(|| false);
    // Request sequence guard: only the latest search may land.
    let tracker = use_mut_ref(SearchTracker::default);

    let load = {
        let query = query.clone();
        let rows = rows.clone();
        let total = total.clone();
        let loading = loading.clone();
        let errors = errors.clone();
        let tracker = tracker.clone();
        Callback::from(move |next: ListQuery| {
            query.set(next);
            let Some((ticket, request)) = tracker.borrow_mut().issue(&next) else {
                loading.set(false);
                return;
            };
            let rows = rows.clone();
            let total = total.clone();
            let loading = loading.clone();
            let errors = errors.clone();
            let tracker = tracker.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::search::<R::Record>(R::ENDPOINTS, &request).await {
                    Ok(response) => {
                        if !tracker.borrow_mut().accept(ticket, &request) {
                            return;
                        }
                        rows.set(response.items);
                        total.set(response.pagination.total_item_count);
                        errors.set(Vec::new());
                    },
                    Err(messages) => {
                        if !tracker.borrow().is_current(ticket) {
                            return;
                        }
                        errors.set(messages);
                    },
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(ListQuery::default());
            || ()
        });
    }

    // Re-fetch the current page and tell open rows their sub-tables are stale.
    let refresh_current = {
        let load = load.clone();
        let query = query.clone();
        let version = version.clone();
        Callback::from(move |_: ()| {
            version.set(version.bump());
            load.emit(*query);
        })
    };

    let on_filter_change = {
        let load = load.clone();
        let query = query.clone();
        Callback::from(move |(show_active, show_inactive): (bool, bool)| {
            let mut next = *query;
            next.set_toggles(show_active, show_inactive);
            load.emit(next);
        })
    };

    let on_refresh = {
        let load = load.clone();
        let query = query.clone();
        let version = version.clone();
        Callback::from(move |_: ()| {
            let mut next = *query;
            if next.restart().is_some() {
                version.set(version.bump());
                load.emit(next);
            }
        })
    };

    let on_page_change = {
        let load = load.clone();
        let query = query.clone();
        Callback::from(move |page_index: usize| {
            let mut next = *query;
            next.go_to_page(page_index);
            load.emit(next);
        })
    };

    let on_page_size_change = {
        let load = load.clone();
        let query = query.clone();
        Callback::from(move |page_size: usize| {
            let mut next = *query;
            next.change_page_size(page_size);
            load.emit(next);
        })
    };

    let open_details = {
        let modal = modal.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        Callback::from(move |(id, mode): (i64, Option<FormMode>)| {
            let modal = modal.clone();
            let errors = errors.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::details::<R::Record>(R::ENDPOINTS, id).await {
                    Ok(record) => modal.set(Some(match mode {
                        Some(mode) => ListModal::Form(record, mode),
                        None => ListModal::View(record),
                    })),
                    Err(messages) => errors.set(messages),
                }
                loading.set(false);
            });
        })
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_| {
            modal.set(Some(ListModal::Form(R::Record::default(), FormMode::Create)))
        })
    };

    let on_form_close = {
        let modal = modal.clone();
        let notice = notice.clone();
        let refresh_current = refresh_current.clone();
        Callback::from(move |refresh: bool| {
            modal.set(None);
            if refresh {
                notice.set(Some(t::SAVED_NOTICE));
                refresh_current.emit(());
            }
        })
    };

    let on_view_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let on_delete_request = {
        let delete_target = delete_target.clone();
        let delete_errors = delete_errors.clone();
        Callback::from(move |target: DeleteTarget| {
            delete_errors.set(Vec::new());
            delete_target.set(Some(target));
        })
    };

    let on_delete_cancel = {
        let delete_target = delete_target.clone();
        let delete_errors = delete_errors.clone();
        Callback::from(move |_: ()| {
            delete_target.set(None);
            delete_errors.set(Vec::new());
        })
    };

    let on_delete_confirm = {
        let delete_target = delete_target.clone();
        let delete_errors = delete_errors.clone();
        let deleting = deleting.clone();
        let notice = notice.clone();
        let refresh_current = refresh_current.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(target) = *delete_target else {
                return;
            };
            if *deleting {
                return;
            }
            let endpoints = match target {
                DeleteTarget::Record(_) => R::ENDPOINTS,
                DeleteTarget::SubRecord(_) => <R::Sub as RecordEndpoints>::ENDPOINTS,
            };
            let delete_target = delete_target.clone();
            let delete_errors = delete_errors.clone();
            let deleting = deleting.clone();
            let notice = notice.clone();
            let refresh_current = refresh_current.clone();
            deleting.set(true);
            delete_errors.set(Vec::new());
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::delete_record(endpoints, target.id()).await;
                deleting.set(false);
                let outcome = DeleteOutcome::settle(target, result);
                delete_target.set(outcome.target);
                delete_errors.set(outcome.messages);
                if outcome.refresh {
                    notice.set(Some(t::DELETED_NOTICE));
                    refresh_current.emit(());
                }
            });
        })
    };

    let colspan = R::COLUMNS.len() + 1;
    let applied_filter = tracker.borrow().applied_filter();
    let today = session.today;

    let render_cells = |record: &R::Record| {
        let id = record.id();
        let on_action = {
            let open_details = open_details.clone();
            let on_delete_request = on_delete_request.clone();
            Callback::from(move |action: RowAction| {
                let Some(id) = id else {
                    return;
                };
                match action {
                    RowAction::Edit => open_details.emit((id, Some(FormMode::Edit))),
                    RowAction::Reinstate => open_details.emit((id, Some(FormMode::Reinstate))),
                    RowAction::Delete => on_delete_request.emit(DeleteTarget::Record(id)),
                }
            })
        };
        html! {
            <>
                { for R::COLUMNS.iter().map(|column| {
                    let content = R::render_cell(record, column.id, today);
                    let content = match id {
                        Some(id) if column.id == R::LINK_COLUMN => {
                            let onclick = open_details.reform(move |_: MouseEvent| (id, None));
                            html! { <button type="button" class="link-button" {onclick}>{ content }</button> }
                        },
                        _ => content,
                    };
                    html! {
                        <td key={column.id} class={classes!(column.align_right.then_some("text-right"))}>
                            { content }
                        </td>
                    }
                }) }
                <td>
                    <ActionButtons
                        capabilities={record.capabilities()}
                        has_update_access={session.has_update_access}
                        {on_action}
                    />
                </td>
            </>
        }
    };

    let table_body = if rows.is_empty() && !*loading {
        html! {
            <tr>
                <td colspan={(colspan + 1).to_string()} class="py-6 text-center opacity-70">
                    { t::EMPTY }
                </td>
            </tr>
        }
    } else {
        html! {
            <>
            { for rows.iter().enumerate().map(|(index, record)| {
                let key = record.id().map_or_else(|| format!("row-{index}"), |id| id.to_string());
                if record.is_expandable() {
                    html! {
                        <ExpandableRow<R::Sub>
                            key={key}
                            parent_id={record.id()}
                            filter={applied_filter}
                            version={*version}
                            {colspan}
                            on_delete={on_delete_request.clone()}
                        >
                            { render_cells(record) }
                        </ExpandableRow<R::Sub>>
                    }
                } else {
                    html! {
                        <tr key={key}>
                            <td class="w-10"></td>
                            { render_cells(record) }
                        </tr>
                    }
                }
            }) }
            </>
        }
    };

    let modal_html = match (*modal).clone() {
        Some(ListModal::View(record)) => html! {
            <RecordView<R> {record} on_close={on_view_close} />
        },
        Some(ListModal::Form(record, mode)) => {
            let title = (mode == FormMode::Create).then(|| AttrValue::from(R::CREATE_TITLE));
            html! { <RecordForm<R> {record} {mode} {title} on_close={on_form_close} /> }
        },
        None => Html::default(),
    };

    let delete_dialog = match *delete_target {
        Some(_) => html! {
            <Modal
                title={fill_one(delete_text::TITLE_TEMPLATE, R::NOUN)}
                on_close={on_delete_cancel.clone()}
                busy={*deleting}
            >
                <p>{ delete_text::BODY }</p>
                <div class="mt-3">
                    <ErrorBanner messages={(*delete_errors).clone()} />
                </div>
                <div class="mt-6 flex justify-end gap-3">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled={*deleting}
                        onclick={on_delete_cancel.reform(|_: MouseEvent| ())}
                    >
                        { common_text::CANCEL }
                    </button>
                    <button type="button" class="btn-danger" disabled={*deleting} onclick={on_delete_confirm}>
                        { if *deleting { delete_text::DELETING } else { delete_text::CONFIRM } }
                    </button>
                </div>
            </Modal>
        },
        None => Html::default(),
    };

    let clear_errors = {
        let errors = errors.clone();
        Callback::from(move |_: ()| errors.set(Vec::new()))
    };
    let clear_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <main class="mx-auto max-w-7xl space-y-4 px-6 py-6">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">{ R::TITLE }</h1>
                <button
                    type="button"
                    class="btn-primary"
                    disabled={!session.has_update_access}
                    onclick={on_add}
                >
                    { t::ADD }
                </button>
            </div>
            <FilterBar
                show_active={query.show_active}
                show_inactive={query.show_inactive}
                on_change={on_filter_change}
                {on_refresh}
                loading={*loading}
            />
            <ErrorBanner messages={(*errors).clone()} on_close={clear_errors} />
            if let Some(message) = *notice {
                <ErrorBanner
                    messages={vec![message.to_string()]}
                    tone={BannerTone::Notice}
                    auto_dismiss={true}
                    on_close={clear_notice}
                />
            }
            <div class="relative overflow-x-auto">
                <table class="config-table w-full text-sm">
                    <thead>
                        <tr>
                            <th class="w-10"></th>
                            { for R::COLUMNS.iter().map(|column| html! {
                                <th key={column.id} class={classes!(column.align_right.then_some("text-right"))}>
                                    { column.label }
                                </th>
                            }) }
                            <th>{ t::ACTIONS }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { table_body }
                    </tbody>
                </table>
                if *loading {
                    <LoadingSpinner overlay={true} />
                }
            </div>
            <Pagination
                page_index={query.page_index}
                page_size={query.page_size}
                total_items={*total}
                {on_page_change}
                {on_page_size_change}
                disabled={!query.has_selection()}
            />
            { modal_html }
            { delete_dialog }
        </main>
    }
}
