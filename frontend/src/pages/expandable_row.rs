use std::{marker::PhantomData, rc::Rc};

use param_console_shared::{
    ActiveFilter, ConfigRecord, DataVersion, DeleteTarget, RowAction, SubTableEvent,
    SubTableState,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        action_buttons::ActionButtons,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        record_form::{FormMode, RecordForm},
    },
    hooks::use_session,
    i18n::current::list_page as t,
    resources::SubTableSource,
};

/// Reducer wrapper so a row's sub-table transitions go through one place.
#[derive(PartialEq)]
struct SubTable<T>(SubTableState<T>);

impl<T> Default for SubTable<T> {
    fn default() -> Self {
        Self(SubTableState::new())
    }
}

impl<T: Clone> Reducible for SubTable<T> {
    type Action = SubTableEvent<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpandableRowProps<S: SubTableSource> {
    pub parent_id: Option<i64>,
    /// Filter that produced the parent list.
    pub filter: ActiveFilter,
    pub version: DataVersion,
    /// Span of the sub-table row.
    pub colspan: usize,
    /// Routed to the list's confirmation dialog.
    pub on_delete: Callback<DeleteTarget>,
    /// Cells of the parent row, after the toggle cell.
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub source: PhantomData<S>,
}

/// Parent row with a `+`/`−` toggle and its lazily fetched sub-table.
#[function_component(ExpandableRow)]
pub fn expandable_row<S: SubTableSource>(props: &ExpandableRowProps<S>) -> Html {
    let session = use_session();
    let state = use_reducer(SubTable::<S::Record>::default);
    let editing = use_state(|| None::<(S::Record, FormMode)>);
    let action_errors = use_state(Vec::<String>::new);
    let details_loading = use_state(|| false);

    let wanted = state.0.wanted(props.parent_id, props.filter, props.version);
    {
        let state = state.clone();
        use_effect_with(wanted, move |wanted| {
            if let Some(key) = *wanted {
                state.dispatch(SubTableEvent::Started(key));
                let request = S::request(key.parent_id, key.filter);
                wasm_bindgen_futures::spawn_local(async move {
                    match api::sub_table::<_, S::Record>(S::PARENT_ENDPOINTS, &request).await {
                        Ok(rows) => state.dispatch(SubTableEvent::Loaded(key, rows)),
                        Err(messages) => state.dispatch(SubTableEvent::Failed(key, messages)),
                    }
                });
            }
            || ()
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SubTableEvent::Toggle))
    };

    let on_row_action = {
        let editing = editing.clone();
        let action_errors = action_errors.clone();
        let details_loading = details_loading.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |(id, action): (i64, RowAction)| {
            let mode = match action {
                RowAction::Delete => {
                    on_delete.emit(DeleteTarget::SubRecord(id));
                    return;
                },
                RowAction::Edit => FormMode::Edit,
                RowAction::Reinstate => FormMode::Reinstate,
            };
            let editing = editing.clone();
            let action_errors = action_errors.clone();
            let details_loading = details_loading.clone();
            details_loading.set(true);
            action_errors.set(Vec::new());
            wasm_bindgen_futures::spawn_local(async move {
                match api::details::<S::Record>(S::ENDPOINTS, id).await {
                    Ok(record) => editing.set(Some((record, mode))),
                    Err(messages) => action_errors.set(messages),
                }
                details_loading.set(false);
            });
        })
    };

    let on_form_close = {
        let editing = editing.clone();
        let state = state.clone();
        Callback::from(move |refresh: bool| {
            editing.set(None);
            if refresh {
                state.dispatch(SubTableEvent::Invalidate);
            }
        })
    };

    let expanded = state.0.is_expanded();
    let sub_table = if expanded {
        let body = if state.0.is_loading() || *details_loading {
            html! { <LoadingSpinner size={SpinnerSize::Small} /> }
        } else if !state.0.errors().is_empty() {
            html! { <ErrorBanner messages={state.0.errors().to_vec()} /> }
        } else if state.0.rows().is_empty() {
            html! { <p class="py-3 text-center text-sm opacity-70">{ t::SUB_TABLE_EMPTY }</p> }
        } else {
            html! {
                <table class="sub-table w-full text-sm">
                    <thead>
                        <tr>
                            { for S::COLUMNS.iter().map(|column| html! {
                                <th key={column.id} class={classes!(column.align_right.then_some("text-right"))}>
                                    { column.label }
                                </th>
                            }) }
                            <th>{ t::ACTIONS }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.0.rows().iter().enumerate().map(|(index, row)| {
                            let on_action = {
                                let on_row_action = on_row_action.clone();
                                let id = row.id();
                                Callback::from(move |action: RowAction| {
                                    if let Some(id) = id {
                                        on_row_action.emit((id, action));
                                    }
                                })
                            };
                            html! {
                                <tr key={row.id().map_or_else(|| format!("row-{index}"), |id| id.to_string())}>
                                    { for S::COLUMNS.iter().map(|column| html! {
                                        <td key={column.id} class={classes!(column.align_right.then_some("text-right"))}>
                                            { S::render_cell(row, column.id, session.today) }
                                        </td>
                                    }) }
                                    <td>
                                        <ActionButtons
                                            capabilities={row.capabilities()}
                                            has_update_access={session.has_update_access}
                                            {on_action}
                                        />
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        };
        html! {
            <tr class="sub-table-row">
                <td colspan={(props.colspan + 1).to_string()}>
                    <div class="mx-auto my-2 w-[60%] rounded border border-[var(--border)] p-2">
                        <ErrorBanner messages={(*action_errors).clone()} />
                        { body }
                    </div>
                </td>
            </tr>
        }
    } else {
        Html::default()
    };

    let form = (*editing).clone().map(|(record, mode)| {
        html! {
            <RecordForm<S> {record} {mode} on_close={on_form_close.clone()} />
        }
    });

    html! {
        <>
            <tr class="expandable-row">
                <td class="w-10">
                    <button
                        type="button"
                        class="toggle-button"
                        aria-expanded={expanded.to_string()}
                        aria-label={if expanded { t::COLLAPSE_ARIA } else { t::EXPAND_ARIA }}
                        title={if expanded { t::COLLAPSE_ARIA } else { t::EXPAND_ARIA }}
                        onclick={toggle}
                    >
                        { if expanded { "−" } else { "+" } }
                    </button>
                </td>
                { props.children.clone() }
            </tr>
            { sub_table }
            { for form }
        </>
    }
}
