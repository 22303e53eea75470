use param_console_shared::pagination::{
    range_label, total_pages, visible_slots, PageSlot, PAGE_SIZE_OPTIONS,
};
use yew::prelude::*;

use crate::{
    i18n::{current::pagination as t, fill_one},
    utils::select_value,
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 0-based.
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// Receives the 0-based page index.
    pub on_page_change: Callback<usize>,
    pub on_page_size_change: Callback<usize>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = total_pages(props.total_items, props.page_size);
    let current_page = (props.page_index + 1).clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = props.disabled || current_page <= 1;
    let next_disabled = props.disabled || current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 2);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page);
            }
        })
    };

    let on_size_change = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |event: Event| {
            if let Ok(size) = select_value(&event).parse::<usize>() {
                on_page_size_change.emit(size);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-9",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "text-sm",
        "font-semibold",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-end gap-3 text-sm" aria-label={t::ARIA_NAV}>
            <label class="flex items-center gap-2">
                { t::ROWS_PER_PAGE }
                <select onchange={on_size_change} disabled={props.disabled}>
                    { for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                        <option
                            key={size.to_string()}
                            value={size.to_string()}
                            selected={*size == props.page_size}
                        >
                            { size }
                        </option>
                    }) }
                </select>
            </label>
            <span class="tabular-nums">
                { range_label(current_page - 1, props.page_size, props.total_items) }
            </span>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label={t::ARIA_PREV}
            >
                {"<"}
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        (page == current_page).then_some("bg-[var(--primary)] text-white border-transparent")
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page - 1))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={(page == current_page).then(|| AttrValue::from("page"))}
                            disabled={props.disabled || page == current_page}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}-{current_page}")}
                        class="select-none opacity-60"
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={base_btn_classes}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label={t::ARIA_NEXT}
            >
                {">"}
            </button>
        </nav>
    }
}
