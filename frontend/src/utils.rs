use chrono::NaiveDate;
use js_sys::Date;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let d = Date::new_0();
    NaiveDate::from_ymd_opt(
        d.get_full_year() as i32,
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
    )
    .unwrap_or_default()
}

/// Input value of the element that fired `event`.
pub fn input_value(event: &Event) -> String {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Checked state of the checkbox that fired `event`.
pub fn input_checked(event: &Event) -> bool {
    event
        .target_dyn_into::<HtmlInputElement>()
        .is_some_and(|input| input.checked())
}

/// Selected value of the `<select>` that fired `event`.
pub fn select_value(event: &Event) -> String {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}
