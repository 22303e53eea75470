//! The three configuration resources and how their tables look.
//!
//! A list page is generic over [`ConfigResource`]; its expandable rows are
//! generic over the resource's [`SubTableSource`]. Both extend
//! [`RecordEndpoints`], which ties a record type to the endpoints that fetch,
//! save and delete it.

use chrono::NaiveDate;
use param_console_shared::{
    dates::start_date_tone, ActiveFilter, ConfigRecord, FieldSpec,
};
use serde::{de::DeserializeOwned, Serialize};
use yew::prelude::*;

use crate::config::Endpoints;

pub mod attributes;
pub mod events;
pub mod parameters;

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn left(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            align_right: false,
        }
    }

    pub const fn right(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            align_right: true,
        }
    }
}

/// A record type plus the endpoints that read and write it.
pub trait RecordEndpoints: PartialEq + 'static {
    type Record: ConfigRecord + Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static;

    /// Details, save and delete go here.
    const ENDPOINTS: Endpoints;
    /// Fields of the view and modify modals, in display order.
    const FORM_FIELDS: &'static [FieldSpec];
    const VIEW_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const REINSTATE_TITLE: &'static str;
    /// Noun used by the delete confirmation.
    const NOUN: &'static str;
}

/// Top-level resource with its own list page.
pub trait ConfigResource: RecordEndpoints {
    /// Rows of the expanded sub-table.
    type Sub: SubTableSource;

    const TITLE: &'static str;
    const CREATE_TITLE: &'static str;
    const COLUMNS: &'static [Column];
    /// Column whose cell opens the view modal.
    const LINK_COLUMN: &'static str;

    fn render_cell(record: &Self::Record, column: &str, today: NaiveDate) -> Html;
}

/// Child rows fetched lazily under an expanded parent.
pub trait SubTableSource: RecordEndpoints {
    type Request: Serialize + 'static;

    /// Endpoints whose sub-table call lists these rows.
    const PARENT_ENDPOINTS: Endpoints;
    const COLUMNS: &'static [Column];

    fn request(parent_id: i64, filter: ActiveFilter) -> Self::Request;

    fn render_cell(record: &Self::Record, column: &str, today: NaiveDate) -> Html;
}

/// Start date colored by whether it lies ahead and whether the row is
/// still editable.
pub fn start_date_cell<R: ConfigRecord>(record: &R, today: NaiveDate) -> Html {
    let tone = start_date_tone(record.start_date(), today, record.capabilities().can_edit());
    html! { <span class={tone.css_class()}>{ record.start_date() }</span> }
}

/// Plain secondary text.
pub fn text_cell(value: impl Into<String>) -> Html {
    html! { <span class="cell-text">{ value.into() }</span> }
}

pub fn optional_text_cell(value: Option<&str>) -> Html {
    text_cell(value.unwrap_or_default())
}

pub fn number_cell(value: Option<f64>) -> Html {
    text_cell(value.map(param_console_shared::records::format_number).unwrap_or_default())
}
