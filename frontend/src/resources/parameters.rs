use chrono::NaiveDate;
use param_console_shared::{
    ActiveFilter, Editable, FieldKind, FieldSpec, IndividualParameter, ParameterVersionsRequest,
};
use yew::prelude::*;

use super::{
    number_cell, optional_text_cell, start_date_cell, text_cell, Column, ConfigResource,
    RecordEndpoints, SubTableSource,
};
use crate::config::{Endpoints, INDIVIDUAL_PARAMETERS};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).required().editable(Editable::OnCreate),
    FieldSpec::new("description", "Description", FieldKind::Text),
    FieldSpec::new("numericValue", "Number", FieldKind::Number),
    FieldSpec::new("textValue", "Text", FieldKind::Text),
    FieldSpec::new("dateValue", "Date", FieldKind::Date),
    FieldSpec::new("startDate", "Start Date", FieldKind::Date).required(),
    FieldSpec::new("endDate", "End Date", FieldKind::Date),
];

/// Individual parameters page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndividualParameters;

impl RecordEndpoints for IndividualParameters {
    type Record = IndividualParameter;

    const EDIT_TITLE: &'static str = "Modify Parameter";
    const ENDPOINTS: Endpoints = INDIVIDUAL_PARAMETERS;
    const FORM_FIELDS: &'static [FieldSpec] = FIELDS;
    const NOUN: &'static str = "Parameter";
    const REINSTATE_TITLE: &'static str = "Reinstate Parameter";
    const VIEW_TITLE: &'static str = "Parameter Details";
}

impl ConfigResource for IndividualParameters {
    type Sub = ParameterVersions;

    const COLUMNS: &'static [Column] = &[
        Column::left("name", "Name"),
        Column::left("description", "Description"),
        Column::right("numericValue", "Number"),
        Column::left("textValue", "Text"),
        Column::left("dateValue", "Date"),
        Column::left("startDate", "Start Date"),
        Column::left("endDate", "End Date"),
    ];
    const CREATE_TITLE: &'static str = "Add Parameter";
    const LINK_COLUMN: &'static str = "name";
    const TITLE: &'static str = "Individual Parameters";

    fn render_cell(record: &IndividualParameter, column: &str, today: NaiveDate) -> Html {
        match column {
            "name" => text_cell(record.name.as_str()),
            "description" => optional_text_cell(record.description.as_deref()),
            _ => version_cell(record, column, today),
        }
    }
}

/// Value versions of one parameter; same schema as the parameter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterVersions;

impl RecordEndpoints for ParameterVersions {
    type Record = IndividualParameter;

    const EDIT_TITLE: &'static str = "Modify Parameter Version";
    const ENDPOINTS: Endpoints = INDIVIDUAL_PARAMETERS;
    const FORM_FIELDS: &'static [FieldSpec] = FIELDS;
    const NOUN: &'static str = "Parameter Version";
    const REINSTATE_TITLE: &'static str = "Reinstate Parameter Version";
    const VIEW_TITLE: &'static str = "Parameter Version";
}

impl SubTableSource for ParameterVersions {
    type Request = ParameterVersionsRequest;

    const COLUMNS: &'static [Column] = &[
        Column::right("numericValue", "Number"),
        Column::left("textValue", "Text"),
        Column::left("dateValue", "Date"),
        Column::left("startDate", "Start Date"),
        Column::left("endDate", "End Date"),
    ];
    const PARENT_ENDPOINTS: Endpoints = INDIVIDUAL_PARAMETERS;

    fn request(par_id: i64, active: ActiveFilter) -> ParameterVersionsRequest {
        ParameterVersionsRequest {
            par_id,
            active,
        }
    }

    fn render_cell(record: &IndividualParameter, column: &str, today: NaiveDate) -> Html {
        version_cell(record, column, today)
    }
}

fn version_cell(record: &IndividualParameter, column: &str, today: NaiveDate) -> Html {
    match column {
        "numericValue" => number_cell(record.numeric_value),
        "textValue" => optional_text_cell(record.text_value.as_deref()),
        "dateValue" => optional_text_cell(record.date_value.as_deref()),
        "startDate" => start_date_cell(record, today),
        "endDate" => optional_text_cell(record.end_date.as_deref()),
        _ => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn expanding_posts_parent_id_and_applied_filter() {
        let body = serde_json::to_value(ParameterVersions::request(1, ActiveFilter::Active))
            .expect("request serializes");
        assert_eq!(body, json!({ "parId": 1, "active": "Y" }));
    }
}
