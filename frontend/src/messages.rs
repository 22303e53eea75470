//! Error code catalog of the console API.

use std::sync::OnceLock;

use param_console_shared::{error::endpoint_key, ErrorCatalog, HttpVerb};

use crate::config::{INDIVIDUAL_PARAMETERS, SPIDERING_ATTRIBUTES, SPIDERING_EVENTS};

/// Process-wide catalog, built on first use.
pub fn catalog() -> &'static ErrorCatalog {
    static CATALOG: OnceLock<ErrorCatalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> ErrorCatalog {
    let mut catalog = ErrorCatalog::new()
        .with_common("RECORD_NOT_FOUND", "The record no longer exists. Refresh the list.")
        .with_common("INVALID_START_DATE", "Start Date is missing or not a valid date.")
        .with_common("INVALID_DATE_RANGE", "End Date must not be before Start Date.")
        .with_common(
            "REINSTATE_REQUIRES_OPEN_WINDOW",
            "A reinstated record needs an empty or future End Date.",
        )
        .with_common("INVALID_REQUEST", "The request was rejected. Check the entered values.")
        .with_common("DELETE_FAILED", "The record could not be deleted. Please try again later.")
        .with_common("ACCESS_DENIED", "You do not have permission to perform this action.");

    for (endpoints, delete_message) in [
        (INDIVIDUAL_PARAMETERS, "This parameter is in use and cannot be deleted."),
        (SPIDERING_ATTRIBUTES, "This attribute still has active events and cannot be deleted."),
        (SPIDERING_EVENTS, "This event is in use and cannot be deleted."),
    ] {
        catalog = catalog
            .with_endpoint(
                &endpoint_key(HttpVerb::Delete, endpoints.record),
                "DELETE_NOT_ALLOWED",
                delete_message,
            )
            .with_endpoint(
                &endpoint_key(HttpVerb::Post, endpoints.search),
                "INVALID_REQUEST",
                "The list could not be loaded with the selected filter.",
            )
            .with_endpoint(
                &endpoint_key(HttpVerb::Post, endpoints.record),
                "DUPLICATE_NAME",
                "A record with this name already exists.",
            );
    }
    catalog
}

#[cfg(test)]
mod tests {
    use param_console_shared::ApiError;

    use super::*;

    #[test]
    fn delete_conflict_maps_per_resource() {
        let err = ApiError::Http {
            status: 409,
            codes: vec!["DELETE_NOT_ALLOWED".into()],
        };
        let key = endpoint_key(HttpVerb::Delete, SPIDERING_EVENTS.record);
        assert_eq!(catalog().messages_for(&key, &err), vec![
            "This event is in use and cannot be deleted.".to_string()
        ]);
    }

    #[test]
    fn failed_delete_falls_back_to_common_text() {
        let err = ApiError::Http {
            status: 500,
            codes: vec!["DELETE_FAILED".into()],
        };
        let key = endpoint_key(HttpVerb::Delete, INDIVIDUAL_PARAMETERS.record);
        assert_eq!(catalog().messages_for(&key, &err), vec![
            "The record could not be deleted. Please try again later.".to_string()
        ]);
    }

    #[test]
    fn reinstate_with_closed_window_explains_the_end_date() {
        let err = ApiError::Http {
            status: 400,
            codes: vec!["REINSTATE_REQUIRES_OPEN_WINDOW".into()],
        };
        let key = endpoint_key(HttpVerb::Put, SPIDERING_ATTRIBUTES.record);
        assert_eq!(catalog().messages_for(&key, &err), vec![
            "A reinstated record needs an empty or future End Date.".to_string()
        ]);
    }

    #[test]
    fn common_codes_apply_everywhere() {
        let err = ApiError::Http {
            status: 404,
            codes: vec!["RECORD_NOT_FOUND".into()],
        };
        assert_eq!(catalog().messages_for("GET:/anything", &err), vec![
            "The record no longer exists. Refresh the list.".to_string()
        ]);
    }
}
