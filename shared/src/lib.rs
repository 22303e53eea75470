//! Types shared by the parameter console frontend and its mock server.
//!
//! Everything here is plain data and pure state transitions, so it is
//! tested natively; the wasm frontend only wires it to the DOM.

/// Row capability flags and the action set derived from them.
pub mod capability;
pub mod dates;
pub mod error;
/// Active/inactive filter derived from the two list checkboxes.
pub mod filter;
pub mod form;
pub mod listing;
/// Page requests, totals and the page strip.
pub mod pagination;
/// Record schemas and request/response bodies of the console API.
pub mod records;
pub mod subtable;

pub use capability::{ActionState, CapabilityFlags, PrimaryAction, RowAction, RowCapabilities};
pub use error::{ApiError, ErrorCatalog, ErrorPayload, HttpVerb};
pub use filter::ActiveFilter;
pub use form::{Editable, FieldKind, FieldSpec, FormError, FormModel};
pub use listing::{
    DataVersion, DeleteOutcome, DeleteTarget, ListQuery, RequestSequence, SearchTracker,
};
pub use pagination::{PageInfo, PageRequest};
pub use records::{
    AttributeEventsRequest, ConfigRecord, EventVersionsRequest, IndividualParameter,
    ParameterVersionsRequest, SearchRequest, SearchResponse, SpideringAttribute, SpideringEvent,
    SpideringEventType,
};
pub use subtable::{SubTableEvent, SubTableKey, SubTableState};
