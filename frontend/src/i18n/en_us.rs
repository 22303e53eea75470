pub mod common {
    pub const LOADING: &str = "Loading...";
    pub const CLOSE: &str = "Close";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const SAVING: &str = "Saving...";
}

pub mod header {
    pub const BRAND_NAME: &str = "Parameter Console";
    pub const NAV_MAIN_ARIA: &str = "Configuration pages";
    pub const NAV_PARAMETERS: &str = "Individual Parameters";
    pub const NAV_ATTRIBUTES: &str = "Spidering Attributes";
    pub const NAV_EVENTS: &str = "Spidering Events";
    pub const MOCK_BADGE: &str = "mock server";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
    pub const ROWS_PER_PAGE: &str = "Rows per page:";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod filter_bar {
    pub const SHOW_ACTIVE: &str = "Active entries";
    pub const SHOW_INACTIVE: &str = "Inactive entries";
    pub const REFRESH: &str = "Refresh";
    pub const NO_SELECTION_HINT: &str = "Please select at least one checkbox";
}

pub mod list_page {
    pub const ADD: &str = "Add";
    pub const ACTIONS: &str = "Actions";
    pub const EMPTY: &str = "No records match the selected filter.";
    pub const EXPAND_ARIA: &str = "Show versions";
    pub const COLLAPSE_ARIA: &str = "Hide versions";
    pub const SUB_TABLE_EMPTY: &str = "No entries.";
    pub const SAVED_NOTICE: &str = "Changes saved.";
    pub const DELETED_NOTICE: &str = "Record deleted.";
}

pub mod actions {
    pub const EDIT: &str = "Edit";
    pub const REINSTATE: &str = "Reinstate";
    pub const DELETE: &str = "Delete";
    pub const NO_ACCESS_TOOLTIP: &str = "Update access is required";
}

pub mod delete_dialog {
    pub const TITLE_TEMPLATE: &str = "Delete {}";
    pub const BODY: &str = "Are you sure you want to delete this record?";
    pub const CONFIRM: &str = "Delete";
    pub const DELETING: &str = "Deleting...";
}

pub mod records {
    pub const PARENT_NAME_TEMPLATE: &str = "Derived from {}";
    pub const SPECIAL_RULE_NOTE: &str = "Special SAR submit rule applies above 99";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "The page you requested does not exist.";
}
