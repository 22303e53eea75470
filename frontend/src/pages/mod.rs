pub mod config_list;
pub mod expandable_row;
pub mod not_found;

pub use config_list::ListPage;
