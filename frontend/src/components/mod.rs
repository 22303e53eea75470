// Reusable components live here.

pub mod action_buttons;
pub mod error_banner;
pub mod filter_bar;
pub mod header;
pub mod loading_spinner;
pub mod modal;
pub mod pagination;
pub mod record_form;
pub mod record_view;
