pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod list_query;
pub mod modal;
pub mod notice;
pub mod page_frame;
pub mod request_seq;
pub mod schema_form;
