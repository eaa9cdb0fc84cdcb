pub mod filter_panel;
pub mod key_value_row;
pub mod page_header;
pub mod pagination_controls;
pub mod ui;
