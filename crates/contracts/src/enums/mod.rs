pub mod export_format;
pub mod form_type;

pub use export_format::ExportFormat;
pub use form_type::FormType;
