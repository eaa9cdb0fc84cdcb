//! Schema-driven rendering of the artifact `details` / `measurements` bags.
//!
//! Descriptors are `'static` constants; every form type's field list lives
//! in `registry.rs`.
//!
//! ```rust,ignore
//! use contracts::shared::artifact_schema::{details_schema, detail_section};
//!
//! let schema = details_schema(artifact.form_type);
//! if let Some(section) = detail_section(schema, &artifact.details) {
//!     for row in section.rows { /* label / value */ }
//! }
//! ```

mod bag;
mod controls;
mod display;
mod registry;
mod types;
mod vocabulary;

pub use bag::{apply_change, value_as_input, Bag};
pub use controls::{enum_selection_value, field_controls, FieldControl};
pub use display::{detail_section, format_enum, format_measure, format_plain, DetailRow, DetailSection};
pub use registry::{details_schema, details_title, MEASUREMENT_SCHEMA};
pub use types::{FieldDescriptor, FieldKind, UnitType};
pub use vocabulary::{enum_options, enum_vocabulary, unit_options, EnumVocabulary, ENUMS};
