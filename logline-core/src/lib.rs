//! # logline-core
//!
//! Record model and format templates for the logline workspace.
//!
//! ### Key Submodules:
//! - `field`: field list loading and `%(name)s` template building
//! - `template`: template compiler and line renderer
//! - `record`: record attributes and their text forms
//! - `severity`: the numeric NOTSET..CRITICAL scale

pub mod error;
pub mod field;
pub mod record;
pub mod severity;
pub mod template;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::field::*;
    pub use crate::record::*;
    pub use crate::severity::*;
    pub use crate::template::*;
}

pub use error::{FieldListError, SeverityError, TemplateError};
pub use field::{build_template, load_field_names, parse_field_names, FieldName, DEFAULT_EXCLUDED};
pub use record::{Attribute, LogRecord};
pub use severity::Severity;
pub use template::{Conversion, Segment, Template};
