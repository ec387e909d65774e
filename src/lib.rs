pub mod setup;

pub use models;
pub use services;

pub use services::validation::{
    normalize, normalize_json, FieldProjector, FlatErrorSet, ValidationReport,
};
pub use services::{Interaction, Outcome};
