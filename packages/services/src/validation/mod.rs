pub mod contract;
pub mod error;
pub mod field_validators;
pub mod flat_errors;
pub mod normalizer;
pub mod projector;
pub mod report;
pub mod validation_error;

// Re-export common types and functions
pub use contract::Contract;
pub use error::{NormalizeError, SchemaError};
pub use field_validators::FieldValidator;
pub use flat_errors::{ErrorCollector, FlatErrorSet, ValidationErrors, ValidationErrorsExt};
pub use normalizer::{normalize, normalize_json, top_level_key, BASE_KEY};
pub use projector::{FieldProjector, ProjectedInput, SchemaDescription, StaticSchema};
pub use report::{KeySegment, ReportNode, ValidationReport};
pub use validation_error::ValidationError;
