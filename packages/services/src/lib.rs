pub mod errors;
pub mod interaction;
pub mod issues;
pub mod notification;
pub mod settings;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use errors::*;
pub use interaction::{Interaction, Outcome};
pub use settings::ServiceSettings;
pub use validation::*;
