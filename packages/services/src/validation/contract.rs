use super::error::NormalizeError;
use super::flat_errors::FlatErrorSet;
use super::normalizer::normalize;
use super::projector::ProjectedInput;
use super::report::ValidationReport;

/// Checks a projected input and describes what is wrong with it
pub trait Contract {
    /// Build the nested report for `input`; empty when the input is valid
    fn check(&self, input: &ProjectedInput) -> Result<ValidationReport, NormalizeError>;

    /// Check and flatten in one go. An empty set means the input passed.
    fn validate(&self, input: &ProjectedInput) -> Result<FlatErrorSet, NormalizeError> {
        normalize(&self.check(input)?)
    }
}
