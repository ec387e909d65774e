use crate::errors::ServiceError;
use crate::validation::ValidationError;

/// What an interaction hands back when nothing broke
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The input was rejected; messages are keyed for display next to fields
    Invalid(ValidationError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    pub fn invalid(&self) -> Option<&ValidationError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Invalid(err) => Some(err),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Invalid(err) => Outcome::Invalid(err),
        }
    }
}

/// A single behavior of the application, invoked through `call`
pub trait Interaction {
    type Input;
    type Output;

    fn call(&self, input: Self::Input) -> Result<Outcome<Self::Output>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok: Outcome<i32> = Outcome::Success(2);
        assert!(ok.is_success());
        assert!(ok.invalid().is_none());
        assert_eq!(ok.map(|n| n * 2).success(), Some(4));

        let rejected: Outcome<i32> = Outcome::Invalid(ValidationError::new("base", "is locked"));
        assert!(!rejected.is_success());
        assert_eq!(rejected.invalid().unwrap().messages_for("base").len(), 1);
        assert_eq!(rejected.map(|n| n + 1).success(), None);
    }
}
