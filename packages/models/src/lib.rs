pub mod issues;
pub mod notifications;

pub mod prelude {
    pub use crate::issues::{Issue, NewIssue};
    pub use crate::notifications::Notification;
}
