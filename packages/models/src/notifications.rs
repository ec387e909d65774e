use serde::{Deserialize, Serialize};

/// A rendered message ready to hand to a delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}
