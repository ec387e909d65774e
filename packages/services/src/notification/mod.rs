use models::prelude::{Issue, Notification};

#[cfg(test)]
use mockall::automock;

use crate::errors::DeliveryError;
use crate::settings::ServiceSettings;

/// Delivery channel owned by the host application (SMTP, queue, ...)
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// Renders the messages sent about issues
#[derive(Clone)]
pub struct IssueMailer {
    from: String,
    base_url: String,
}

impl IssueMailer {
    pub fn new(settings: &ServiceSettings) -> Self {
        IssueMailer {
            from: settings.notification_from.clone(),
            base_url: settings.base_url.clone(),
        }
    }

    pub fn issue_link(&self, issue: &Issue) -> String {
        format!("{}/issues/{}", self.base_url, issue.id)
    }

    pub fn issue_opened(&self, issue: &Issue, to: &str) -> Notification {
        let link = self.issue_link(issue);
        let html_body = format!(
            "<p>A new issue was opened: <strong>{title}</strong></p>\
             <p><a href=\"{link}\">{link}</a></p>",
            title = html_escape::encode_text(&issue.title),
        );
        Notification {
            from: self.from.clone(),
            to: to.to_string(),
            subject: format!("New issue: {}", issue.title),
            html_body,
        }
    }
}
