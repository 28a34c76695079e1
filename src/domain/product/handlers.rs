use anyhow::{bail, Result};

use crate::event_dispatch::{EventEnvelope, EventHandler};
use super::events::ProductCreatedEvent;

// ============================================================================
// Email Notification Config
// ============================================================================

#[derive(Clone, Debug)]
pub struct EmailConfig {
    /// Address the notification is sent from
    pub sender: String,
    /// Address the notification is sent to
    pub recipient: String,
    /// Prepended to every subject line
    pub subject_prefix: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: "no-reply@store.local".to_string(),
            recipient: "catalog@store.local".to_string(),
            subject_prefix: "[Catalog] ".to_string(),
        }
    }
}

impl EmailConfig {
    /// Default sender and prefix, custom recipient
    pub fn for_recipient(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }
}

/// Message the stub mailer would send
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

// ============================================================================
// Product Event Handlers
// ============================================================================

/// Stub email notification for new products; logs instead of sending
#[derive(Default)]
pub struct SendEmailWhenProductIsCreatedHandler {
    config: EmailConfig,
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub fn compose(&self, event: &ProductCreatedEvent) -> Result<EmailMessage> {
        if self.config.recipient.trim().is_empty() {
            bail!("No email recipient configured");
        }

        Ok(EmailMessage {
            from: self.config.sender.clone(),
            to: self.config.recipient.clone(),
            subject: format!("{}New product: {}", self.config.subject_prefix, event.name),
            body: format!("{}\n\nPrice: {:.2}", event.description, event.price),
        })
    }
}

impl EventHandler<ProductCreatedEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &EventEnvelope<ProductCreatedEvent>) -> Result<()> {
        let message = self.compose(&event.event_data)?;

        tracing::info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            event_id = %event.event_id,
            "Sending email"
        );
        Ok(())
    }
}
