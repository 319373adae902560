//! Best-effort notification of adoption-request submissions.
//!
//! The notifier is optional: when SMTP is not configured the state carries
//! `None` and submissions are only logged. Delivery failures are logged and
//! swallowed; they must never change the HTTP response.

pub mod email;

use async_trait::async_trait;
use refugio_core::adoption::AdoptionRequest;
use refugio_db::models::animal::Animal;

pub use email::{EmailConfig, EmailNotifier};

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Delivers a notification for each accepted adoption request.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn adoption_request(
        &self,
        request: &AdoptionRequest,
        animal: &Animal,
    ) -> Result<(), NotifyError>;
}
