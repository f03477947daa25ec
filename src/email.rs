//! Report email delivery
//!
//! Sends the rendered report as one multipart (plain + HTML) message per
//! recipient over SMTP. A failed recipient is logged and the batch
//! continues.

use anyhow::{Context, Result};
use lettre::{
    message::MultiPart, transport::smtp::authentication::Credentials,
    transport::smtp::SmtpTransport, Message, Transport,
};
use std::env;

/// Environment variable holding the sender address
pub const FROM_ADDRESS_VAR: &str = "HIKING_EMAIL_FROM_ADDRESS";

/// Environment variable holding the comma-separated recipient list
pub const RECIPIENTS_VAR: &str = "HIKING_EMAIL_RECIPIENTS";

fn create_mailer() -> Result<SmtpTransport> {
    let smtp_host = env::var("SMTP_HOST").context("Missing SMTP_HOST env var")?;
    let smtp_username = env::var("SMTP_USERNAME").context("Missing SMTP_USERNAME env var")?;
    let smtp_password = env::var("SMTP_PASSWORD").context("Missing SMTP_PASSWORD env var")?;

    let credentials = Credentials::new(smtp_username, smtp_password);

    let mailer = SmtpTransport::relay(&smtp_host)?
        .credentials(credentials)
        .build();

    Ok(mailer)
}

/// Recipients from the environment; an unset or blank variable means
/// print-only. Always builds a fresh list.
#[must_use]
pub fn recipients_from_env() -> Vec<String> {
    env::var(RECIPIENTS_VAR)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

/// Send `body` to each recipient as a separate multipart message.
/// Per-recipient failures are logged without aborting the batch.
pub fn send_report(
    from_address: &str,
    to_addresses: &[String],
    subject: &str,
    body: &str,
) -> Result<()> {
    let mailer = create_mailer()?;
    let from: lettre::message::Mailbox = from_address
        .parse()
        .with_context(|| format!("Failed to parse from address {from_address:?}"))?;

    for address in to_addresses {
        let to = match address.parse() {
            Ok(to) => to,
            Err(e) => {
                tracing::warn!("skipping invalid recipient address {address:?}: {e}");
                continue;
            }
        };

        let message = Message::builder()
            .from(from.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                body.to_string(),
                body.to_string(),
            ));

        let message = match message {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("failed to build message for {address}: {e}");
                continue;
            }
        };

        tracing::info!("Emailing {address}");
        if let Err(e) = mailer.send(&message) {
            tracing::warn!("error sending email to {address}: {e}");
        }
    }

    Ok(())
}
