use gloo_net::http::Request;
use log::{error, info};

use crate::config;
use crate::lead::models::{LeadRecord, SubmitError};

/// Destination for finished lead records.
#[allow(async_fn_in_trait)]
pub trait LeadSink {
    /// One POST, no retry. Rejections and network errors come back as the same variant.
    async fn submit_lead(&self, record: &LeadRecord) -> Result<(), SubmitError>;
}

pub struct Webhook {
    url: &'static str,
}

impl Webhook {
    pub fn new(url: &'static str) -> Self {
        Self { url }
    }
}

impl Default for Webhook {
    fn default() -> Self {
        Self::new(config::get_webhook_url())
    }
}

impl LeadSink for Webhook {
    async fn submit_lead(&self, record: &LeadRecord) -> Result<(), SubmitError> {
        let request = Request::post(self.url)
            .header("Content-Type", "application/json")
            .json(record)
            .map_err(|e| {
                error!("Error encoding lead: {}", e);
                SubmitError::NetworkOrServer(e.to_string())
            })?;

        let response = request.send().await.map_err(|e| {
            error!("Error submitting form: {}", e);
            SubmitError::NetworkOrServer(e.to_string())
        })?;

        check_status(response.status())?;
        info!("Lead accepted by webhook (status {})", response.status());
        Ok(())
    }
}

/// Only 2xx counts as delivered.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        error!("Webhook rejected lead with status {}", status);
        Err(SubmitError::NetworkOrServer(format!(
            "webhook responded with status {}",
            status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_2xx_is_success() {
        assert!(check_status(200).is_ok());
        assert!(check_status(202).is_ok());
        assert!(check_status(299).is_ok());
    }

    #[test]
    fn everything_else_is_one_failure_kind() {
        for status in [0, 199, 301, 400, 429, 500, 503] {
            assert!(matches!(
                check_status(status),
                Err(SubmitError::NetworkOrServer(_))
            ));
        }
    }
}
