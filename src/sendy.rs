use crate::config::SendyConfig;
use crate::demo_request::DemoRequest;
use crate::models::SendyStatus;

/// What came back from one subscribe attempt. `response` holds the upstream
/// body, or the transport error text when there was no response.
#[derive(Debug, Clone)]
pub struct SendyOutcome {
    pub status: SendyStatus,
    pub response: String,
}

/// Client for the Sendy `/subscribe` form endpoint.
pub struct SendyClient {
    client: reqwest::Client,
    subscribe_url: String,
    list_id: String,
}

impl SendyClient {
    pub fn new(config: &SendyConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            subscribe_url: config.subscribe_url.clone(),
            list_id: config.list_id.clone(),
        })
    }

    fn form_fields<'a>(&'a self, request: &'a DemoRequest) -> [(&'static str, &'a str); 6] {
        [
            ("name", request.full_name.as_str()),
            ("email", request.company_email.as_str()),
            ("Phone_Number", request.phone_number.as_str()),
            ("list", self.list_id.as_str()),
            ("subform", "yes"),
            // Honeypot, must stay empty.
            ("hp", ""),
        ]
    }

    /// Single best-effort attempt. Never returns an error: every failure is
    /// folded into a `Failed` outcome.
    pub async fn subscribe(&self, request: &DemoRequest) -> SendyOutcome {
        let resp = match self
            .client
            .post(&self.subscribe_url)
            .form(&self.form_fields(request))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Sendy submission error: {e}");
                return SendyOutcome {
                    status: SendyStatus::Failed,
                    response: e.to_string(),
                };
            }
        };

        let status_code = resp.status();
        match resp.text().await {
            Ok(body) if status_code.is_success() => SendyOutcome {
                status: SendyStatus::Success,
                response: body,
            },
            Ok(body) => {
                tracing::warn!("Sendy responded with {status_code}");
                SendyOutcome {
                    status: SendyStatus::Failed,
                    response: body,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read Sendy response ({status_code}): {e}");
                SendyOutcome {
                    status: SendyStatus::Failed,
                    response: e.to_string(),
                }
            }
        }
    }
}
