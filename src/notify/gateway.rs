use anyhow::{Context, bail};

/// Thin client for a Twilio-compatible SMS REST API. Credentials come from
/// config at startup; an unconfigured gateway fails the send, not the boot.
#[derive(Clone)]
pub struct SmsGateway {
    http: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl SmsGateway {
    pub fn new(base_url: String, account_sid: String, auth_token: String, from_number: String) -> Self {
        SmsGateway {
            http: reqwest::Client::new(),
            base_url,
            account_sid,
            auth_token,
            from_number,
        }
    }

    pub async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
        if self.account_sid.is_empty() || self.auth_token.is_empty() {
            bail!("SMS gateway credentials not configured");
        }
        if self.from_number.is_empty() {
            bail!("SMS sender number not configured");
        }

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.account_sid
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await
            .context("SMS gateway request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("SMS gateway returned {}: {}", status, detail);
        }

        Ok(())
    }
}
