//! reqwest-backed production gateway.

use async_trait::async_trait;
use url::Url;

use crate::error::{GatewayError, Result};
use crate::payload::FormPayload;
use crate::remote::FeedGateway;
use crate::wire::{FormResponse, PageFragment};

/// HTTP adapter over [`reqwest`].
///
/// GETs decode the fragment JSON body; POSTs send the payload form-encoded
/// and decode the response leniently. No retries, no timeout beyond what
/// the supplied client is configured with.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
	client: reqwest::Client,
}

impl HttpGateway {
	/// Creates a gateway with a default client.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a gateway over a caller-configured client (timeouts,
	/// proxies, cookies).
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl From<reqwest::Error> for GatewayError {
	fn from(err: reqwest::Error) -> Self {
		GatewayError::Transport(err.to_string())
	}
}

#[async_trait]
impl FeedGateway for HttpGateway {
	async fn fetch_fragment(&self, url: &Url) -> Result<PageFragment> {
		let response = self.client.get(url.clone()).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(GatewayError::Status(status.as_u16()));
		}
		let raw = response.text().await?;
		PageFragment::decode(raw)
	}

	async fn submit_form(&self, action: &Url, payload: &FormPayload) -> Result<FormResponse> {
		let response = self
			.client
			.post(action.clone())
			.form(payload.pairs())
			.send()
			.await?;
		let status = response.status().as_u16();
		let raw = response.text().await?;
		Ok(FormResponse::decode(status, &raw))
	}
}
