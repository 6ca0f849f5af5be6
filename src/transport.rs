use super::*;

/// Status and body of a completed GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
  pub body: String,
  pub status: u16,
}

impl RawResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Performs HTTP GET requests on behalf of a [`Client`].
///
/// Implementations must be safe to share between concurrent calls. Dropping
/// the returned future must abort the request.
pub trait Transport {
  fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send;
}

impl Transport for reqwest::Client {
  async fn get(&self, url: &str) -> Result<RawResponse> {
    let transport_error = |source| Error::Transport {
      source,
      url: url.to_string(),
    };

    let response = reqwest::Client::get(self, url)
      .send()
      .await
      .map_err(transport_error)?;

    let status = response.status().as_u16();

    let body = response.text().await.map_err(transport_error)?;

    Ok(RawResponse { body, status })
  }
}
