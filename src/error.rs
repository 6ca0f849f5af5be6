use super::*;

/// Everything that can go wrong while talking to the search API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("unexpected status {status}: {body}")]
  Api { body: String, status: u16 },
  #[error("request to {url} was cancelled")]
  Cancelled { url: String },
  #[error("invalid value `{value}` for {key}")]
  Config {
    key: &'static str,
    #[source]
    source: ParseIntError,
    value: String,
  },
  #[error("failed to convert hit object id `{object_id}` to an integer")]
  Conversion {
    object_id: String,
    #[source]
    source: ParseIntError,
  },
  #[error("failed to decode response body")]
  Decode(#[from] serde_json::Error),
  #[error("request to {url} failed")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },
}

impl Error {
  /// True for failures that happened before a response was received,
  /// including cancellation.
  pub fn is_transport(&self) -> bool {
    matches!(self, Self::Cancelled { .. } | Self::Transport { .. })
  }

  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Api { status, .. } => Some(*status),
      _ => None,
    }
  }
}
