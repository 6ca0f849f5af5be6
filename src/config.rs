use super::*;

#[derive(Clone, Debug)]
pub struct ClientConfig {
  pub base_url: String,
  /// Page size used by the front page, newest, ask, and show listings.
  pub hits_per_page: usize,
  pub timeout: Option<Duration>,
  pub user_agent: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: Self::DEFAULT_BASE_URL.to_string(),
      hits_per_page: Self::DEFAULT_HITS_PER_PAGE,
      timeout: None,
      user_agent: format!("hn-algolia/{}", env!("CARGO_PKG_VERSION")),
    }
  }
}

impl ClientConfig {
  pub const BASE_URL_VAR: &str = "HN_API_BASE_URL";

  pub const DEFAULT_BASE_URL: &str = "http://hn.algolia.com/api/v1";

  pub const DEFAULT_HITS_PER_PAGE: usize = 34;

  pub const HITS_PER_PAGE_VAR: &str = "HN_HITS_PER_PAGE";

  pub const TIMEOUT_VAR: &str = "HN_TIMEOUT_SECS";

  /// Defaults, overridden by `HN_API_BASE_URL`, `HN_HITS_PER_PAGE`, and
  /// `HN_TIMEOUT_SECS` when they are set.
  pub fn from_env() -> Result<Self> {
    let mut config = Self::default();

    if let Ok(base_url) = env::var(Self::BASE_URL_VAR) {
      config.base_url = base_url;
    }

    if let Ok(value) = env::var(Self::HITS_PER_PAGE_VAR) {
      config.hits_per_page = Self::parse_var(Self::HITS_PER_PAGE_VAR, value)?;
    }

    if let Ok(value) = env::var(Self::TIMEOUT_VAR) {
      config.timeout = Some(Duration::from_secs(Self::parse_var(
        Self::TIMEOUT_VAR,
        value,
      )?));
    }

    Ok(config)
  }

  fn parse_var<T>(key: &'static str, value: String) -> Result<T>
  where
    T: std::str::FromStr<Err = ParseIntError>,
  {
    value
      .trim()
      .parse::<T>()
      .map_err(|source| Error::Config { key, source, value })
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}/{path}", self.base_url.trim_end_matches('/'))
  }
}
