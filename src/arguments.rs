use super::*;

#[derive(Debug, Parser)]
#[command(name = "hn", version, about = "Read Hacker News through the Algolia search API")]
pub(crate) struct Arguments {
  /// API base URL [env: HN_API_BASE_URL]
  #[arg(long, value_name = "URL")]
  base_url: Option<String>,
  /// Stories per listing [env: HN_HITS_PER_PAGE]
  #[arg(long, value_name = "COUNT")]
  hits_per_page: Option<usize>,
  /// Print JSON instead of text
  #[arg(long)]
  json: bool,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
  /// Request timeout [env: HN_TIMEOUT_SECS]
  #[arg(long, value_name = "SECONDS")]
  timeout: Option<u64>,
  /// Log requests to stderr
  #[arg(long, short)]
  verbose: bool,
  /// Text output width
  #[arg(long, default_value_t = 80)]
  width: usize,
}

impl Arguments {
  fn config(&self) -> anyhow::Result<ClientConfig> {
    let mut config =
      ClientConfig::from_env().context("invalid client environment")?;

    if let Some(base_url) = &self.base_url {
      config.base_url.clone_from(base_url);
    }

    if let Some(hits_per_page) = self.hits_per_page {
      config.hits_per_page = hits_per_page;
    }

    if let Some(timeout) = self.timeout {
      config.timeout = Some(Duration::from_secs(timeout));
    }

    Ok(config)
  }

  pub(crate) fn log_level(&self) -> &'static str {
    if self.verbose { "debug" } else { "warn" }
  }

  pub(crate) async fn run(self) -> anyhow::Result<()> {
    let client = Client::with_config(self.config()?)
      .context("could not build HTTP client")?;

    let output = Output {
      json: self.json,
      width: self.width,
    };

    self
      .subcommand
      .run(&client, &CancellationToken::new(), output)
      .await
  }
}
