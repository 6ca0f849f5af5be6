use super::*;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Output {
  pub(crate) json: bool,
  pub(crate) width: usize,
}

impl Output {
  fn print<T: Serialize>(
    self,
    value: &T,
    text: impl FnOnce(usize) -> String,
  ) -> anyhow::Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(value)?);
    } else {
      println!("{}", text(self.width));
    }

    Ok(())
  }
}

#[derive(Debug, clap::Args)]
pub(crate) struct SearchArguments {
  /// Creation time filter in epoch seconds, e.g. ">1700000000"
  #[arg(long, value_name = "FILTER")]
  created_at: Option<String>,
  /// Comment count filter, e.g. ">10"
  #[arg(long, value_name = "FILTER")]
  num_comments: Option<String>,
  /// Result page, starting from 1
  #[arg(long, default_value_t = 1)]
  page: usize,
  /// Points filter, e.g. "> 500"
  #[arg(long, value_name = "FILTER")]
  points: Option<String>,
  query: String,
  /// Sort by date instead of relevance
  #[arg(long)]
  recent: bool,
  #[arg(long, value_name = "TAGS")]
  tags: Option<String>,
}

impl SearchArguments {
  // `--page` counts from 1 on both endpoints. Relevance search shifts it
  // itself, date search sends the page as given.
  fn request(&self, results_per_page: usize) -> SearchRequest {
    SearchRequest {
      created_at: self.created_at.clone().unwrap_or_default(),
      num_comments: self.num_comments.clone().unwrap_or_default(),
      page: if self.recent {
        self.page.saturating_sub(1)
      } else {
        self.page
      },
      points: self.points.clone().unwrap_or_default(),
      query: self.query.clone(),
      results_per_page,
      tags: self.tags.clone().unwrap_or_default(),
    }
  }
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Latest Ask HN posts
  Ask,
  /// Stories on the front page
  Front,
  /// An item and its comment thread
  Item { id: u64 },
  /// Newest stories
  Newest,
  /// Search stories and comments
  Search(SearchArguments),
  /// Latest Show HN posts
  Show,
}

impl Subcommand {
  async fn print_listing(
    client: &Client,
    listing: Listing,
    cancel: &CancellationToken,
    output: Output,
  ) -> anyhow::Result<()> {
    let items = client
      .listing(listing, cancel)
      .await
      .with_context(|| format!("failed to load {} stories", listing.label))?;

    output.print(&items, |width| render::listing(&items, width))
  }

  pub(crate) async fn run(
    self,
    client: &Client,
    cancel: &CancellationToken,
    output: Output,
  ) -> anyhow::Result<()> {
    match self {
      Self::Ask => Self::print_listing(client, Listing::ASK, cancel, output).await,
      Self::Front => {
        Self::print_listing(client, Listing::FRONT_PAGE, cancel, output).await
      }
      Self::Item { id } => {
        let item = client
          .find(id, cancel)
          .await
          .with_context(|| format!("failed to load item {id}"))?;

        output.print(&item, |width| render::thread(&item, width))
      }
      Self::Newest => {
        Self::print_listing(client, Listing::NEWEST, cancel, output).await
      }
      Self::Search(arguments) => {
        let request = arguments.request(client.config().hits_per_page);

        let result = if arguments.recent {
          client.search_recent(&request, cancel).await
        } else {
          client.search(&request, cancel).await
        };

        let result = result.with_context(|| {
          format!("failed to search for \"{}\"", request.query)
        })?;

        output.print(&result, |width| render::search_result(&result, width))
      }
      Self::Show => Self::print_listing(client, Listing::SHOW, cancel, output).await,
    }
  }
}
