use super::*;

/// Read-only client for the Hacker News search API.
///
/// Every operation issues exactly one GET request and gives up with
/// [`Error::Cancelled`] as soon as `cancel` fires.
#[derive(Clone, Debug)]
pub struct Client<T = reqwest::Client> {
  config: ClientConfig,
  transport: T,
}

impl Default for Client {
  fn default() -> Self {
    Self::new()
  }
}

impl Client {
  pub fn new() -> Self {
    Self::with_transport(reqwest::Client::new(), ClientConfig::default())
  }

  /// Builds a `reqwest::Client` with the configured timeout and user agent.
  pub fn with_config(config: ClientConfig) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    let transport = builder.build().map_err(|source| Error::Transport {
      source,
      url: config.base_url.clone(),
    })?;

    Ok(Self::with_transport(transport, config))
  }
}

impl<T: Transport> Client<T> {
  /// Ask HN posts, newest first.
  pub async fn ask(&self, cancel: &CancellationToken) -> Result<Vec<Item>> {
    self.listing(Listing::ASK, cancel).await
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  async fn fetch<R>(&self, path: &str, cancel: &CancellationToken) -> Result<R>
  where
    R: DeserializeOwned,
  {
    let url = self.config.url(path);

    debug!(%url, "sending request");

    let response = tokio::select! {
      biased;
      () = cancel.cancelled() => {
        return Err(Error::Cancelled { url: url.clone() });
      }
      response = self.transport.get(&url) => response?,
    };

    debug!(
      status = response.status,
      bytes = response.body.len(),
      "received response"
    );

    if !response.is_success() {
      return Err(Error::Api {
        body: response.body,
        status: response.status,
      });
    }

    Ok(serde_json::from_str(&response.body)?)
  }

  /// Looks up a single item along with its comment thread.
  ///
  /// Comments missing an author or text are dropped together with their
  /// replies, and every level of the thread is ordered oldest first.
  pub async fn find(&self, id: u64, cancel: &CancellationToken) -> Result<Item> {
    let payload = self
      .fetch::<ItemPayload>(&format!("items/{id}"), cancel)
      .await?;

    Ok(Item::from(payload))
  }

  /// Stories currently on the front page.
  pub async fn front_page(
    &self,
    cancel: &CancellationToken,
  ) -> Result<Vec<Item>> {
    self.listing(Listing::FRONT_PAGE, cancel).await
  }

  /// First page of a listing, sized by [`ClientConfig::hits_per_page`].
  pub async fn listing(
    &self,
    listing: Listing,
    cancel: &CancellationToken,
  ) -> Result<Vec<Item>> {
    let request = listing.request(self.config.hits_per_page);

    let result = match listing.endpoint {
      Endpoint::Date => self.search_recent(&request, cancel).await?,
      Endpoint::Relevance => self.search(&request, cancel).await?,
    };

    Ok(result.items)
  }

  /// Newest stories.
  pub async fn newest(&self, cancel: &CancellationToken) -> Result<Vec<Item>> {
    self.listing(Listing::NEWEST, cancel).await
  }

  async fn run_search(
    &self,
    endpoint: Endpoint,
    request: &SearchRequest,
    cancel: &CancellationToken,
  ) -> Result<SearchResult> {
    let path = format!("{}?{}", endpoint.path(), request.query_string());

    self
      .fetch::<SearchResponse>(&path, cancel)
      .await?
      .into_result()
  }

  /// Searches by relevance, then points, then number of comments.
  ///
  /// `request.page` is 1-based, and so is the page of the returned result.
  pub async fn search(
    &self,
    request: &SearchRequest,
    cancel: &CancellationToken,
  ) -> Result<SearchResult> {
    let mut result = self
      .run_search(Endpoint::Relevance, &request.to_zero_based(), cancel)
      .await?;

    result.page += 1;

    Ok(result)
  }

  /// Searches by date, most recent first.
  ///
  /// Unlike [`Client::search`], pages are sent and returned unchanged.
  pub async fn search_recent(
    &self,
    request: &SearchRequest,
    cancel: &CancellationToken,
  ) -> Result<SearchResult> {
    self.run_search(Endpoint::Date, request, cancel).await
  }

  /// Show HN posts, newest first.
  pub async fn show(&self, cancel: &CancellationToken) -> Result<Vec<Item>> {
    self.listing(Listing::SHOW, cancel).await
  }

  pub fn with_transport(transport: T, config: ClientConfig) -> Self {
    Self { config, transport }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{
      search_response::tests::{hit_with_id, response_body},
      transport::tests::MockTransport,
    },
  };

  const BASE: &str = "http://hn.test/api/v1";

  const THREAD: &str = r#"{
    "id": 1,
    "created_at": "2006-10-09T18:21:51.000Z",
    "created_at_i": 1160418111,
    "type": "story",
    "author": "pg",
    "title": "Y Combinator",
    "url": "http://ycombinator.com",
    "text": null,
    "points": 57,
    "parent_id": null,
    "story_id": 1,
    "children": [
      {
        "id": 5,
        "created_at": "2006-10-09T18:25:11.000Z",
        "created_at_i": 200,
        "type": "comment",
        "author": "sama",
        "text": "later",
        "points": null,
        "parent_id": 1,
        "story_id": 1,
        "children": []
      },
      {
        "id": 6,
        "created_at": "2006-10-09T18:23:31.000Z",
        "created_at_i": 100,
        "type": "comment",
        "author": "pg",
        "text": "earlier",
        "points": null,
        "parent_id": 1,
        "story_id": 1,
        "children": []
      },
      {
        "id": 7,
        "created_at": "2006-10-09T18:22:00.000Z",
        "created_at_i": 50,
        "type": "comment",
        "author": null,
        "text": null,
        "points": null,
        "parent_id": 1,
        "story_id": 1,
        "children": [
          {
            "id": 8,
            "created_at": "2006-10-09T18:24:00.000Z",
            "created_at_i": 150,
            "type": "comment",
            "author": "jl",
            "text": "reply to a deleted comment",
            "points": null,
            "parent_id": 7,
            "story_id": 1,
            "children": []
          }
        ]
      }
    ]
  }"#;

  fn client(transport: &MockTransport) -> Client<MockTransport> {
    Client::with_transport(
      transport.clone(),
      ClientConfig {
        base_url: BASE.to_string(),
        ..ClientConfig::default()
      },
    )
  }

  fn listing_body() -> String {
    response_body(&[&hit_with_id("10"), &hit_with_id("11")], 0)
  }

  #[tokio::test]
  async fn front_page_uses_relevance_endpoint() {
    let transport = MockTransport::ok(&listing_body());

    let items = client(&transport)
      .front_page(&CancellationToken::new())
      .await
      .unwrap();

    assert_eq!(
      items.iter().map(|item| item.id).collect::<Vec<_>>(),
      vec![10, 11]
    );

    assert!(items.iter().all(|item| item.id != 0));

    assert_eq!(
      transport.requests(),
      vec![format!("{BASE}/search?tags=front_page&hitsPerPage=34")]
    );
  }

  #[tokio::test]
  async fn date_listings_use_date_endpoint() {
    let transport = MockTransport::default()
      .respond(200, &listing_body())
      .respond(200, &listing_body())
      .respond(200, &listing_body());

    let client = client(&transport);
    let cancel = CancellationToken::new();

    client.newest(&cancel).await.unwrap();
    client.ask(&cancel).await.unwrap();
    client.show(&cancel).await.unwrap();

    assert_eq!(
      transport.requests(),
      vec![
        format!("{BASE}/search_by_date?tags=story&hitsPerPage=34"),
        format!("{BASE}/search_by_date?tags=ask_hn&hitsPerPage=34"),
        format!("{BASE}/search_by_date?tags=show_hn&hitsPerPage=34"),
      ]
    );
  }

  #[tokio::test]
  async fn listing_page_size_follows_config() {
    let transport = MockTransport::ok(&listing_body());

    let client = Client::with_transport(
      transport.clone(),
      ClientConfig {
        base_url: BASE.to_string(),
        hits_per_page: 10,
        ..ClientConfig::default()
      },
    );

    client
      .listing(Listing::NEWEST, &CancellationToken::new())
      .await
      .unwrap();

    assert_eq!(
      transport.requests(),
      vec![format!("{BASE}/search_by_date?tags=story&hitsPerPage=10")]
    );
  }

  #[tokio::test]
  async fn relevance_search_pages_from_one() {
    let transport =
      MockTransport::ok(&response_body(&[&hit_with_id("1")], 1));

    let result = client(&transport)
      .search(&SearchRequest::new().page(2), &CancellationToken::new())
      .await
      .unwrap();

    assert_eq!(transport.requests(), vec![format!("{BASE}/search?page=1")]);
    assert_eq!(result.page, 2);
  }

  #[tokio::test]
  async fn date_search_passes_page_through() {
    let transport =
      MockTransport::ok(&response_body(&[&hit_with_id("1")], 1));

    let result = client(&transport)
      .search_recent(&SearchRequest::new().page(1), &CancellationToken::new())
      .await
      .unwrap();

    assert_eq!(
      transport.requests(),
      vec![format!("{BASE}/search_by_date?page=1")]
    );
    assert_eq!(result.page, 1);
  }

  #[tokio::test]
  async fn search_encodes_numeric_filters() {
    let transport = MockTransport::ok(&response_body(&[], 0));

    client(&transport)
      .search_recent(
        &SearchRequest::new().points("> 500"),
        &CancellationToken::new(),
      )
      .await
      .unwrap();

    assert_eq!(
      transport.requests(),
      vec![format!("{BASE}/search_by_date?numericFilters=points%3E+500")]
    );
  }

  #[tokio::test]
  async fn find_reconstructs_thread() {
    let transport = MockTransport::ok(THREAD);

    let item = client(&transport)
      .find(1, &CancellationToken::new())
      .await
      .unwrap();

    assert_eq!(transport.requests(), vec![format!("{BASE}/items/1")]);

    assert_eq!(item.title.as_deref(), Some("Y Combinator"));
    assert_eq!(item.kind, Some(ItemKind::Story));
    assert!(item.text.is_none());

    assert_eq!(
      item.children.iter().map(|child| child.id).collect::<Vec<_>>(),
      vec![6, 5]
    );

    assert_eq!(item.comment_count(), 2);
  }

  #[tokio::test]
  async fn non_success_status_is_api_error() {
    let transport = MockTransport::default().respond(404, "no such item");

    let error = client(&transport)
      .find(999, &CancellationToken::new())
      .await
      .unwrap_err();

    match error {
      Error::Api { body, status } => {
        assert_eq!(status, 404);
        assert_eq!(body, "no such item");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn server_errors_on_search_are_api_errors() {
    let transport = MockTransport::default().respond(503, "busy");

    let error = client(&transport)
      .front_page(&CancellationToken::new())
      .await
      .unwrap_err();

    assert_eq!(error.status(), Some(503));
  }

  #[tokio::test]
  async fn malformed_json_is_decode_error() {
    let transport = MockTransport::ok("{not json");

    let error = client(&transport)
      .find(1, &CancellationToken::new())
      .await
      .unwrap_err();

    assert!(matches!(error, Error::Decode(_)));
  }

  #[tokio::test]
  async fn bad_object_id_is_conversion_error() {
    let transport = MockTransport::ok(&response_body(
      &[&hit_with_id("1"), &hit_with_id("abc")],
      0,
    ));

    let error = client(&transport)
      .search(&SearchRequest::new(), &CancellationToken::new())
      .await
      .unwrap_err();

    assert!(matches!(error, Error::Conversion { .. }));
  }

  #[tokio::test]
  async fn cancelled_token_aborts_request() {
    let transport = MockTransport::default();

    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = client(&transport).newest(&cancel).await.unwrap_err();

    assert!(matches!(error, Error::Cancelled { .. }));
    assert!(error.is_transport());
  }

  #[tokio::test]
  async fn cancellation_interrupts_pending_request() {
    let transport = MockTransport::default();

    let client = client(&transport);
    let cancel = CancellationToken::new();

    let canceller = {
      let cancel = cancel.clone();
      tokio::spawn(async move { cancel.cancel() })
    };

    let error = client.find(1, &cancel).await.unwrap_err();

    canceller.await.unwrap();

    assert!(matches!(error, Error::Cancelled { .. }));
  }

  #[tokio::test]
  async fn unreachable_host_is_transport_error() {
    let client = Client::with_transport(
      reqwest::Client::builder().no_proxy().build().unwrap(),
      ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ClientConfig::default()
      },
    );

    let error = client.find(1, &CancellationToken::new()).await.unwrap_err();

    assert!(matches!(error, Error::Transport { .. }));
  }
}
