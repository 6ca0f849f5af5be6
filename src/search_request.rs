use super::*;

/// Query and filters for the search endpoints.
///
/// Empty strings and zero counts are left out of the request, so the
/// server defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRequest {
  /// Filter on creation time, as epoch seconds. Clauses are comma
  /// separated, e.g. `">1700000000,<1700086400"`.
  pub created_at: String,
  /// Filter on comment count, e.g. `"> 10"` or `"num_comments > 10"`.
  pub num_comments: String,
  /// Page number. 1-based for [`Client::search`], passed through unchanged
  /// by [`Client::search_recent`].
  pub page: usize,
  /// Filter on points, e.g. `"> 500"` or `"points > 500"`.
  pub points: String,
  /// Full-text query.
  pub query: String,
  /// Number of hits per page.
  pub results_per_page: usize,
  /// Tag filter expression.
  ///
  /// Available tags are `story`, `comment`, `poll`, `pollopt`, `show_hn`,
  /// `ask_hn`, `front_page`, `author_:USERNAME` and `story_:ID`. Tags are
  /// ANDed by default and ORed inside parentheses, so `author_pg,(story,poll)`
  /// means `author=pg AND (type=story OR type=poll)`.
  pub tags: String,
}

impl SearchRequest {
  const CREATED_AT_KEY: &str = "created_at_i";

  const NUM_COMMENTS_KEY: &str = "num_comments";

  const POINTS_KEY: &str = "points";

  pub fn created_at(mut self, filter: impl Into<String>) -> Self {
    self.created_at = filter.into();
    self
  }

  /// Prepends `key` to every clause that does not already start with it,
  /// so `"> 500"` and `"points > 500"` mean the same thing.
  fn inject_key(filter: &str, key: &str) -> String {
    filter
      .split(',')
      .map(str::trim)
      .map(|clause| {
        if clause.starts_with(key) {
          clause.to_string()
        } else {
          format!("{key}{clause}")
        }
      })
      .collect::<Vec<String>>()
      .join(",")
  }

  pub fn new() -> Self {
    Self::default()
  }

  pub fn num_comments(mut self, filter: impl Into<String>) -> Self {
    self.num_comments = filter.into();
    self
  }

  pub(crate) fn numeric_filters(&self) -> Option<String> {
    let filters = [
      (&self.points, Self::POINTS_KEY),
      (&self.created_at, Self::CREATED_AT_KEY),
      (&self.num_comments, Self::NUM_COMMENTS_KEY),
    ]
    .into_iter()
    .filter(|(filter, _)| !filter.is_empty())
    .map(|(filter, key)| Self::inject_key(filter, key))
    .collect::<Vec<String>>();

    (!filters.is_empty()).then(|| filters.join(","))
  }

  pub fn page(mut self, page: usize) -> Self {
    self.page = page;
    self
  }

  pub fn points(mut self, filter: impl Into<String>) -> Self {
    self.points = filter.into();
    self
  }

  pub fn query(mut self, query: impl Into<String>) -> Self {
    self.query = query.into();
    self
  }

  /// Encodes the request as a URL query string.
  pub fn query_string(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !self.query.is_empty() {
      serializer.append_pair("query", &self.query);
    }

    if !self.tags.is_empty() {
      serializer.append_pair("tags", &self.tags);
    }

    if self.page > 0 {
      serializer.append_pair("page", &self.page.to_string());
    }

    if let Some(filters) = self.numeric_filters() {
      serializer.append_pair("numericFilters", &filters);
    }

    if self.results_per_page > 0 {
      serializer
        .append_pair("hitsPerPage", &self.results_per_page.to_string());
    }

    serializer.finish()
  }

  pub fn results_per_page(mut self, results_per_page: usize) -> Self {
    self.results_per_page = results_per_page;
    self
  }

  pub fn tags(mut self, tags: impl Into<String>) -> Self {
    self.tags = tags.into();
    self
  }

  /// The relevance endpoint pages from zero while callers page from one.
  pub(crate) fn to_zero_based(&self) -> Self {
    Self {
      page: self.page.saturating_sub(1),
      ..self.clone()
    }
  }
}
