use super::*;

/// Which search endpoint a request goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
  Date,
  Relevance,
}

impl Endpoint {
  pub fn path(self) -> &'static str {
    match self {
      Self::Date => "search_by_date",
      Self::Relevance => "search",
    }
  }
}

/// One of the fixed feeds shown on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listing {
  pub endpoint: Endpoint,
  pub label: &'static str,
  pub tags: &'static str,
}

impl Listing {
  pub const ASK: Self = Self {
    endpoint: Endpoint::Date,
    label: "ask",
    tags: "ask_hn",
  };

  pub const FRONT_PAGE: Self = Self {
    endpoint: Endpoint::Relevance,
    label: "front",
    tags: "front_page",
  };

  pub const NEWEST: Self = Self {
    endpoint: Endpoint::Date,
    label: "newest",
    tags: "story",
  };

  pub const SHOW: Self = Self {
    endpoint: Endpoint::Date,
    label: "show",
    tags: "show_hn",
  };

  pub fn all() -> &'static [Listing] {
    &[Self::FRONT_PAGE, Self::NEWEST, Self::ASK, Self::SHOW]
  }

  pub(crate) fn request(self, results_per_page: usize) -> SearchRequest {
    SearchRequest::new()
      .tags(self.tags)
      .results_per_page(results_per_page)
  }
}
