use super::*;

/// Normalized items for one page of search results, with paging metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
  /// Whether `nb_hits` is an exact count.
  pub exhaustive_nb_hits: bool,
  /// The raw hits, including tags and highlights.
  pub hits: Vec<SearchHit>,
  pub hits_per_page: usize,
  /// One item per hit, in the same order.
  pub items: Vec<Item>,
  pub nb_hits: usize,
  pub nb_pages: usize,
  pub page: usize,
  pub params: String,
  pub processing_time_ms: u64,
  pub query: String,
}
