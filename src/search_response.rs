use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  #[serde(rename = "exhaustiveNbHits", default)]
  pub(crate) exhaustive_nb_hits: bool,
  pub(crate) hits: Vec<SearchHit>,
  #[serde(rename = "hitsPerPage", default)]
  pub(crate) hits_per_page: usize,
  #[serde(rename = "nbHits", default)]
  pub(crate) nb_hits: usize,
  #[serde(rename = "nbPages", default)]
  pub(crate) nb_pages: usize,
  #[serde(default)]
  pub(crate) page: usize,
  #[serde(default)]
  pub(crate) params: String,
  #[serde(rename = "processingTimeMS", default)]
  pub(crate) processing_time_ms: u64,
  #[serde(default)]
  pub(crate) query: String,
}

impl SearchResponse {
  pub(crate) fn into_result(self) -> Result<SearchResult> {
    let items = self
      .hits
      .iter()
      .map(SearchHit::to_item)
      .collect::<Result<Vec<Item>>>()?;

    Ok(SearchResult {
      exhaustive_nb_hits: self.exhaustive_nb_hits,
      hits: self.hits,
      hits_per_page: self.hits_per_page,
      items,
      nb_hits: self.nb_hits,
      nb_pages: self.nb_pages,
      page: self.page,
      params: self.params,
      processing_time_ms: self.processing_time_ms,
      query: self.query,
    })
  }
}
