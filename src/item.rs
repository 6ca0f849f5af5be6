use super::*;

/// A story, comment, poll, poll option, or job.
///
/// Items built from search hits never have children or text. Items returned
/// by [`Client::find`] carry their reconstructed comment thread.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
  pub author: Option<String>,
  pub children: Vec<Item>,
  pub created_at: DateTime<Utc>,
  pub created_at_i: i64,
  pub id: u64,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<ItemKind>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub num_comments: Option<u64>,
  pub parent_id: Option<u64>,
  pub points: u64,
  pub story_id: Option<u64>,
  pub text: Option<String>,
  pub title: Option<String>,
  pub url: Option<String>,
}

impl Item {
  /// Number of comments in the reconstructed thread, at every depth.
  pub fn comment_count(&self) -> usize {
    self
      .children
      .iter()
      .map(|child| 1 + child.comment_count())
      .sum()
  }

  pub fn permalink(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }

  pub fn resolved_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| self.permalink())
  }
}
