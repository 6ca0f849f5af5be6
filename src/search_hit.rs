use super::*;

/// A single search result, exactly as the search endpoints return it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchHit {
  pub author: Option<String>,
  #[serde(default)]
  pub children: Vec<u64>,
  pub comment_text: Option<String>,
  pub created_at: DateTime<Utc>,
  pub created_at_i: i64,
  #[serde(rename = "_highlightResult", default)]
  pub highlights: Highlights,
  pub num_comments: Option<u64>,
  #[serde(rename = "objectID")]
  pub object_id: String,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub parent_id: Option<u64>,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub points: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub relevancy_score: Option<i64>,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub story_id: Option<u64>,
  pub story_text: Option<String>,
  pub story_title: Option<String>,
  pub story_url: Option<String>,
  #[serde(rename = "_tags", default)]
  pub tags: Vec<String>,
  pub title: Option<String>,
  pub url: Option<String>,
}

/// The words of a field that matched the query.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
  #[serde(default)]
  pub match_level: String,
  #[serde(default)]
  pub matched_words: Vec<String>,
  #[serde(default)]
  pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Highlights {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<Highlight>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub story_text: Option<Highlight>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<Highlight>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<Highlight>,
}

impl SearchHit {
  /// Converts the hit into an [`Item`] without text or children.
  pub fn to_item(&self) -> Result<Item> {
    let id = self
      .object_id
      .parse::<u64>()
      .map_err(|source| Error::Conversion {
        object_id: self.object_id.clone(),
        source,
      })?;

    Ok(Item {
      author: self.author.clone(),
      children: Vec::new(),
      created_at: self.created_at,
      created_at_i: self.created_at_i,
      id,
      kind: None,
      num_comments: self.num_comments,
      parent_id: self.parent_id,
      points: self.points,
      story_id: self.story_id,
      text: None,
      title: self.title.clone(),
      url: self.url.clone(),
    })
  }
}
