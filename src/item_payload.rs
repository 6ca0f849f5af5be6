use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ItemPayload {
  pub(crate) author: Option<String>,
  #[serde(default)]
  pub(crate) children: Vec<ItemPayload>,
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) created_at_i: i64,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) num_comments: Option<u64>,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub(crate) parent_id: Option<u64>,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) points: u64,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub(crate) story_id: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) title: Option<String>,
  #[serde(rename = "type")]
  pub(crate) r#type: Option<ItemKind>,
  pub(crate) url: Option<String>,
}

impl ItemPayload {
  pub(crate) fn is_well_formed(&self) -> bool {
    self.author.is_some() && self.text.is_some()
  }
}

impl From<ItemPayload> for Item {
  fn from(payload: ItemPayload) -> Self {
    Self {
      author: payload.author,
      children: comment_thread::reconstruct(payload.children),
      created_at: payload.created_at,
      created_at_i: payload.created_at_i,
      id: payload.id,
      kind: payload.r#type,
      num_comments: payload.num_comments,
      parent_id: payload.parent_id,
      points: payload.points,
      story_id: payload.story_id,
      text: payload.text,
      title: payload.title,
      url: payload.url,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_item_with_nullable_fields() {
    let payload = serde_json::from_str::<ItemPayload>(
      r#"{
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
        "children": []
      }"#,
    )
    .unwrap();

    assert_eq!(payload.id, 1);
    assert_eq!(payload.r#type, Some(ItemKind::Story));
    assert_eq!(payload.title.as_deref(), Some("Y Combinator"));
    assert_eq!(payload.points, 57);
    assert_eq!(payload.story_id, Some(1));
    assert_eq!(payload.parent_id, None);
    assert!(payload.text.is_none());
    assert!(payload.num_comments.is_none());
  }

  #[test]
  fn null_points_decode_as_zero() {
    let payload = serde_json::from_str::<ItemPayload>(
      r#"{
        "id": 15,
        "created_at": "2006-10-09T19:51:01.000Z",
        "created_at_i": 1160423461,
        "type": "comment",
        "author": "sama",
        "text": "hello",
        "points": null,
        "parent_id": 1,
        "story_id": 1
      }"#,
    )
    .unwrap();

    assert_eq!(payload.points, 0);
    assert!(payload.children.is_empty());
    assert!(payload.is_well_formed());
  }

  #[test]
  fn empty_text_is_still_well_formed() {
    let payload = serde_json::from_str::<ItemPayload>(
      r#"{
        "id": 16,
        "created_at": "2006-10-09T19:51:01.000Z",
        "created_at_i": 1160423461,
        "author": "sama",
        "text": ""
      }"#,
    )
    .unwrap();

    assert!(payload.is_well_formed());
  }
}
