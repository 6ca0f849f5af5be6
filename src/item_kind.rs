use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
  Comment,
  Job,
  Poll,
  Pollopt,
  Story,
  #[serde(other)]
  Unknown,
}
