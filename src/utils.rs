use super::*;

pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_optional_id<'de, D>(
  deserializer: D,
) -> Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(n)) => n.as_u64().map(Some).ok_or_else(|| {
      de::Error::invalid_value(
        Unexpected::Other(&n.to_string()),
        &"a non-negative integer id",
      )
    }),
    Some(Value::String(s)) => s.parse::<u64>().map(Some).map_err(|_| {
      de::Error::invalid_value(Unexpected::Str(&s), &"a numeric string id")
    }),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}
