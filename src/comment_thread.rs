use super::*;

pub(crate) fn reconstruct(children: Vec<ItemPayload>) -> Vec<Item> {
  let received = children.len();

  let mut thread = children
    .into_iter()
    .filter(ItemPayload::is_well_formed)
    .map(Item::from)
    .collect::<Vec<Item>>();

  if thread.len() < received {
    trace!(
      dropped = received - thread.len(),
      kept = thread.len(),
      "discarded malformed comments"
    );
  }

  thread.sort_by_key(|item| item.created_at_i);

  thread
}
