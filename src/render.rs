use super::*;

const INDENT: &str = "  ";

fn byline(item: &Item) -> String {
  let mut parts = vec![count(item.points, "point")];

  if let Some(author) = &item.author {
    parts.push(format!("by {author}"));
  }

  if let Some(comments) = item.num_comments {
    parts.push(count(comments, "comment"));
  }

  parts.join(" | ")
}

fn comment(lines: &mut Vec<String>, item: &Item, depth: usize, width: usize) {
  let indent = INDENT.repeat(depth);
  let body_width = width.saturating_sub(indent.len()).max(20);

  lines.push(format!(
    "{indent}{} [{}]",
    item.author.as_deref().unwrap_or("unknown"),
    item.created_at.format("%Y-%m-%d %H:%M")
  ));

  for paragraph in paragraphs(item.text.as_deref().unwrap_or_default()) {
    lines.extend(
      wrap(&paragraph, body_width)
        .into_iter()
        .map(|line| format!("{indent}{line}")),
    );
  }

  lines.push(String::new());

  for child in &item.children {
    comment(lines, child, depth + 1, width);
  }
}

pub(crate) fn listing(items: &[Item], width: usize) -> String {
  let mut lines = Vec::with_capacity(items.len() * 2);

  for (rank, item) in items.iter().enumerate() {
    let title = item.title.as_deref().unwrap_or("Untitled");

    lines.push(truncate(&format!("{:>3}. {title}", rank + 1), width));
    lines.push(truncate(
      &format!("     {} | {}", byline(item), item.resolved_url()),
      width,
    ));
  }

  lines.join("\n")
}

pub(crate) fn search_result(result: &SearchResult, width: usize) -> String {
  let header = format!(
    "page {} of {} | {} in {}ms",
    result.page,
    result.nb_pages,
    count(result.nb_hits as u64, "hit"),
    result.processing_time_ms
  );

  if result.items.is_empty() {
    return header;
  }

  format!("{header}\n\n{}", listing(&result.items, width))
}

pub(crate) fn thread(item: &Item, width: usize) -> String {
  let mut lines = vec![
    item.title.as_deref().unwrap_or("Untitled").to_string(),
    item.resolved_url(),
    byline(item),
    String::new(),
  ];

  if let Some(text) = &item.text {
    for paragraph in paragraphs(text) {
      lines.extend(wrap(&paragraph, width));
    }

    lines.push(String::new());
  }

  lines.push(count(item.comment_count() as u64, "comment"));
  lines.push(String::new());

  for child in &item.children {
    comment(&mut lines, child, 0, width);
  }

  lines.join("\n").trim_end().to_string()
}
