
pub(crate) fn count(n: u64, noun: &str) -> String {
  match n {
    1 => format!("1 {noun}"),
    _ => format!("{n} {noun}s"),
  }
}

// Paragraph breaks come from `<p>`, every other tag is dropped.
pub(crate) fn paragraphs(html: &str) -> Vec<String> {
  html
    .split("<p>")
    .map(strip_tags)
    .map(|text| html_escape::decode_html_entities(&text).into_owned())
    .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
    .filter(|text| !text.is_empty())
    .collect()
}

fn strip_tags(html: &str) -> String {
  let mut stripped = String::with_capacity(html.len());
  let mut inside_tag = false;

  for ch in html.chars() {
    match ch {
      '<' => {
        inside_tag = true;
        stripped.push(' ');
      }
      '>' if inside_tag => inside_tag = false,
      _ if inside_tag => {}
      _ => stripped.push(ch),
    }
  }

  stripped
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  if max_chars < 3 {
    return text.chars().take(max_chars).collect();
  }

  let kept = text.chars().take(max_chars - 3).collect::<String>();

  format!("{}...", kept.trim_end())
}

pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
  let width = width.max(1);

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(std::mem::take(&mut current));
      current.push_str(word);
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  lines
}
