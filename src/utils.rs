use {
  super::*,
  chrono::{Local, TimeZone},
};

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
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

pub(crate) fn sanitize_comment(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;
  let mut last_was_space = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;

        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_whitespace() => {
        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      _ => {
        cleaned.push(ch);
        last_was_space = false;
      }
    }
  }

  let decoded = html_escape::decode_html_entities(cleaned.trim());

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((end, _)) => format!("{}...", text[..end].trim_end()),
    None => text.to_string(),
  }
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines: Vec<String> = Vec::new();

  for word in text.split_whitespace() {
    if let Some(line) = lines.last_mut()
      && line.chars().count() + 1 + word.chars().count() <= width
    {
      line.push(' ');
      line.push_str(word);
    } else {
      lines.push(word.to_string());
    }
  }

  lines
}

pub(crate) fn format_date(timestamp_millis: i64) -> String {
  Local
    .timestamp_millis_opt(timestamp_millis)
    .single()
    .map_or_else(
      || "unknown date".to_string(),
      |date| date.format("%Y-%m-%d").to_string(),
    )
}
