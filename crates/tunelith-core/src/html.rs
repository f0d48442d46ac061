//! Minimal HTML escaping for user-supplied text.

/// Escape `s` for inclusion in HTML text or a double-quoted attribute.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

/// Escape `s` and turn line breaks into `<br>` elements.
pub fn escape_multiline(s: &str) -> String {
  s.lines().map(escape).collect::<Vec<_>>().join("<br>\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_markup() {
    assert_eq!(
      escape(r#"<b>"Tom" & 'Jerry'</b>"#),
      "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
  }

  #[test]
  fn multiline_keeps_breaks() {
    assert_eq!(escape_multiline("a<\r\nb"), "a&lt;<br>\nb");
  }
}
