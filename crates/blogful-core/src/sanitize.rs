//! Whitelist-based HTML sanitization for user-supplied text.
//!
//! Free-text fields are stored verbatim and cleaned on the way out.
//! Tags outside the whitelist get their angle brackets escaped, leaving
//! the text between them readable; whitelisted tags are rebuilt carrying
//! only the attributes allowed for them, so event handlers and script
//! scheme URLs never survive.

/// Tags that survive sanitization, with the attributes each may carry.
static ALLOWED_TAGS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target"]),
    ("abbr", &["title"]),
    ("b", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("code", &[]),
    ("em", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("hr", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("li", &[]),
    ("ol", &[]),
    ("p", &[]),
    ("pre", &[]),
    ("small", &[]),
    ("strong", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("ul", &[]),
];

/// Attributes whose values are URLs and must pass [`is_safe_url`].
static URL_ATTRS: &[&str] = &["href", "src", "cite"];

fn allowed_attrs(tag: &str) -> Option<&'static [&'static str]> {
    ALLOWED_TAGS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attrs)| *attrs)
}

/// Validate URLs and allow only safe protocols.
///
/// Allows relative paths (`/path`, `./path`), anchor links (`#section`),
/// and safe protocols. Rejects `javascript:`, `data:` and anything else
/// that could execute.
fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();

    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with('#') {
        return true;
    }

    let lower = trimmed.to_lowercase();
    ["http://", "https://", "mailto:", "ftp://", "ftps://"]
        .iter()
        .any(|protocol| lower.starts_with(protocol))
}

/// A tag parsed out of the input, spanning `< .. >`.
struct ParsedTag {
    /// Lowercased element name.
    name: String,
    closing: bool,
    self_closing: bool,
    /// Attributes in source order; `None` value for bare attributes.
    attrs: Vec<(String, Option<String>)>,
    /// Everything between the angle brackets, verbatim.
    inner: String,
    /// Index just past the closing `>`.
    end: usize,
}

enum Chunk {
    Tag(Box<ParsedTag>),
    Comment { end: usize },
}

/// Sanitize user-supplied text for inclusion in a JSON response.
///
/// # Examples
///
/// ```
/// use blogful_core::sanitize::clean_html;
///
/// assert_eq!(
///     clean_html("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// assert_eq!(clean_html("<strong>fine</strong>"), "<strong>fine</strong>");
/// ```
pub fn clean_html(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < len {
        match chars[i] {
            '<' => match parse_chunk(&chars, i) {
                Some(Chunk::Comment { end }) => i = end,
                Some(Chunk::Tag(tag)) => {
                    emit_tag(&mut out, &tag);
                    i = tag.end;
                }
                // Not a tag at all: neutralise the bracket and move on.
                None => {
                    out.push_str("&lt;");
                    i += 1;
                }
            },
            '>' => {
                out.push_str("&gt;");
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Parse the construct starting at `chars[start] == '<'`.
///
/// Returns `None` for malformed constructs (no tag name, unterminated
/// tag or quote); the caller then escapes the lone `<` and resumes one
/// character later, so no input is ever swallowed silently.
fn parse_chunk(chars: &[char], start: usize) -> Option<Chunk> {
    let len = chars.len();
    let mut i = start + 1;

    // HTML comments are dropped wholesale.
    if chars[i..].starts_with(&['!', '-', '-']) {
        i += 3;
        while i + 2 < len {
            if chars[i] == '-' && chars[i + 1] == '-' && chars[i + 2] == '>' {
                return Some(Chunk::Comment { end: i + 3 });
            }
            i += 1;
        }
        // Unclosed comment: everything to the end is comment.
        return Some(Chunk::Comment { end: len });
    }

    let closing = if i < len && chars[i] == '/' {
        i += 1;
        true
    } else {
        false
    };

    let name_start = i;
    while i < len && chars[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = chars[name_start..i]
        .iter()
        .collect::<String>()
        .to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while i < len && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= len {
            return None;
        }
        match chars[i] {
            '>' => {
                i += 1;
                break;
            }
            '/' => {
                self_closing = true;
                i += 1;
            }
            _ => {
                let attr_start = i;
                while i < len && !chars[i].is_whitespace() && !matches!(chars[i], '=' | '>' | '/') {
                    i += 1;
                }
                let attr_name = chars[attr_start..i]
                    .iter()
                    .collect::<String>()
                    .to_ascii_lowercase();

                while i < len && chars[i].is_whitespace() {
                    i += 1;
                }
                let value = if i < len && chars[i] == '=' {
                    i += 1;
                    while i < len && chars[i].is_whitespace() {
                        i += 1;
                    }
                    if i >= len {
                        return None;
                    }
                    if chars[i] == '"' || chars[i] == '\'' {
                        let quote = chars[i];
                        i += 1;
                        let value_start = i;
                        while i < len && chars[i] != quote {
                            i += 1;
                        }
                        if i >= len {
                            return None;
                        }
                        let value: String = chars[value_start..i].iter().collect();
                        i += 1;
                        Some(value)
                    } else {
                        let value_start = i;
                        while i < len && !chars[i].is_whitespace() && chars[i] != '>' {
                            i += 1;
                        }
                        Some(chars[value_start..i].iter().collect())
                    }
                } else {
                    None
                };

                if !attr_name.is_empty() {
                    attrs.push((attr_name, value));
                }
            }
        }
    }

    let inner: String = chars[start + 1..i - 1].iter().collect();

    Some(Chunk::Tag(Box::new(ParsedTag {
        name,
        closing,
        self_closing,
        attrs,
        inner,
        end: i,
    })))
}

fn emit_tag(out: &mut String, tag: &ParsedTag) {
    let Some(allowed) = allowed_attrs(&tag.name) else {
        // Outside the whitelist: escape the delimiters, keep the text.
        out.push_str("&lt;");
        out.push_str(&tag.inner.replace('<', "&lt;").replace('>', "&gt;"));
        out.push_str("&gt;");
        return;
    };

    if tag.closing {
        out.push_str("</");
        out.push_str(&tag.name);
        out.push('>');
        return;
    }

    out.push('<');
    out.push_str(&tag.name);
    for (name, value) in &tag.attrs {
        if !allowed.contains(&name.as_str()) {
            continue;
        }
        if URL_ATTRS.contains(&name.as_str()) {
            match value {
                Some(url) if is_safe_url(url) => {}
                _ => continue,
            }
        }
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
    }
    if tag.self_closing {
        out.push_str(" /");
    }
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_script_tags() {
        assert_eq!(
            clean_html(r#"Naughty naughty very naughty <script>alert("xss");</script>"#),
            r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
    }

    #[test]
    fn drops_event_handler_attributes() {
        let input = r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#;
        assert_eq!(
            clean_html(input),
            r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#
        );
    }

    #[test]
    fn keeps_benign_markup() {
        assert_eq!(
            clean_html("<p>Hello <em>world</em></p>"),
            "<p>Hello <em>world</em></p>"
        );
    }

    #[test]
    fn keeps_safe_links() {
        assert_eq!(
            clean_html(r#"<a href="https://example.com" target="_blank">link</a>"#),
            r#"<a href="https://example.com" target="_blank">link</a>"#
        );
    }

    #[test]
    fn drops_script_scheme_urls() {
        assert_eq!(
            clean_html(r#"<a href="javascript:alert(1)">click</a>"#),
            "<a>click</a>"
        );
        assert_eq!(
            clean_html(r#"<img src="data:text/html;base64,PHNjcmlwdD4=">"#),
            "<img>"
        );
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(
            clean_html("Lorem ipsum dolor sit amet."),
            "Lorem ipsum dolor sit amet."
        );
    }

    #[test]
    fn escapes_stray_angle_brackets() {
        assert_eq!(clean_html("2 < 3 and 5 > 4"), "2 &lt; 3 and 5 &gt; 4");
    }

    #[test]
    fn strips_html_comments() {
        assert_eq!(clean_html("before<!-- hidden -->after"), "beforeafter");
        assert_eq!(clean_html("before<!-- unclosed"), "before");
    }

    #[test]
    fn escapes_unterminated_tags() {
        assert_eq!(clean_html("oops <img src="), "oops &lt;img src=");
        assert_eq!(clean_html("dangling <"), "dangling &lt;");
    }

    #[test]
    fn normalises_tag_case() {
        assert_eq!(clean_html("<STRONG>loud</STRONG>"), "<strong>loud</strong>");
    }

    #[test]
    fn rebuilds_self_closing_tags() {
        assert_eq!(clean_html("a<br/>b"), "a<br />b");
    }

    #[test]
    fn escapes_quotes_in_kept_attribute_values() {
        assert_eq!(
            clean_html(r#"<img alt='say "hi"' src="/pic.png">"#),
            r#"<img alt="say &quot;hi&quot;" src="/pic.png">"#
        );
    }
}
