//! Minimal RSS `<item>` extraction by string scanning.
//!
//! Feed XML arrives as an opaque string inside the proxy envelope; the handful
//! of fields we need (`title`, `link`, `pubDate`) are pulled out directly
//! rather than through a full XML parse.

/// Raw fields of one `<item>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawItem {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) pub_date: Option<String>,
}

/// Scan the document for `<item>` blocks and extract their fields.
/// Items missing a title or link are skipped.
pub(crate) fn extract_items(xml: &str) -> Vec<RawItem> {
    let mut res = Vec::new();
    let mut pos = 0usize;

    while let Some(si) = xml[pos..].find("<item") {
        let si = pos + si;
        let open_end = match xml[si..].find('>') {
            Some(x) => si + x,
            None => break,
        };
        let close = match xml[open_end + 1..].find("</item>") {
            Some(x) => open_end + 1 + x,
            None => break,
        };
        let inner = &xml[open_end + 1..close];

        if let (Some(title), Some(link)) = (tag_text(inner, "title"), tag_text(inner, "link")) {
            res.push(RawItem {
                title,
                link,
                pub_date: tag_text(inner, "pubDate"),
            });
        }
        pos = close + "</item>".len();
    }
    res
}

/// Inner text of the first `<tag>` element in `block`, with CDATA stripped
/// and the standard XML entities unescaped.
pub(crate) fn tag_text(block: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let si = block.find(&open)?;
    let open_end = si + block[si..].find('>')?;
    let ci = open_end + 1 + block[open_end + 1..].find(&close)?;
    let mut inner = block[open_end + 1..ci].trim();

    if let Some(stripped) = inner.strip_prefix("<![CDATA[") {
        inner = stripped.strip_suffix("]]>").unwrap_or(stripped).trim();
    }

    Some(unescape_xml(inner))
}

/// Resolve the five predefined XML entities plus numeric character references.
pub(crate) fn unescape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let parsed = entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                    .and_then(char::from_u32);
                match parsed {
                    Some(c) => out.push(c),
                    None => out.push_str(&tail[..=semi]),
                }
            }
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    out
}

/// Split a feed headline into `(display_title, source)`.
///
/// Google News appends the publisher after a `" - "` separator; the last
/// segment is the source and the rest, rejoined, is the display title. A
/// title with no separator keeps the full string and the default label.
pub(crate) fn split_source(title: &str, default_source: &str) -> (String, String) {
    let mut parts: Vec<&str> = title.split(" - ").collect();
    if parts.len() > 1 {
        let source = parts.pop().unwrap_or(default_source).to_string();
        (parts.join(" - "), source)
    } else {
        (title.to_string(), default_source.to_string())
    }
}
