// src/core/html.rs
//
// Raw-source element scanning. Listing pages are React output: class
// names are case-sensitive generated prefixes, tags nest deeply, and
// the same tag name repeats inside itself. So: markers are matched
// case-sensitively against open-tag text, close tags are matched
// depth-aware by tag name (ASCII case-insensitive).

/// Tags that never take a close tag.
const VOID_TAGS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// Next open tag whose text (name + attributes, up to `>`) contains
/// `marker`. Returns (tag_start, open_end) with open_end just past the
/// closing `>`.
pub fn next_marked_tag(s: &str, marker: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let start = pos + s.get(pos..)?.find('<')?;
        match s[start + 1..].chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            Some(_) => {
                // commented-out markup is not content
                if s[start..].starts_with("<!--") {
                    pos = start + s[start..].find("-->").map(|i| i + 3)?;
                } else {
                    pos = start + 1;
                }
                continue;
            }
            None => return None,
        }
        let open_end = tag_end(s, start)?;
        if s[start..open_end].contains(marker) {
            return Some((start, open_end));
        }
        pos = open_end;
    }
}

/// Index just past the `>` that ends the tag starting at `start`.
/// A `>` inside a quoted attribute value does not end the tag.
fn tag_end(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut quote: Option<u8> = None;
    let mut pos = start;
    while pos < bytes.len() {
        let b = bytes[pos];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(pos + 1),
                _ => {}
            },
        }
        pos += 1;
    }
    None
}

/// Tag name of an open tag slice starting at `<`.
pub fn tag_name(open: &str) -> &str {
    let rest = &open[1..];
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// End of the element whose open tag spans `open_start..open_end`.
/// Returns (inner_end, elem_end): inner text stops where the close tag
/// begins, elem_end is just past it. Same-name descendants are depth
/// counted; self-closing and void tags end at their own open tag.
/// None when the close tag never appears.
pub fn element_end(s: &str, open_start: usize, open_end: usize) -> Option<(usize, usize)> {
    let open = &s[open_start..open_end];
    let name = tag_name(open);
    if name.is_empty() {
        return None;
    }
    let lower = name.to_ascii_lowercase();
    if open.ends_with("/>") || VOID_TAGS.contains(&lower.as_str()) {
        return Some((open_end, open_end));
    }

    let nb = name.as_bytes();
    let bytes = s.as_bytes();
    let mut depth = 1usize;
    let mut pos = open_end;
    while pos < bytes.len() {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }
        let rest = &s[pos + 1..];
        let (closing, tail) = match rest.strip_prefix('/') {
            Some(t) => (true, t),
            None => (false, rest),
        };
        if tail.len() >= nb.len()
            && tail.as_bytes()[..nb.len()].eq_ignore_ascii_case(nb)
            && at_name_boundary(tail[nb.len()..].chars().next())
        {
            let gt = tag_end(s, pos)?;
            if closing {
                depth -= 1;
                if depth == 0 {
                    return Some((pos, gt));
                }
            } else if !s[pos..gt].ends_with("/>") {
                depth += 1;
            }
            pos = gt;
        } else {
            pos += 1;
        }
    }
    None
}

fn at_name_boundary(c: Option<char>) -> bool {
    matches!(c, None | Some('>' | '/' | ' ' | '\t' | '\n' | '\r'))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
