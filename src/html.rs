use super::*;
use std::collections::HashMap;

pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    let mut dom = Dom::new();
    let chars = html.chars().collect::<Vec<_>>();
    let mut stack: Vec<NodeId> = vec![dom.root];
    let mut i = 0usize;

    while i < chars.len() {
        if chars[i] == '<' {
            if starts_with(&chars, i, "<!--") {
                let Some(end) = find_sequence(&chars, i + 4, "-->") else {
                    return Err(Error::HtmlParse("unterminated comment".into()));
                };
                i = end + 3;
                continue;
            }

            if starts_with_ignore_case(&chars, i, "<!doctype") {
                let Some(end) = find_char(&chars, i, '>') else {
                    return Err(Error::HtmlParse("unterminated doctype".into()));
                };
                i = end + 1;
                continue;
            }

            if chars.get(i + 1) == Some(&'/') {
                let Some(end) = find_char(&chars, i, '>') else {
                    return Err(Error::HtmlParse("unterminated close tag".into()));
                };
                let name = chars[i + 2..end]
                    .iter()
                    .collect::<String>()
                    .trim()
                    .to_ascii_lowercase();
                if let Some(depth) = stack.iter().skip(1).rposition(|node| {
                    dom.tag_name(*node)
                        .map(|tag| tag.eq_ignore_ascii_case(&name))
                        .unwrap_or(false)
                }) {
                    stack.truncate(depth + 1);
                }
                i = end + 1;
                continue;
            }

            let parent = stack.last().copied().unwrap_or(dom.root);
            let (node, next, opened) = parse_open_tag(&mut dom, &chars, i, parent)?;
            i = next;

            let tag = dom.tag_name(node).unwrap_or_default().to_ascii_lowercase();
            if is_raw_text_element(&tag) {
                let close = format!("</{tag}");
                let content_end = find_sequence_ignore_case(&chars, i, &close);
                let Some(content_end) = content_end else {
                    return Err(Error::HtmlParse(format!("unterminated <{tag}> element")));
                };
                let raw = chars[i..content_end].iter().collect::<String>();
                if !raw.is_empty() {
                    dom.create_text(node, raw);
                }
                let Some(end) = find_char(&chars, content_end, '>') else {
                    return Err(Error::HtmlParse(format!("unterminated <{tag}> close tag")));
                };
                i = end + 1;
                continue;
            }

            if opened {
                stack.push(node);
            }
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] != '<' {
            i += 1;
        }
        let raw = chars[start..i].iter().collect::<String>();
        if !raw.trim().is_empty() {
            let parent = stack.last().copied().unwrap_or(dom.root);
            let text = decode_character_references(&raw);
            dom.create_text(parent, text);
        }
    }

    dom.initialize_form_control_values()?;
    Ok(dom)
}

// Returns (node, index after tag, whether the element stays open).
fn parse_open_tag(
    dom: &mut Dom,
    chars: &[char],
    start: usize,
    parent: NodeId,
) -> Result<(NodeId, usize, bool)> {
    let mut i = start + 1;
    if !matches!(chars.get(i), Some(ch) if ch.is_ascii_alphabetic()) {
        return Err(Error::HtmlParse("malformed tag name".into()));
    }
    let mut name = String::new();
    while matches!(chars.get(i), Some(ch) if ch.is_ascii_alphanumeric() || *ch == '-') {
        name.push(chars[i]);
        i += 1;
    }
    let name = name.to_ascii_lowercase();

    let mut attrs = HashMap::new();
    let mut self_closing = false;
    loop {
        while matches!(chars.get(i), Some(ch) if ch.is_whitespace()) {
            i += 1;
        }
        match chars.get(i) {
            None => return Err(Error::HtmlParse(format!("unterminated <{name}> tag"))),
            Some('>') => {
                i += 1;
                break;
            }
            Some('/') => {
                if chars.get(i + 1) == Some(&'>') {
                    self_closing = true;
                    i += 2;
                    break;
                }
                i += 1;
            }
            Some(_) => {
                let (attr_name, attr_value, next) = parse_attribute(chars, i, &name)?;
                attrs.insert(attr_name, attr_value);
                i = next;
            }
        }
    }

    let node = dom.create_element(parent, name.clone(), attrs);
    let opened = !self_closing && !is_void_element(&name);
    Ok((node, i, opened))
}

fn parse_attribute(chars: &[char], start: usize, tag: &str) -> Result<(String, String, usize)> {
    let mut i = start;
    let mut name = String::new();
    while matches!(chars.get(i), Some(ch)
        if !ch.is_whitespace() && !matches!(ch, '=' | '>' | '/'))
    {
        name.push(chars[i]);
        i += 1;
    }
    if name.is_empty() {
        return Err(Error::HtmlParse(format!("malformed attribute in <{tag}>")));
    }
    let name = name.to_ascii_lowercase();

    while matches!(chars.get(i), Some(ch) if ch.is_whitespace()) {
        i += 1;
    }
    if chars.get(i) != Some(&'=') {
        return Ok((name, String::new(), i));
    }
    i += 1;
    while matches!(chars.get(i), Some(ch) if ch.is_whitespace()) {
        i += 1;
    }

    match chars.get(i) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            i += 1;
            let value_start = i;
            while matches!(chars.get(i), Some(ch) if *ch != quote) {
                i += 1;
            }
            if chars.get(i) != Some(&quote) {
                return Err(Error::HtmlParse(format!(
                    "unterminated attribute value in <{tag}>"
                )));
            }
            let raw = chars[value_start..i].iter().collect::<String>();
            Ok((name, decode_character_references(&raw), i + 1))
        }
        Some(_) => {
            let value_start = i;
            while matches!(chars.get(i), Some(ch) if !ch.is_whitespace() && *ch != '>') {
                i += 1;
            }
            let raw = chars[value_start..i].iter().collect::<String>();
            Ok((name, decode_character_references(&raw), i))
        }
        None => Err(Error::HtmlParse(format!(
            "unterminated attribute value in <{tag}>"
        ))),
    }
}

fn is_raw_text_element(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
}

fn starts_with(chars: &[char], at: usize, needle: &str) -> bool {
    needle
        .chars()
        .enumerate()
        .all(|(offset, ch)| chars.get(at + offset) == Some(&ch))
}

fn starts_with_ignore_case(chars: &[char], at: usize, needle: &str) -> bool {
    needle.chars().enumerate().all(|(offset, ch)| {
        chars
            .get(at + offset)
            .map(|actual| actual.eq_ignore_ascii_case(&ch))
            .unwrap_or(false)
    })
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|idx| chars[*idx] == needle)
}

fn find_sequence(chars: &[char], from: usize, needle: &str) -> Option<usize> {
    (from..chars.len()).find(|idx| starts_with(chars, *idx, needle))
}

fn find_sequence_ignore_case(chars: &[char], from: usize, needle: &str) -> Option<usize> {
    (from..chars.len()).find(|idx| starts_with_ignore_case(chars, *idx, needle))
}

pub(crate) fn decode_character_references(src: &str) -> String {
    if !src.contains('&') {
        return src.to_string();
    }

    fn decode_numeric(value: &str) -> Option<char> {
        let codepoint = if let Some(hex) = value
            .strip_prefix('x')
            .or_else(|| value.strip_prefix('X'))
        {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            value.parse::<u32>().ok()?
        };
        char::from_u32(codepoint)
    }

    fn decode_named(value: &str) -> Option<char> {
        match value {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{00A0}'),
            "copy" => Some('©'),
            "laquo" => Some('«'),
            "raquo" => Some('»'),
            "hellip" => Some('…'),
            "middot" => Some('·'),
            "larr" => Some('←'),
            "rarr" => Some('→'),
            "euro" => Some('€'),
            _ => None,
        }
    }

    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        let Some(semicolon) = tail.find(';') else {
            out.push('&');
            rest = tail;
            continue;
        };
        let raw = &tail[..semicolon];
        let decoded = if let Some(numeric) = raw.strip_prefix('#') {
            decode_numeric(numeric)
        } else {
            decode_named(raw)
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &tail[semicolon + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
