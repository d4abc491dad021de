//! Minimal HTML scanning helpers for the patch-notes page.
//!
//! The upstream page is keyed on stable class markers, so a full DOM is
//! unnecessary: we slice the document at elements carrying a given class
//! token and strip tags from the pieces we care about.

/// Returns slices of `html`, one per element whose `class` attribute
/// contains `token` as an exact whitespace-separated token. Each slice
/// starts at the element's `<` and runs to the next such element (or the
/// end of the document).
pub fn sections_with_class<'a>(html: &'a str, token: &str) -> Vec<&'a str> {
    let starts = element_starts_with_class(html, token);
    let mut sections = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(html.len());
        sections.push(&html[start..end]);
    }
    sections
}

pub fn first_with_class<'a>(html: &'a str, token: &str) -> Option<&'a str> {
    sections_with_class(html, token).into_iter().next()
}

/// Inner text of the element a section starts with, found by matching the
/// closing tag of the same name. Good enough for the leaf headings this
/// page uses; falls back to the text before the next tag if the closing
/// tag is missing.
pub fn element_text(section: &str) -> String {
    let open_end = match section.find('>') {
        Some(pos) => pos + 1,
        None => return String::new(),
    };

    let tag_name: String = section[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    let close = format!("</{}", tag_name);

    let inner = match section[open_end..].find(&close) {
        Some(rel) => &section[open_end..open_end + rel],
        None => section[open_end..]
            .split('<')
            .next()
            .unwrap_or(""),
    };
    strip_tags(inner)
}

/// Collects the stripped text of every `<li>...</li>` in the section,
/// in document order. Empty items are dropped.
pub fn list_items(section: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut pos = 0;

    while let Some(rel) = section[pos..].find("<li") {
        let li_start = pos + rel;
        let after = &section[li_start + 3..];
        // Reject tags that merely start with "li" (e.g. <link>)
        if !matches!(after.chars().next(), Some('>') | Some(' ') | Some('\t') | Some('\n')) {
            pos = li_start + 3;
            continue;
        }
        let open_end = match section[li_start..].find('>') {
            Some(p) => li_start + p + 1,
            None => break,
        };
        let close_rel = match section[open_end..].find("</li") {
            Some(p) => p,
            None => break,
        };
        let text = strip_tags(&section[open_end..open_end + close_rel]);
        if !text.is_empty() {
            items.push(text);
        }
        pos = open_end + close_rel + 4;
    }
    items
}

/// Removes tags, decodes the handful of entities the page uses, and
/// normalizes whitespace.
pub fn strip_tags(s: &str) -> String {
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
    normalize_ws(&decode_entities(&out))
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_starts_with_class(html: &str, token: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut pos = 0;

    while let Some(rel) = html[pos..].find("class=") {
        let attr_pos = pos + rel;
        pos = attr_pos + 6;

        // Only attributes inside a tag count
        let before = &html[..attr_pos];
        let lt = before.rfind('<');
        let gt = before.rfind('>');
        let tag_start = match (lt, gt) {
            (Some(l), Some(g)) if l > g => l,
            (Some(l), None) => l,
            _ => continue,
        };

        let rest = &html[pos..];
        let quote = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => continue,
        };
        let value = match rest[1..].find(quote) {
            Some(end) => &rest[1..1 + end],
            None => continue,
        };

        if value.split_whitespace().any(|t| t == token) {
            starts.push(tag_start);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_token_match_is_exact() {
        let html = r#"<div class="PatchNotes-patch"><h3 class="PatchNotes-patchTitle">A</h3></div>"#;
        assert_eq!(sections_with_class(html, "PatchNotes-patch").len(), 1);
        assert_eq!(sections_with_class(html, "PatchNotes-patchTitle").len(), 1);
        assert_eq!(sections_with_class(html, "PatchNotes").len(), 0);
    }

    #[test]
    fn sections_split_at_next_occurrence() {
        let html = r#"<div class="block">one</div><div class="block">two</div>"#;
        let sections = sections_with_class(html, "block");
        assert_eq!(sections.len(), 2);
        assert!(sections[0].contains("one"));
        assert!(!sections[0].contains("two"));
        assert!(sections[1].contains("two"));
    }

    #[test]
    fn element_text_reads_until_matching_close() {
        let section = r#"<h3 class="t">补丁说明——2025年5月30日</h3><div>rest</div>"#;
        assert_eq!(element_text(section), "补丁说明——2025年5月30日");
    }

    #[test]
    fn element_text_strips_nested_tags() {
        let section = r#"<h3 class="t">a <em>b</em> c</h3>"#;
        assert_eq!(element_text(section), "a b c");
    }

    #[test]
    fn list_items_collects_stripped_text() {
        let section = "<ul><li>伤害从 70 提高至 75。</li><li class=\"x\">冷却时间<b>延长</b>。</li></ul>";
        let items = list_items(section);
        assert_eq!(items, vec!["伤害从 70 提高至 75。", "冷却时间延长。"]);
    }

    #[test]
    fn list_items_ignores_link_tags() {
        let items = list_items("<link rel=\"x\"><ul><li>a</li></ul>");
        assert_eq!(items, vec!["a"]);
    }

    #[test]
    fn strip_tags_decodes_entities_and_normalizes() {
        assert_eq!(strip_tags("a&nbsp;&amp;<span>  b\n c</span>"), "a & b c");
    }
}
