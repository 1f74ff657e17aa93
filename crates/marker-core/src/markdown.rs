/// Image reference extraction from one line of Markdown.
///
/// Recognises `![alt](target "title")`, `![alt](<target>)` and inline HTML
/// `<img src="target">`. Only local references are returned; remote URLs
/// and `data:` URIs can never resolve inside the tree.
use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\(\s*(?:<([^>]+)>|([^)\s]+))").expect("valid markdown image regex")
});

static HTML_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\s[^>]*?\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid html image regex")
});

/// Every local image target on `line`, in order of appearance per syntax.
pub fn image_references(line: &str) -> Vec<&str> {
    let markdown = MARKDOWN_IMAGE.captures_iter(line);
    let html = HTML_IMAGE.captures_iter(line);

    markdown
        .chain(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| strip_suffix(m.as_str().trim()))
        .filter(|target| !target.is_empty() && !is_remote(target))
        .collect()
}

/// `true` for names ending in `.md` or `.markdown`, ignoring ASCII case.
pub fn is_markdown(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"),
        None => false,
    }
}

/// Drop `?query` and `#fragment` parts.
fn strip_suffix(target: &str) -> &str {
    match target.find(&['?', '#'][..]) {
        Some(pos) => &target[..pos],
        None => target,
    }
}

fn is_remote(target: &str) -> bool {
    target.contains("://") || target.starts_with("//") || target.starts_with("data:")
}
