use crate::model::{LoaderKind, ListItem, SourceKind};

const FIELD_DELIMITER: &str = " - ";
const CREDIT_MARKER: &str = "by";
const GIST_HOST: &str = "gist.github.com";
const BLOCKED_HOSTS: &[&str] = &["discord", "nexusmods"];

/// Why an entry line produced no item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// No ` - ` between the link and the description.
    MissingDelimiter,
    /// Link points at a host we never list.
    BlockedHost(&'static str),
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::MissingDelimiter => write!(f, "missing \"{}\" delimiter", FIELD_DELIMITER),
            Skip::BlockedHost(host) => write!(f, "blocked host ({})", host),
        }
    }
}

/// Extract one item from an entry line (list marker already stripped).
///
/// Expected shape is `[Name](url) - Description by Credit`. The loader kind
/// is left as `Unknown`; the caller stamps the active section's loader.
pub fn extract_entry(line: &str) -> Result<ListItem, Skip> {
    let (name_and_link, description_and_credit) = line
        .split_once(FIELD_DELIMITER)
        .ok_or(Skip::MissingDelimiter)?;

    let (name, link) = split_name_and_link(name_and_link);
    let link = clean_link(link);

    if let Some(host) = BLOCKED_HOSTS.iter().copied().find(|h| link.contains(h)) {
        return Err(Skip::BlockedHost(host));
    }

    let (description, credit) = match description_and_credit.split_once(CREDIT_MARKER) {
        Some((d, c)) => (d.trim().to_string(), c.trim().to_string()),
        None => (String::new(), String::new()),
    };

    Ok(ListItem {
        display_name: name.trim().to_string(),
        description,
        credit,
        url: link.trim().to_string(),
        source_kind: classify_source(&link),
        loader_kind: LoaderKind::Unknown,
    })
}

/// `gist` only for gist-hosted links.
pub fn classify_source(url: &str) -> SourceKind {
    if url.contains(GIST_HOST) {
        SourceKind::Gist
    } else {
        SourceKind::Repo
    }
}

/// Drop the opening `[`, then split on the first `]`. Without a `]` the
/// whole remainder is the name and the link is empty.
fn split_name_and_link(text: &str) -> (&str, &str) {
    let mut chars = text.chars();
    chars.next();
    let rest = chars.as_str();
    rest.split_once(']').unwrap_or((rest, ""))
}

/// Remove every `(` and cut at the first `)`.
fn clean_link(link: &str) -> String {
    let stripped = link.replace('(', "");
    match stripped.split_once(')') {
        Some((before, _)) => before.to_string(),
        None => stripped,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_entry() {
        let item = extract_entry("[CoolMod](https://github.com/foo/bar) - Does cool things by Foo").unwrap();
        assert_eq!(item.display_name, "CoolMod");
        assert_eq!(item.url, "https://github.com/foo/bar");
        assert_eq!(item.description, "Does cool things");
        assert_eq!(item.credit, "Foo");
        assert_eq!(item.source_kind, SourceKind::Repo);
    }

    #[test]
    fn gist_links() {
        let item = extract_entry("[Gisty](https://gist.github.com/x/y) - desc by Bar").unwrap();
        assert_eq!(item.source_kind, SourceKind::Gist);
        assert_eq!(classify_source("https://github.com/gist"), SourceKind::Repo);
    }

    #[test]
    fn missing_delimiter_skips() {
        assert_eq!(
            extract_entry("[A](https://github.com/a/b) no dash here"),
            Err(Skip::MissingDelimiter)
        );
        assert_eq!(extract_entry("[A](https://github.com/a/b)-tight"), Err(Skip::MissingDelimiter));
    }

    #[test]
    fn blocked_hosts_skip() {
        assert_eq!(
            extract_entry("[Bad](https://discord.gg/xyz) - desc by Baz"),
            Err(Skip::BlockedHost("discord"))
        );
        assert_eq!(
            extract_entry("[Nexus](https://www.nexusmods.com/balatro/mods/1) - desc by Baz"),
            Err(Skip::BlockedHost("nexusmods"))
        );
    }

    #[test]
    fn blocked_host_in_description_is_kept() {
        let item = extract_entry("[Ok](https://github.com/a/b) - join the discord by Someone").unwrap();
        assert_eq!(item.description, "join the discord");
    }

    #[test]
    fn no_credit_leaves_both_empty() {
        let item = extract_entry("[Solo](https://github.com/a/b) - A plain description").unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.credit, "");
    }

    #[test]
    fn credit_split_is_not_word_bounded() {
        let item = extract_entry("[Skip](https://github.com/a/b) - Lets you bypass blinds by Qux").unwrap();
        assert_eq!(item.description, "Lets you");
        assert_eq!(item.credit, "pass blinds by Qux");
    }

    #[test]
    fn line_without_brackets() {
        let item = extract_entry("NoLinkHere - something").unwrap();
        assert_eq!(item.display_name, "oLinkHere");
        assert_eq!(item.url, "");
        assert_eq!(item.source_kind, SourceKind::Repo);
    }

    #[test]
    fn empty_name_part_does_not_panic() {
        let item = extract_entry(" - something by Me").unwrap();
        assert_eq!(item.display_name, "");
        assert_eq!(item.credit, "Me");
    }

    #[test]
    fn link_cleanup() {
        assert_eq!(clean_link("(https://a.b/c) extra"), "https://a.b/c");
        assert_eq!(clean_link("(https://a.b/(x)y)"), "https://a.b/x");
        assert_eq!(clean_link("no parens"), "no parens");
    }

    #[test]
    fn url_is_trimmed() {
        let item = extract_entry("[Pad]( https://github.com/a/b ) - d by e").unwrap();
        assert_eq!(item.url, "https://github.com/a/b");
    }
}
