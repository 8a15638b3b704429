/// Kinds of line the converter reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `## ` heading; carries the whole line since loader detection reads it.
    Section(&'a str),
    /// `### ` heading text, marker stripped.
    Subsection(&'a str),
    /// `- ` list entry, marker stripped.
    Entry(&'a str),
    Other,
}

const SECTION_PREFIX: &str = "## ";
const SUBSECTION_PREFIX: &str = "### ";
const ENTRY_PREFIX: &str = "- ";

/// Classify a raw line by its prefix. No trimming: an indented `- ` is not an entry.
pub fn classify_line(line: &str) -> Line<'_> {
    if line.starts_with(SECTION_PREFIX) {
        return Line::Section(line);
    }
    if let Some(text) = line.strip_prefix(SUBSECTION_PREFIX) {
        return Line::Subsection(text);
    }
    if let Some(text) = line.strip_prefix(ENTRY_PREFIX) {
        return Line::Entry(text);
    }
    Line::Other
}

/// Heading text of a `## ` line with the marker removed.
pub fn section_name(line: &str) -> &str {
    line.strip_prefix(SECTION_PREFIX).unwrap_or(line)
}

/// Split a document into lines on `\n` only; `\r` stays with the line.
pub fn split_lines(document: &str) -> impl Iterator<Item = &str> {
    document.split('\n')
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_entries() {
        assert_eq!(classify_line("## Lovely Mods"), Line::Section("## Lovely Mods"));
        assert_eq!(classify_line("### Utility"), Line::Subsection("Utility"));
        assert_eq!(classify_line("- [A](b) - c"), Line::Entry("[A](b) - c"));
    }

    #[test]
    fn near_misses_are_other() {
        for line in ["#### Deep", "# Title", "##NoSpace", "-NoSpace", "  - indented", "", "text"] {
            assert_eq!(classify_line(line), Line::Other, "{line:?}");
        }
    }

    #[test]
    fn section_name_keeps_trailing_text() {
        assert_eq!(section_name("## Lovely Mods "), "Lovely Mods ");
    }

    #[test]
    fn carriage_returns_survive_split() {
        let lines: Vec<_> = split_lines("a\r\nb").collect();
        assert_eq!(lines, vec!["a\r", "b"]);
    }
}
