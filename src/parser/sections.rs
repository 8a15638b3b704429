use std::collections::HashMap;

use tracing::{debug, warn};

use super::extract::{extract_entry, Skip};
use super::lines::{classify_line, section_name, Line};
use crate::model::{List, LoaderKind, Metadata};

/// Headings containing this are ignored outright, context included.
const EXCLUDED_SECTION: &str = "Balamod";

#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub loader: LoaderKind,
    pub lists: Vec<List>,
}

/// Counters collected over one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub section_headings: usize,
    pub excluded_headings: usize,
    pub lists: usize,
    pub items: usize,
    pub missing_delimiter: usize,
    pub blocked_host: usize,
    pub orphaned: usize,
    pub empty_sections: usize,
}

impl ParseStats {
    fn record_skip(&mut self, skip: &Skip) {
        match skip {
            Skip::MissingDelimiter => self.missing_delimiter += 1,
            Skip::BlockedHost(_) => self.blocked_host += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.missing_delimiter + self.blocked_host + self.orphaned
    }
}

/// Loader kind from a `## ` heading. SteamModded wins when both names appear.
pub fn classify_loader(heading: &str) -> LoaderKind {
    if heading.contains("SteamModded") {
        LoaderKind::Steammodded
    } else if heading.contains("Lovely") {
        LoaderKind::Lovely
    } else {
        LoaderKind::Unknown
    }
}

/// Accumulation state for a single parse: sections in document order, the
/// current section and loader, and the list entries are appended to.
#[derive(Debug, Default)]
pub struct SectionTable {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
    current_section: String,
    loader: LoaderKind,
    active: Option<(usize, usize)>,
    stats: ParseStats,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        match classify_line(line) {
            Line::Section(heading) => self.open_section(heading),
            Line::Subsection(category) => self.open_list(category),
            Line::Entry(text) => self.push_entry(text),
            Line::Other => {}
        }
    }

    fn open_section(&mut self, heading: &str) {
        if heading.contains(EXCLUDED_SECTION) {
            debug!(heading, "skipping excluded section heading");
            self.stats.excluded_headings += 1;
            return;
        }

        self.loader = classify_loader(heading);
        self.current_section = section_name(heading).to_string();
        self.active = None;

        // A repeated heading starts over but keeps its first position.
        let idx = self.section_slot();
        let section = &mut self.sections[idx];
        section.loader = self.loader;
        section.lists.clear();
        self.stats.section_headings += 1;
    }

    /// Index of the current section, creating it if no heading made it yet
    /// (subsections before any `## ` land in an unnamed section).
    fn section_slot(&mut self) -> usize {
        if let Some(&idx) = self.index.get(&self.current_section) {
            return idx;
        }
        let idx = self.sections.len();
        self.sections.push(Section {
            name: self.current_section.clone(),
            loader: self.loader,
            lists: Vec::new(),
        });
        self.index.insert(self.current_section.clone(), idx);
        idx
    }

    fn open_list(&mut self, category: &str) {
        let section = self.section_slot();
        let lists = &mut self.sections[section].lists;
        lists.push(List::new(category));
        self.active = Some((section, lists.len() - 1));
        self.stats.lists += 1;
    }

    fn push_entry(&mut self, text: &str) {
        let mut item = match extract_entry(text) {
            Ok(item) => item,
            Err(skip) => {
                debug!(line = text, reason = %skip, "skipping entry");
                self.stats.record_skip(&skip);
                return;
            }
        };

        let Some((section, list)) = self.active else {
            warn!(line = text, section = %self.current_section, "entry outside any subsection, dropping");
            self.stats.orphaned += 1;
            return;
        };

        item.loader_kind = self.loader;
        self.sections[section].lists[list].items.push(item);
        self.stats.items += 1;
    }

    /// Drop sections without subsections and flatten the rest in document order.
    pub fn finish(mut self) -> (Metadata, ParseStats) {
        let before = self.sections.len();
        self.sections.retain(|s| {
            if s.lists.is_empty() {
                debug!(section = %s.name, loader = ?s.loader, "dropping section without subsections");
            }
            !s.lists.is_empty()
        });
        self.stats.empty_sections = before - self.sections.len();

        let mods = self.sections.into_iter().flat_map(|s| s.lists).collect();
        (Metadata { mods }, self.stats)
    }
}

// ── Tests ──
