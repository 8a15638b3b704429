pub mod extract;
pub mod lines;
pub mod sections;

use tracing::info;

use crate::model::Metadata;
use sections::{ParseStats, SectionTable};

/// Convert a mod-list README into the flattened category record.
pub fn parse(document: &str) -> Metadata {
    let (metadata, stats) = parse_with_stats(document);
    info!(
        section_headings = stats.section_headings,
        lists = stats.lists,
        kept_lists = metadata.mods.len(),
        items = stats.items,
        skipped = stats.skipped(),
        excluded_headings = stats.excluded_headings,
        empty_sections = stats.empty_sections,
        "Parsed document"
    );
    metadata
}

/// Single pass over the lines into a fresh section table, then cleanup + flatten.
pub fn parse_with_stats(document: &str) -> (Metadata, ParseStats) {
    let mut table = SectionTable::new();
    for line in lines::split_lines(document) {
        table.feed(line);
    }
    table.finish()
}

// ── Tests ──
