use serde::{Deserialize, Serialize};

/// Final record written to disk. Sections only exist while parsing; the
/// output is the flat list of categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Mods")]
    pub mods: Vec<List>,
}

impl Metadata {
    pub fn item_count(&self) -> usize {
        self.mods.iter().map(|l| l.items.len()).sum()
    }
}

/// One `### ` subsection and the mods listed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub category: String,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub display_name: String,
    pub description: String,
    pub credit: String,
    pub url: String,
    #[serde(rename = "install_type")]
    pub source_kind: SourceKind,
    #[serde(rename = "mod_loader")]
    pub loader_kind: LoaderKind,
}

/// Mod loader a section targets, read off its `## ` heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    #[default]
    Unknown,
    Lovely,
    Steammodded,
}

/// Where an item's URL points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Repo,
    Gist,
}

// ── Tests ──
