//! Turns snapshots into dashboard text.
//!
//! [`RenderCoordinator`] only decides what goes in each cell; column
//! alignment lives in [`table`] and styling in [`color`].

pub mod color;
pub mod glyphs;
pub mod table;

use crate::model::{DirectoryEntry, Health, Snapshot};

pub use glyphs::{GlyphSet, Spinner};

/// Styling applied to a cell when the table is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Failure,
    Added,
    Removed,
    Edited,
    Renamed,
    Branch,
    Name,
    InvertedName,
    Dim,
    Header,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

/// Which optional columns and styles the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub headings: bool,
    pub branch: bool,
    pub boring: bool,
    pub invert: bool,
}

#[derive(Debug, Clone)]
pub struct RenderCoordinator {
    options: RenderOptions,
    glyphs: GlyphSet,
}

impl RenderCoordinator {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            glyphs: GlyphSet::for_boring(options.boring),
        }
    }

    pub fn glyphs(&self) -> GlyphSet {
        self.glyphs
    }

    /// Render the table for `snapshot`, followed by the spinner frame if given.
    ///
    /// With no snapshot yet only the header row (if requested) is shown.
    pub fn render(&self, snapshot: Option<&Snapshot>, frame: Option<&str>) -> String {
        let mut text = table::format(&self.rows(snapshot));
        if let Some(frame) = frame {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(frame);
        }
        text
    }

    /// One row per entry, in snapshot order, preceded by the header when enabled.
    pub fn rows(&self, snapshot: Option<&Snapshot>) -> Vec<Vec<Cell>> {
        let mut rows = Vec::new();
        if self.options.headings {
            rows.push(self.header_row());
        }
        if let Some(snapshot) = snapshot {
            rows.extend(snapshot.entries().iter().map(|entry| self.entry_row(entry)));
        }
        rows
    }

    fn header_row(&self) -> Vec<Cell> {
        let mut labels = vec!["St", "Add", "Del", "Mod", "Ren"];
        if self.options.branch {
            labels.push("Branch");
        }
        labels.push("Directory");
        labels
            .into_iter()
            .map(|label| Cell::new(label, Tone::Header))
            .collect()
    }

    fn entry_row(&self, entry: &DirectoryEntry) -> Vec<Cell> {
        let health = entry.health();
        let counts = entry.counts();

        let glyph = match health {
            Health::Clean => Cell::new(self.glyphs.success, Tone::Success),
            Health::Dirty => Cell::new(self.glyphs.warning, Tone::Warning),
            Health::Failed => Cell::new(self.glyphs.failure, Tone::Failure),
        };

        let mut row = vec![
            glyph,
            count_cell('+', counts.added, Tone::Added),
            count_cell('-', counts.removed, Tone::Removed),
            count_cell('±', counts.edited, Tone::Edited),
            count_cell('~', counts.renamed, Tone::Renamed),
        ];

        if self.options.branch {
            row.push(Cell::new(entry.branch(), Tone::Branch));
        }

        let name_tone = match (health, self.options.invert) {
            (Health::Failed, _) => Tone::Dim,
            (_, true) => Tone::InvertedName,
            (_, false) => Tone::Name,
        };
        row.push(Cell::new(entry.display_name(), name_tone));

        row
    }
}

/// Blank when zero, otherwise the count with its sign prefix.
fn count_cell(sign: char, count: u32, tone: Tone) -> Cell {
    if count == 0 {
        Cell::blank()
    } else {
        Cell::new(format!("{}{}", sign, count), tone)
    }
}
