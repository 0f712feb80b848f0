use serde::Serialize;
use tally_core::entities::{BookKind, VehicleKind};

use crate::output::TextRender;

/// One titled block of the demonstration trace.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }
}

/// Output of `tally demo`: the trace plus the final state of every entity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DemoReport {
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<BookKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<VehicleKind>,
}

impl DemoReport {
    pub fn merge(&mut self, other: Self) {
        self.sections.extend(other.sections);
        self.books.extend(other.books);
        self.vehicles.extend(other.vehicles);
    }
}

impl TextRender for DemoReport {
    fn render_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = format!("=== {} ===", section.heading);
                for line in &section.lines {
                    block.push('\n');
                    block.push_str(line);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
