#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Renders listings as one section per category and writes the short
//! confirmation and not-found messages printed after each command. Color is
//! applied through `termcolor`, so the caller decides whether escape codes
//! are emitted by choosing the `WriteColor` sink.

use crate::store::document::Task;
use crate::store::manager::Listing;
use crate::types::Category;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for listings
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write a listing to `out`
    pub fn write_listing(&self, out: &mut dyn WriteColor, listing: &Listing) -> io::Result<()> {
        match listing {
            Listing::All(document) => {
                for (i, category) in Category::ALL.into_iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    self.write_section(out, category, document.tasks(category))?;
                }
                Ok(())
            }
            Listing::Category(category, tasks) => self.write_section(out, *category, tasks),
        }
    }

    fn write_section(
        &self,
        out: &mut dyn WriteColor,
        category: Category,
        tasks: &[Task],
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(category_color(category))).set_bold(true))?;
        write!(out, "{}", category)?;
        out.reset()?;
        writeln!(out, " ({})", tasks.len())?;

        if tasks.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for task in tasks {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(out, "  [{}]", task.id)?;
            out.reset()?;
            writeln!(out, " {}", task.description)?;
        }
        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Todo => Color::Yellow,
        Category::InProgress => Color::Cyan,
        Category::Done => Color::Green,
    }
}

/// Write a confirmation line for a completed command
pub fn write_success(out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)
}

/// Write a line reporting a missing task or category
pub fn write_not_found(out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)
}
