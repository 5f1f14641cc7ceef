//! Best-effort classification of shadcn CLI output
//!
//! The CLI prints human-oriented progress text, not structured data. This
//! module recovers installed/skipped/errored item lists from it with a small
//! line-driven state machine. Unrecognized text is ignored; if the CLI
//! changes its wording the lists simply come back empty.

use crate::core::ClassifiedResult;

const INSTALLED_MARKER: &str = "Installing";
const SKIPPED_MARKER: &str = "Skipping";
const ERROR_MARKERS: [&str; 2] = ["Error", "Failed"];

/// Section the classifier is currently collecting items for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Installed,
    Skipped,
    Errors,
}

/// What a single line does to the classifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<'a> {
    /// Start (or restart) collecting for a section
    Enter(Section),
    /// Append an item to the active section
    Item(&'a str),
    /// No effect
    Ignore,
}

/// Decide what `line` means while `section` is active
///
/// Marker lines take precedence over list items, so `- Error: x` opens the
/// error section rather than being collected.
pub fn step(section: Section, line: &str) -> Transition<'_> {
    if line.contains(INSTALLED_MARKER) {
        return Transition::Enter(Section::Installed);
    }
    if line.contains(SKIPPED_MARKER) {
        return Transition::Enter(Section::Skipped);
    }
    if ERROR_MARKERS.iter().any(|marker| line.contains(marker)) {
        return Transition::Enter(Section::Errors);
    }
    if section == Section::None {
        return Transition::Ignore;
    }

    match line.trim().strip_prefix('-') {
        Some(rest) => Transition::Item(rest.trim()),
        None => Transition::Ignore,
    }
}

/// Partition CLI output into installed, skipped and errored items
pub fn classify(text: &str) -> ClassifiedResult {
    let mut result = ClassifiedResult::default();
    let mut section = Section::None;

    for line in text.lines() {
        match step(section, line) {
            Transition::Enter(next) => {
                section = next;
                if let Some(list) = slot(&mut result, next) {
                    *list = Some(Vec::new());
                }
            }
            Transition::Item(item) => {
                if let Some(Some(list)) = slot(&mut result, section) {
                    list.push(item.to_string());
                }
            }
            Transition::Ignore => {}
        }
    }

    result
}

fn slot(result: &mut ClassifiedResult, section: Section) -> Option<&mut Option<Vec<String>>> {
    match section {
        Section::None => None,
        Section::Installed => Some(&mut result.installed),
        Section::Skipped => Some(&mut result.skipped),
        Section::Errors => Some(&mut result.errors),
    }
}
