//! Turns visible line ranges into fixed-width, classified gutter labels.

use crate::alphabet::Alphabet;
use crate::error::NumeralResult;
use crate::plan::WidthPlan;
use crate::settings::{LineNumberConfig, RenderFinalNewline};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Extra lines labelled above and below each visible range.
pub const BUFFER_LINES: usize = 2;

/// A visible range as the editor reports it: `end` is the last visible line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Per-pass facts about the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentFacts {
    pub line_count: usize,
    pub active_line: Option<usize>,
    pub last_line_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    Active,
    DimmedLast,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub line: usize,
    pub text: String,
    pub classification: Classification,
}

/// Half-open `[start, end)` of line indices labelled in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Expands `range` by [`BUFFER_LINES`] and clamps it to the document.
    ///
    /// With `Off`, an empty last line is left out entirely.
    pub fn around(range: VisibleRange, facts: &DocumentFacts, mode: RenderFinalNewline) -> Window {
        let limit = if mode == RenderFinalNewline::Off && facts.last_line_empty {
            facts.line_count.saturating_sub(1)
        } else {
            facts.line_count
        };
        let start = range.start.saturating_sub(BUFFER_LINES);
        let end = range.end.saturating_add(BUFFER_LINES).min(limit);
        Window { start, end: end.max(start) }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn lines(&self) -> Range<usize> {
        self.start..self.end
    }
}

fn classify(line: usize, facts: &DocumentFacts, mode: RenderFinalNewline) -> Classification {
    if facts.active_line == Some(line) {
        Classification::Active
    } else if mode == RenderFinalNewline::Dimmed && line + 1 == facts.line_count {
        Classification::DimmedLast
    } else {
        Classification::Normal
    }
}

/// Lazy labels for one window, in ascending line order.
///
/// A clone continues independently from the same position.
#[derive(Debug, Clone)]
pub struct LineLabels<'a> {
    lines: Range<usize>,
    plan: Option<WidthPlan>,
    alphabet: &'a Alphabet,
    facts: DocumentFacts,
    mode: RenderFinalNewline,
}

impl LineLabels<'_> {
    pub fn plan(&self) -> Option<WidthPlan> {
        self.plan
    }
}

impl Iterator for LineLabels<'_> {
    type Item = NumeralResult<Label>;

    fn next(&mut self) -> Option<Self::Item> {
        let plan = self.plan?;
        let line = self.lines.next()?;
        let text = match plan.encode(&BigInt::from(line + 1), self.alphabet) {
            Ok(text) => text,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(Label {
            line,
            text,
            classification: classify(line, &self.facts, self.mode),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.plan {
            Some(_) => self.lines.size_hint(),
            None => (0, Some(0)),
        }
    }
}

/// Plans one window and returns its labels lazily.
///
/// The plan is made for one past the largest label (`window.end + 1`), so a
/// fixed-length radix always has room for every label in the window.
pub fn render_window<'a>(
    window: Window,
    config: &'a LineNumberConfig,
    facts: &DocumentFacts,
) -> NumeralResult<LineLabels<'a>> {
    let plan = if window.is_empty() {
        None
    } else {
        let bound = BigInt::from(window.end) + 1;
        Some(WidthPlan::for_window(config.system, &bound, &config.alphabet)?)
    };
    Ok(LineLabels {
        lines: window.lines(),
        plan,
        alphabet: &config.alphabet,
        facts: *facts,
        mode: config.render_final_newline,
    })
}

/// Labels every visible range of a pass, in range order.
///
/// Each range gets its own window and plan, so two ranges far apart in a
/// fixed-length document can use different radixes.
pub fn render(ranges: &[VisibleRange], config: &LineNumberConfig, facts: &DocumentFacts) -> NumeralResult<Vec<Label>> {
    let mut labels = Vec::new();
    for range in ranges {
        let window = Window::around(*range, facts, config.render_final_newline);
        for label in render_window(window, config, facts)? {
            labels.push(label?);
        }
    }
    Ok(labels)
}
