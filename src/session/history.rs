//! In-memory navigable command history.

use std::collections::VecDeque;

/// Bounded history ring with up/down navigation.
///
/// Navigation keeps a pending copy of the line that was in progress when it
/// began; walking forward past the newest entry restores it. Recording a
/// new line resets any navigation in flight.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
    cursor: Option<usize>,
    pending: String,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            cursor: None,
            pending: String::new(),
        }
    }

    /// Record a submitted line. Blank lines and repeats of the newest entry
    /// are skipped.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        self.pending.clear();

        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Step backward (toward older entries). `current` seeds the pending
    /// line on the first step; at the oldest entry the step saturates.
    pub fn previous(&mut self, current: &str) -> String {
        let idx = match self.cursor {
            None if self.entries.is_empty() => return current.to_string(),
            None => {
                self.pending = current.to_string();
                self.entries.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(idx);
        self.entries[idx].clone()
    }

    /// Step forward (toward newer entries). Past the newest entry the
    /// pending line comes back and navigation ends.
    pub fn next(&mut self) -> String {
        match self.cursor {
            None => String::new(),
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries[i + 1].clone()
            }
            Some(_) => {
                self.cursor = None;
                std::mem::take(&mut self.pending)
            }
        }
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
