//! Shared helpers for integration tests.

use rand::SeedableRng;
use rand_pcg::Pcg64;

use termgate::LinePanel;

/// A deterministic glyph source for animation tests.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Operations a sequence performed on its panel, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOp {
    /// A slot was allocated at this index.
    Push(usize),
    /// A slot's text was replaced.
    Set(usize, String),
}

/// A [`LinePanel`] that records every operation for later assertions.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub lines: Vec<String>,
    pub ops: Vec<PanelOp>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of the recorded slot allocations, in order.
    pub fn pushes(&self) -> Vec<usize> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PanelOp::Push(idx) => Some(*idx),
                PanelOp::Set(..) => None,
            })
            .collect()
    }
}

impl LinePanel for RecordingPanel {
    fn push_line(&mut self) -> usize {
        self.lines.push(String::new());
        let idx = self.lines.len() - 1;
        self.ops.push(PanelOp::Push(idx));
        idx
    }

    fn set_line(&mut self, slot: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(slot) {
            line.clear();
            line.push_str(text);
            self.ops.push(PanelOp::Set(slot, text.to_string()));
        }
    }
}
