//! ASCII renderer: the warehouse floor as a character grid.
//!
//! Layers are drawn back to front, so later glyphs win a shared cell:
//!
//! | Glyph | Meaning                       |
//! |-------|-------------------------------|
//! | `.`   | exploration path              |
//! | `-`   | return waypoints still queued |
//! | `D`   | dock                          |
//! | `S`   | shelf                         |
//! | `@`   | robot                         |

use std::fmt::Write as _;
use std::io::Write as _;
use std::time::Duration;

use an_core::{Tick, Vec2};
use an_sim::{SimObserver, StateView};

/// Maps warehouse coordinates onto a fixed-size character grid.
#[derive(Clone, Debug)]
pub struct Canvas {
    cols:        usize,
    rows:        usize,
    half_extent: f64,
    cells:       Vec<char>,
}

impl Canvas {
    /// A blank canvas covering `[-half_extent, half_extent]²`.
    /// Sizes below 2 are raised to 2.
    pub fn new(cols: usize, rows: usize, half_extent: f64) -> Self {
        let (cols, rows) = (cols.max(2), rows.max(2));
        Self { cols, rows, half_extent, cells: vec![' '; cols * rows] }
    }

    /// Grid cell for `p`, or `None` if it lies outside the warehouse.
    pub fn cell(&self, p: Vec2) -> Option<(usize, usize)> {
        if !p.within_square(self.half_extent) {
            return None;
        }
        let span = 2.0 * self.half_extent;
        let col = ((p.x + self.half_extent) / span * (self.cols - 1) as f64).round() as usize;
        let row = ((self.half_extent - p.y) / span * (self.rows - 1) as f64).round() as usize;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    pub fn plot(&mut self, p: Vec2, glyph: char) {
        if let Some((col, row)) = self.cell(p) {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    #[cfg(test)]
    pub fn glyph_at(&self, p: Vec2) -> Option<char> {
        self.cell(p).map(|(col, row)| self.cells[row * self.cols + col])
    }

    /// Draw every layer of `state`.
    pub fn draw(&mut self, state: &StateView<'_>) {
        for &p in state.exploration_path {
            self.plot(p, '.');
        }
        for &p in state.return_path {
            self.plot(p, '-');
        }
        self.plot(state.config.dock, 'D');
        self.plot(state.config.shelf, 'S');
        self.plot(state.position(), '@');
    }

    /// The grid with a border, one line per row.
    pub fn to_text(&self) -> String {
        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        out.push_str(&border);
        out.push('\n');
        for row in self.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

/// Render one frame of `state`: a status line followed by the grid.
pub fn render_frame(state: &StateView<'_>, cols: usize, rows: usize) -> String {
    let mut canvas = Canvas::new(cols, rows, state.config.warehouse_half_extent);
    canvas.draw(state);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  phase={:<7} pos={}  explored={}  return_left={}",
        state.tick,
        state.phase,
        state.position(),
        state.exploration_path.len(),
        state.return_path.len(),
    );
    out.push_str(&canvas.to_text());
    out
}

// ── Live renderer ─────────────────────────────────────────────────────────────

/// What [`TerminalRenderer`] does on one snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameAction {
    pub redraw: bool,
    pub sleep:  Option<Duration>,
}

/// A [`SimObserver`] that redraws the terminal every `every` snapshots.
///
/// Pacing is independent of redrawing: with a pace set, every snapshot
/// sleeps, so the run plays back at wall-clock speed whatever `every` is.
pub struct TerminalRenderer {
    every: u64,
    cols:  usize,
    rows:  usize,
    /// Sleep per snapshot; `None` runs as fast as the sim can.
    pace:  Option<Duration>,
}

impl TerminalRenderer {
    pub fn new(every: u64, cols: usize, rows: usize, pace: Option<Duration>) -> Self {
        Self { every, cols, rows, pace }
    }

    /// `every == 0` never redraws.
    pub fn action(&self, tick: Tick) -> FrameAction {
        FrameAction { redraw: tick.is_multiple_of(self.every), sleep: self.pace }
    }
}

impl SimObserver for TerminalRenderer {
    fn on_snapshot(&mut self, tick: Tick, state: &StateView<'_>) {
        let action = self.action(tick);
        if action.redraw {
            let frame = render_frame(state, self.cols, self.rows);
            let mut stdout = std::io::stdout().lock();
            if self.pace.is_some() {
                // Clear screen, cursor home.
                let _ = write!(stdout, "\x1b[2J\x1b[H");
            }
            let _ = write!(stdout, "{frame}");
            let _ = stdout.flush();
        }
        if let Some(pace) = action.sleep {
            std::thread::sleep(pace);
        }
    }
}
