// Minefield state machine
// Cell concealment, mine placement, reveal/chord algorithms, win/loss detection

use log::debug;
use rand::prelude::*;
use std::time::{Duration, Instant};

/// Board geometry limits enforced by the configuration steppers
pub const MIN_ROWS: usize = 5;
pub const MAX_ROWS: usize = 30;
pub const MIN_COLS: usize = 5;
pub const MAX_COLS: usize = 16;
pub const MIN_MINES: usize = 5;

/// Highest mine count a board of the given area may carry
pub fn max_mines(cols: usize, rows: usize) -> usize {
    (((cols * rows) as f64) * 0.926) as usize
}

/// Validated board geometry, handed to the Field as one immutable record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub cols: usize,
    pub rows: usize,
    pub mines: usize,
}

impl BoardConfig {
    /// Clamp arbitrary values into a playable configuration
    pub fn clamped(cols: usize, rows: usize, mines: usize) -> Self {
        let cols = cols.clamp(MIN_COLS, MAX_COLS);
        let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
        let mines = mines.clamp(MIN_MINES, max_mines(cols, rows));
        BoardConfig { cols, rows, mines }
    }

    pub fn total(&self) -> usize {
        self.cols * self.rows
    }

    /// Mine density in whole percent, informational only
    pub fn mine_percent(&self) -> usize {
        self.mines * 100 / self.total()
    }
}

/// Whether a cell's content is hidden, marked, or revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concealment {
    Closed,
    Flagged,
    Questioned,
    Opened,
}

/// Terminal-resolution mark, assigned only when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    FirstHit,
    Saved,
    WrongFlag,
    Detonated,
}

/// Overall game-progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstMove,
    Playing,
    Paused,
    Won,
    Lost,
}

/// Per-cell presentation tag exported to the widget layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Hidden,
    Blank,
    Digit(u8),
    Flag,
    Question,
    Mine,
    FirstMine,
    Detonated,
    WrongFlag,
    SavedMine,
}

/// A single cell on the minefield
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    concealment: Concealment,
    mine: bool,
    adjacent: u8,
    outcome: Outcome,
}

impl Cell {
    fn new() -> Self {
        Cell {
            concealment: Concealment::Closed,
            mine: false,
            adjacent: 0,
            outcome: Outcome::None,
        }
    }

    /// Reveal the cell; flagged cells are protected from accidental opening
    fn open(&mut self) {
        if matches!(
            self.concealment,
            Concealment::Closed | Concealment::Questioned
        ) {
            self.concealment = Concealment::Opened;
        }
    }

    /// Cycle the flag mark: none -> flag -> question -> none
    fn mark(&mut self) {
        self.concealment = match self.concealment {
            Concealment::Closed => Concealment::Flagged,
            Concealment::Flagged => Concealment::Questioned,
            Concealment::Questioned => Concealment::Closed,
            Concealment::Opened => Concealment::Opened,
        };
    }

    pub fn concealment(&self) -> Concealment {
        self.concealment
    }

    fn is_opened(&self) -> bool {
        self.concealment == Concealment::Opened
    }

    fn is_closed(&self) -> bool {
        self.concealment == Concealment::Closed
    }

    fn is_flagged(&self) -> bool {
        self.concealment == Concealment::Flagged
    }
}

/// The minefield: cell grid, game phase, and elapsed-time clock
///
/// All addressing operations are total: out-of-bounds positions and
/// phase-inappropriate calls are silent no-ops, so the dispatch layer can
/// forward any caller-supplied coordinate without pre-validation.
pub struct Field {
    config: BoardConfig,
    cells: Vec<Cell>,
    phase: Phase,
    start: Option<Instant>,
    elapsed: Duration,
}

impl Field {
    /// Create a fresh field; mines are placed on the first open (safe first click)
    pub fn new(config: BoardConfig) -> Self {
        Field {
            config,
            cells: vec![Cell::new(); config.total()],
            phase: Phase::AwaitingFirstMove,
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Flat index of (column, row); row-major with `cols` cells per row
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.config.cols + col
    }

    /// (column, row) of a flat index
    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx % self.config.cols, idx / self.config.cols)
    }

    fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.config.cols && row < self.config.rows
    }

    /// Indices of the up-to-8 Moore neighbors, clipped at grid edges
    fn neighbors(&self, idx: usize) -> Vec<usize> {
        let (col, row) = self.position(idx);
        let mut out = Vec::with_capacity(8);
        for ny in row.saturating_sub(1)..=(row + 1).min(self.config.rows - 1) {
            for nx in col.saturating_sub(1)..=(col + 1).min(self.config.cols - 1) {
                if nx == col && ny == row {
                    continue;
                }
                out.push(self.index(nx, ny));
            }
        }
        out
    }

    /// Place mines by rejection sampling, never on the excluded cell,
    /// then compute adjacency counts; transitions into Playing
    pub fn place(&mut self, excluded: usize) {
        if self.phase != Phase::AwaitingFirstMove {
            return;
        }
        let mut rng = thread_rng();
        let total = self.config.total();
        let mut placed = 0;
        while placed < self.config.mines {
            let i = rng.gen_range(0..total);
            if i == excluded || self.cells[i].mine {
                continue;
            }
            self.cells[i].mine = true;
            placed += 1;
        }
        self.compute_adjacency();
        debug!(
            "placed {} mines on {}x{} grid, first move at {}",
            placed, self.config.cols, self.config.rows, excluded
        );
        self.phase = Phase::Playing;
        self.clock_run();
    }

    fn compute_adjacency(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].mine {
                continue;
            }
            let count = self
                .neighbors(idx)
                .iter()
                .filter(|&&n| self.cells[n].mine)
                .count();
            self.cells[idx].adjacent = count as u8;
        }
    }

    /// Reveal the cell at (column, row), flooding connected blank regions
    ///
    /// The first open of a game triggers mine placement with this cell
    /// excluded. A direct mine hit marks the cell and ends the game; the
    /// flood never crosses a flagged cell and never reaches a mine on its
    /// own, since it only expands through zero-count cells.
    pub fn open(&mut self, col: usize, row: usize) {
        if !self.in_bounds(col, row) {
            return;
        }
        let idx = self.index(col, row);
        if self.phase == Phase::AwaitingFirstMove {
            self.place(idx);
        }
        if self.phase != Phase::Playing {
            return;
        }
        // explicit worklist rather than recursion, so the worst case is
        // bounded by total cell count and not stack depth
        let mut work = vec![idx];
        while let Some(i) = work.pop() {
            let cell = self.cells[i];
            if cell.is_opened() || cell.is_flagged() {
                continue;
            }
            self.cells[i].open();
            if cell.mine {
                self.cells[i].outcome = Outcome::FirstHit;
                self.phase = Phase::Lost;
                self.clock_halt();
                debug!("mine hit at {:?}", self.position(i));
                return;
            }
            if cell.adjacent == 0 {
                work.extend(self.neighbors(i));
            }
        }
    }

    /// Chord resolution on an opened numbered cell
    ///
    /// If closed + flagged neighbors match the number, the closed ones must
    /// all be mines and get auto-flagged; else if flagged neighbors alone
    /// match, the rest are opened through the reveal path. A misplaced flag
    /// makes that second branch detonate a mine and lose the game.
    pub fn chord(&mut self, col: usize, row: usize) {
        if !self.in_bounds(col, row) || self.phase != Phase::Playing {
            return;
        }
        let idx = self.index(col, row);
        let cell = self.cells[idx];
        if !cell.is_opened() || cell.adjacent == 0 {
            return;
        }
        let neighbors = self.neighbors(idx);
        let flags = neighbors
            .iter()
            .filter(|&&n| self.cells[n].is_flagged())
            .count();
        let closed = neighbors
            .iter()
            .filter(|&&n| self.cells[n].is_closed())
            .count();
        if closed + flags == cell.adjacent as usize {
            for &n in &neighbors {
                if self.cells[n].is_closed() {
                    self.cells[n].concealment = Concealment::Flagged;
                }
            }
        } else if flags == cell.adjacent as usize {
            for &n in &neighbors {
                let (nc, nr) = self.position(n);
                self.open(nc, nr);
            }
        }
    }

    /// Cycle the flag mark of the addressed cell
    pub fn mark(&mut self, idx: usize) {
        if idx >= self.cells.len() || self.phase != Phase::Playing {
            return;
        }
        self.cells[idx].mark();
    }

    /// True once every non-mine cell is opened; the first truth marks all
    /// mines as saved and ends the game. Safe to call repeatedly.
    pub fn is_win(&mut self) -> bool {
        match self.phase {
            Phase::Won => return true,
            Phase::Playing => {}
            _ => return false,
        }
        let opened = self.cells.iter().filter(|c| c.is_opened()).count();
        if opened + self.config.mines != self.config.total() {
            return false;
        }
        for cell in &mut self.cells {
            if cell.mine {
                cell.outcome = Outcome::Saved;
            }
        }
        self.phase = Phase::Won;
        self.clock_halt();
        debug!("game won in {}s", self.elapsed.as_secs());
        true
    }

    /// True only after a loss; the first call after the losing open runs the
    /// terminal resolution pass: unopened mines detonate, flagged mines are
    /// saved, flags on safe cells are exposed as wrong. Safe to call
    /// repeatedly.
    pub fn is_game_over(&mut self) -> bool {
        if self.phase != Phase::Lost {
            return false;
        }
        for cell in &mut self.cells {
            match (cell.mine, cell.concealment) {
                (true, Concealment::Closed) | (true, Concealment::Questioned) => {
                    cell.open();
                    cell.outcome = Outcome::Detonated;
                }
                (true, Concealment::Flagged) => cell.outcome = Outcome::Saved,
                (false, Concealment::Flagged) => cell.outcome = Outcome::WrongFlag,
                _ => {}
            }
        }
        true
    }

    /// Re-conceal the whole grid for a replay of the same minefield
    pub fn reset(&mut self) {
        let placed = self.cells.iter().any(|c| c.mine);
        for cell in &mut self.cells {
            cell.concealment = Concealment::Closed;
            cell.outcome = Outcome::None;
        }
        self.phase = if placed {
            Phase::Playing
        } else {
            Phase::AwaitingFirstMove
        };
        self.start = None;
        self.elapsed = Duration::ZERO;
        if self.phase == Phase::Playing {
            self.clock_run();
        }
    }

    /// Suspend or resume play; only meaningful between Playing and Paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                self.clock_halt();
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                self.clock_run();
            }
            _ => {}
        }
    }

    /// Presentation tag for one cell; outcome marks override concealment
    pub fn glyph(&self, idx: usize) -> Glyph {
        let cell = self.cells[idx];
        match cell.outcome {
            Outcome::FirstHit => return Glyph::FirstMine,
            Outcome::Saved => return Glyph::SavedMine,
            Outcome::Detonated => return Glyph::Detonated,
            Outcome::WrongFlag => return Glyph::WrongFlag,
            Outcome::None => {}
        }
        match cell.concealment {
            Concealment::Closed => Glyph::Hidden,
            Concealment::Flagged => Glyph::Flag,
            Concealment::Questioned => Glyph::Question,
            Concealment::Opened => {
                if cell.mine {
                    Glyph::Mine
                } else if cell.adjacent == 0 {
                    Glyph::Blank
                } else {
                    Glyph::Digit(cell.adjacent)
                }
            }
        }
    }

    /// Snapshot of the whole grid for the widget layer
    pub fn glyphs(&self) -> Vec<Glyph> {
        (0..self.cells.len()).map(|i| self.glyph(i)).collect()
    }

    /// Mine counter display value: total mines minus flags placed
    /// Negative when the player over-flags
    pub fn mines_left(&self) -> isize {
        let flags = self
            .cells
            .iter()
            .filter(|c| c.is_flagged() || c.outcome == Outcome::Saved)
            .count();
        self.config.mines as isize - flags as isize
    }

    /// Whole seconds of play time, excluding paused intervals
    pub fn elapsed_secs(&self) -> u64 {
        let running = self.start.map_or(Duration::ZERO, |t0| t0.elapsed());
        (self.elapsed + running).as_secs()
    }

    fn clock_run(&mut self) {
        if self.start.is_none() {
            self.start = Some(Instant::now());
        }
    }

    fn clock_halt(&mut self) {
        if let Some(t0) = self.start.take() {
            self.elapsed += t0.elapsed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // deterministic field: mines at the given positions, phase Playing
    fn field_with_mines(cols: usize, rows: usize, mines: &[(usize, usize)]) -> Field {
        let config = BoardConfig {
            cols,
            rows,
            mines: mines.len(),
        };
        let mut field = Field::new(config);
        for &(col, row) in mines {
            let idx = field.index(col, row);
            field.cells[idx].mine = true;
        }
        field.compute_adjacency();
        field.phase = Phase::Playing;
        field
    }

    #[test]
    fn first_open_places_mines_and_excludes_target() {
        for _ in 0..50 {
            let mut field = Field::new(BoardConfig::clamped(8, 8, 10));
            field.open(3, 4);
            let idx = field.index(3, 4);
            assert!(!field.cells[idx].mine);
            assert!(field.cells[idx].is_opened());
            let mines = field.cells.iter().filter(|c| c.mine).count();
            assert_eq!(mines, 10);
            assert!(matches!(field.phase(), Phase::Playing | Phase::Won));
        }
    }

    #[test]
    fn adjacency_counts_clip_at_edges() {
        let field = field_with_mines(3, 3, &[(0, 0), (2, 2)]);
        let at = |c, r| field.cells[field.index(c, r)].adjacent;
        assert_eq!(at(1, 0), 1);
        assert_eq!(at(1, 1), 2);
        assert_eq!(at(2, 0), 0);
        assert_eq!(at(0, 2), 0);
        assert_eq!(at(1, 2), 1);
    }

    #[test]
    fn blank_open_floods_zero_region_and_numbered_border() {
        // mine in the far corner of a 4x4 grid; everything else is one
        // connected zero region plus its numbered border
        let mut field = field_with_mines(4, 4, &[(3, 3)]);
        field.open(0, 0);
        for idx in 0..16 {
            let cell = field.cells[idx];
            if cell.mine {
                assert!(!cell.is_opened());
            } else {
                assert!(cell.is_opened(), "cell {} not revealed", idx);
            }
        }
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // two mines split a 5x1 strip: zero region on the left only
        let mut field = field_with_mines(5, 1, &[(2, 0), (4, 0)]);
        field.open(0, 0);
        assert!(field.cells[field.index(0, 0)].is_opened());
        assert!(field.cells[field.index(1, 0)].is_opened());
        assert!(!field.cells[field.index(2, 0)].is_opened());
        assert!(!field.cells[field.index(3, 0)].is_opened());
    }

    #[test]
    fn flood_does_not_cross_flagged_cells() {
        let mut field = field_with_mines(4, 4, &[(3, 3)]);
        let flagged = field.index(1, 1);
        field.cells[flagged].concealment = Concealment::Flagged;
        field.open(0, 0);
        assert!(!field.cells[flagged].is_opened());
    }

    #[test]
    fn direct_mine_hit_loses_and_marks_first_hit() {
        let mut field = field_with_mines(3, 3, &[(1, 1)]);
        field.open(1, 1);
        assert_eq!(field.phase(), Phase::Lost);
        let idx = field.index(1, 1);
        assert_eq!(field.cells[idx].outcome, Outcome::FirstHit);
        assert!(field.cells[idx].is_opened());
    }

    #[test]
    fn out_of_bounds_addressing_is_a_no_op() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        field.open(5, 5);
        field.chord(9, 0);
        field.mark(100);
        assert_eq!(field.phase(), Phase::Playing);
        assert!(field.cells.iter().all(|c| !c.is_opened()));
    }

    #[test]
    fn opening_all_safe_cells_wins_without_forcing_the_mine() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        for row in 0..3 {
            for col in 0..3 {
                if (col, row) != (0, 0) {
                    field.open(col, row);
                }
            }
        }
        assert!(field.is_win());
        assert_eq!(field.phase(), Phase::Won);
        let mine = field.index(0, 0);
        assert!(!field.cells[mine].is_opened());
        assert_eq!(field.cells[mine].outcome, Outcome::Saved);
    }

    #[test]
    fn chord_auto_flags_when_closed_plus_flags_match() {
        // 3x1 strip: middle cell shows 2, both closed neighbors are mines
        let mut field = field_with_mines(3, 1, &[(0, 0), (2, 0)]);
        field.open(1, 0);
        field.chord(1, 0);
        assert!(field.cells[field.index(0, 0)].is_flagged());
        assert!(field.cells[field.index(2, 0)].is_flagged());
        assert_eq!(field.phase(), Phase::Playing);
    }

    #[test]
    fn chord_opens_remaining_neighbors_when_flags_match() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        field.mark(field.index(0, 0));
        field.open(1, 1);
        field.chord(1, 1);
        for idx in 0..9 {
            if idx == field.index(0, 0) {
                assert!(!field.cells[idx].is_opened());
            } else {
                assert!(field.cells[idx].is_opened());
            }
        }
        assert!(field.is_win());
    }

    #[test]
    fn chord_with_misplaced_flag_detonates() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        // flag the wrong neighbor of the 1-cell at (1,1)
        field.mark(field.index(2, 2));
        field.open(1, 1);
        field.chord(1, 1);
        assert_eq!(field.phase(), Phase::Lost);
    }

    #[test]
    fn chord_on_closed_or_blank_cells_is_a_no_op() {
        let mut field = field_with_mines(4, 4, &[(3, 3)]);
        field.chord(0, 0);
        assert!(field.cells.iter().all(|c| !c.is_opened()));
        field.open(0, 0);
        let opened: Vec<bool> = field.cells.iter().map(|c| c.is_opened()).collect();
        field.chord(0, 0);
        let after: Vec<bool> = field.cells.iter().map(|c| c.is_opened()).collect();
        assert_eq!(opened, after);
    }

    #[test]
    fn flag_cycle_returns_to_closed_and_protects_from_open() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        let idx = field.index(2, 2);
        field.mark(idx);
        assert_eq!(field.cells[idx].concealment, Concealment::Flagged);
        field.open(2, 2);
        assert!(!field.cells[idx].is_opened());
        field.mark(idx);
        assert_eq!(field.cells[idx].concealment, Concealment::Questioned);
        field.mark(idx);
        assert_eq!(field.cells[idx].concealment, Concealment::Closed);
    }

    #[test]
    fn questioned_cells_can_be_opened() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        let idx = field.index(2, 2);
        field.mark(idx);
        field.mark(idx);
        field.open(2, 2);
        assert!(field.cells[idx].is_opened());
    }

    #[test]
    fn mark_is_gated_while_paused() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        field.toggle_pause();
        assert_eq!(field.phase(), Phase::Paused);
        let idx = field.index(1, 1);
        field.mark(idx);
        assert_eq!(field.cells[idx].concealment, Concealment::Closed);
        field.toggle_pause();
        assert_eq!(field.phase(), Phase::Playing);
    }

    #[test]
    fn loss_resolution_marks_each_mine_kind() {
        let mut field = field_with_mines(4, 1, &[(0, 0), (2, 0)]);
        field.mark(field.index(0, 0)); // correct flag, will be saved
        field.mark(field.index(3, 0)); // wrong flag on a safe cell
        field.open(2, 0); // detonate directly
        assert_eq!(field.phase(), Phase::Lost);
        assert!(field.is_game_over());
        assert_eq!(field.cells[field.index(0, 0)].outcome, Outcome::Saved);
        assert_eq!(field.cells[field.index(2, 0)].outcome, Outcome::FirstHit);
        assert_eq!(field.cells[field.index(3, 0)].outcome, Outcome::WrongFlag);
        assert_eq!(field.glyph(field.index(0, 0)), Glyph::SavedMine);
        assert_eq!(field.glyph(field.index(2, 0)), Glyph::FirstMine);
        assert_eq!(field.glyph(field.index(3, 0)), Glyph::WrongFlag);
    }

    #[test]
    fn unflagged_mines_detonate_on_resolution() {
        let mut field = field_with_mines(4, 1, &[(0, 0), (2, 0)]);
        field.open(0, 0);
        assert!(field.is_game_over());
        let other = field.index(2, 0);
        assert!(field.cells[other].is_opened());
        assert_eq!(field.cells[other].outcome, Outcome::Detonated);
    }

    #[test]
    fn termination_checks_are_idempotent() {
        let mut field = field_with_mines(3, 1, &[(0, 0)]);
        field.open(1, 0);
        field.open(2, 0);
        assert!(field.is_win());
        let snapshot = field.glyphs();
        assert!(field.is_win());
        assert!(!field.is_game_over());
        assert_eq!(field.glyphs(), snapshot);

        let mut field = field_with_mines(3, 1, &[(0, 0)]);
        field.open(0, 0);
        assert!(field.is_game_over());
        let snapshot = field.glyphs();
        assert!(field.is_game_over());
        assert!(!field.is_win());
        assert_eq!(field.glyphs(), snapshot);
    }

    #[test]
    fn win_is_not_claimed_after_a_loss() {
        let mut field = field_with_mines(2, 1, &[(0, 0)]);
        field.open(0, 0);
        assert!(field.is_game_over());
        // resolution opened the mine, so opened + mines == total now
        assert!(!field.is_win());
        assert_eq!(field.phase(), Phase::Lost);
    }

    #[test]
    fn reset_replays_the_same_minefield() {
        let mut field = field_with_mines(3, 3, &[(0, 0)]);
        field.open(1, 1);
        field.mark(field.index(2, 2));
        field.reset();
        assert_eq!(field.phase(), Phase::Playing);
        assert!(field.cells.iter().all(|c| c.concealment == Concealment::Closed));
        assert!(field.cells[field.index(0, 0)].mine);
        assert_eq!(field.cells[field.index(1, 1)].adjacent, 1);
    }

    #[test]
    fn reset_before_placement_keeps_awaiting_first_move() {
        let mut field = Field::new(BoardConfig::clamped(8, 8, 10));
        field.reset();
        assert_eq!(field.phase(), Phase::AwaitingFirstMove);
    }

    #[test]
    fn mines_left_counts_flags_and_goes_negative() {
        let mut field = field_with_mines(4, 4, &[(0, 0), (1, 0)]);
        assert_eq!(field.mines_left(), 2);
        field.mark(field.index(2, 2));
        field.mark(field.index(3, 3));
        field.mark(field.index(0, 3));
        assert_eq!(field.mines_left(), -1);
    }

    #[test]
    fn config_clamps_hold_at_range_edges() {
        let cfg = BoardConfig::clamped(100, 1, 10_000);
        assert_eq!(cfg.cols, MAX_COLS);
        assert_eq!(cfg.rows, MIN_ROWS);
        assert_eq!(cfg.mines, max_mines(MAX_COLS, MIN_ROWS));
        let cfg = BoardConfig::clamped(0, 0, 0);
        assert_eq!((cfg.cols, cfg.rows, cfg.mines), (MIN_COLS, MIN_ROWS, MIN_MINES));
    }
}
