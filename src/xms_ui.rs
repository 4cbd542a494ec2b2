// Terminal UI: widget observers, hit-testing, and the dispatch loop
// Widgets translate raw crossterm input into symbolic events and redraw
// themselves from field snapshots; the loop in run() is the only place
// events get applied

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
    KeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Spans, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Terminal;
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::xms_color::{digit_color, TermMatch};
use crate::xms_config::{save_config, Config, Difficulty};
use crate::xms_event::{Event, Mines, Observer, UiFrame};
use crate::xms_field::{
    max_mines, BoardConfig, Field, Glyph, Phase, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_MINES, MIN_ROWS,
};

fn hit(rect: Option<Rect>, column: u16, row: u16) -> bool {
    match rect {
        Some(r) => {
            column >= r.x
                && column <= r.x + r.width.saturating_sub(1)
                && row >= r.y
                && row <= r.y + r.height.saturating_sub(1)
        }
        None => false,
    }
}

fn center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

// top status line, center board, bottom info bar
fn screen_chunks(size: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(size);
    (chunks[0], chunks[1], chunks[2])
}

/// Numeric `< label:value >` control with typed clamping
struct Stepper {
    label: &'static str,
    value: usize,
    min: usize,
    max: usize,
    dec_rect: Option<Rect>,
    inc_rect: Option<Rect>,
}

impl Stepper {
    fn new(label: &'static str, value: usize, min: usize, max: usize) -> Self {
        Stepper {
            label,
            value: value.clamp(min, max),
            min,
            max,
            dec_rect: None,
            inc_rect: None,
        }
    }

    fn text(&self) -> String {
        format!("{}:{}", self.label, self.value)
    }

    fn inc(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    fn dec(&mut self) {
        if self.value > self.min {
            self.value -= 1;
        }
    }

    fn set_range(&mut self, min: usize, max: usize) {
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
    }
}

/// Top bar: clickable key-hint buttons plus the geometry steppers
/// Owns the pending board configuration, applied only at NewGame
struct StatusLine {
    buttons: [(&'static str, &'static str, Event); 4],
    button_rects: [Option<Rect>; 4],
    rows: Stepper,
    cols: Stepper,
    mines: Stepper,
    percent: usize,
}

impl StatusLine {
    fn new(config: BoardConfig) -> Self {
        let mut line = StatusLine {
            buttons: [
                ("Q", "Quit", Event::Quit),
                ("P", "Pause", Event::Pause),
                ("R", "Reset", Event::Reset),
                ("N", "New", Event::NewGame),
            ],
            button_rects: [None; 4],
            rows: Stepper::new("Rows", config.rows, MIN_ROWS, MAX_ROWS),
            cols: Stepper::new("Cols", config.cols, MIN_COLS, MAX_COLS),
            mines: Stepper::new(
                "Mines",
                config.mines,
                MIN_MINES,
                max_mines(config.cols, config.rows),
            ),
            percent: 0,
        };
        line.recalc();
        line
    }

    fn pending(&self) -> BoardConfig {
        BoardConfig::clamped(self.cols.value, self.rows.value, self.mines.value)
    }

    // geometry changes move the mine cap; re-clamp and refresh the density
    fn recalc(&mut self) {
        self.mines
            .set_range(MIN_MINES, max_mines(self.cols.value, self.rows.value));
        self.percent = self.pending().mine_percent();
    }

    fn stepper_event(&mut self, column: u16, row: u16) -> Event {
        let targets = [
            (self.rows.inc_rect, Event::IncRows),
            (self.rows.dec_rect, Event::DecRows),
            (self.cols.inc_rect, Event::IncCols),
            (self.cols.dec_rect, Event::DecCols),
            (self.mines.inc_rect, Event::IncMines),
            (self.mines.dec_rect, Event::DecMines),
        ];
        let event = match targets.iter().find(|(r, _)| hit(*r, column, row)) {
            Some(&(_, e)) => e,
            None => return Event::Nil,
        };
        match event {
            Event::IncRows => self.rows.inc(),
            Event::DecRows => self.rows.dec(),
            Event::IncCols => self.cols.inc(),
            Event::DecCols => self.cols.dec(),
            Event::IncMines => self.mines.inc(),
            _ => self.mines.dec(),
        }
        self.recalc();
        event
    }
}

impl Observer for StatusLine {
    fn input(&mut self, raw: &TermEvent) -> Event {
        if let TermEvent::Mouse(me) = raw {
            if me.kind == MouseEventKind::Up(MouseButton::Left) {
                for (i, item) in self.buttons.iter().enumerate() {
                    if hit(self.button_rects[i], me.column, me.row) {
                        return item.2;
                    }
                }
                return self.stepper_event(me.column, me.row);
            }
        }
        Event::Nil
    }

    fn update(&mut self, field: &Field, event: Event) {
        match event {
            // a fresh field means the pending values were just applied,
            // or a preset replaced them; resynchronize either way
            Event::NewGame
            | Event::PresetBeginner
            | Event::PresetIntermediate
            | Event::PresetExpert => {
                let config = field.config();
                self.rows.value = config.rows;
                self.cols.value = config.cols;
                self.mines.value = config.mines;
            }
            _ => {}
        }
        self.recalc();
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = screen_chunks(frame.size()).0;
        let y = area.y + 1;
        let mut x = area.x + 2;
        let key_style = Style::default()
            .fg(Color::Yellow.tmatch())
            .add_modifier(Modifier::BOLD);
        let arrow_style = key_style;
        let mut spans: Vec<Span> = vec![Span::raw(" ")];

        for (i, (key, rest, _)) in self.buttons.iter().enumerate() {
            let w = (key.width() + 2 + rest.width()) as u16;
            self.button_rects[i] = Some(Rect::new(x, y, w, 1));
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::raw(format!(": {}", rest)));
            spans.push(Span::raw("  "));
            x += w + 2;
        }

        for (stepper, label_sep) in [
            (&mut self.rows, " "),
            (&mut self.cols, " "),
            (&mut self.mines, " "),
        ] {
            stepper.dec_rect = Some(Rect::new(x, y, 1, 1));
            spans.push(Span::styled("<", arrow_style));
            x += 1;
            let text = stepper.text();
            let w = text.as_str().width() as u16;
            spans.push(Span::raw(text));
            x += w;
            stepper.inc_rect = Some(Rect::new(x, y, 1, 1));
            spans.push(Span::styled(">", arrow_style));
            x += 1;
            spans.push(Span::raw(label_sep));
            x += label_sep.width() as u16;
        }
        spans.push(Span::raw(format!("{}%", self.percent)));

        let menu = Paragraph::new(Spans::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        frame.render_widget(menu, area);
    }

    fn pending_config(&self) -> Option<BoardConfig> {
        Some(self.pending())
    }
}

/// Modal message box for pause/win/loss, drawn over the board
struct MessageBox {
    visible: bool,
    text: String,
    ok_rect: Option<Rect>,
}

impl MessageBox {
    fn new() -> Self {
        MessageBox {
            visible: false,
            text: String::new(),
            ok_rect: None,
        }
    }

    fn input(&mut self, raw: &TermEvent) -> Event {
        if !self.visible {
            return Event::Nil;
        }
        match raw {
            TermEvent::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) => Event::Dismiss,
            TermEvent::Mouse(me)
                if me.kind == MouseEventKind::Up(MouseButton::Left)
                    && hit(self.ok_rect, me.column, me.row) =>
            {
                Event::Dismiss
            }
            _ => Event::Nil,
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        if !self.visible {
            self.ok_rect = None;
            return;
        }
        let rect = center_rect(26, 7, frame.size());
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::default().borders(Borders::ALL).title("Message"),
            rect,
        );
        let inner = Rect::new(
            rect.x + 1,
            rect.y + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
        );
        let lines = vec![
            Spans::from(Span::raw("")),
            Spans::from(Span::styled(
                self.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        let body = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
        frame.render_widget(body, inner);
        let ok = center_rect(
            8,
            1,
            Rect::new(rect.x, rect.y + rect.height.saturating_sub(2), rect.width, 1),
        );
        self.ok_rect = Some(ok);
        let button = Paragraph::new(Spans::from(Span::styled(
            "[  OK  ]",
            Style::default()
                .fg(Color::Yellow.tmatch())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, ok);
    }
}

/// Minefield widget: owns screen-to-cell hit-testing and the modal dialog
struct BoardView {
    cols: usize,
    rows: usize,
    glyphs: Vec<Glyph>,
    phase: Phase,
    title: String,
    board_rect: Option<Rect>,
    hit_idx: Option<usize>,
    dialog: MessageBox,
    ascii: bool,
}

impl BoardView {
    fn new(ascii: bool) -> Self {
        BoardView {
            cols: 0,
            rows: 0,
            glyphs: Vec::new(),
            phase: Phase::AwaitingFirstMove,
            title: String::new(),
            board_rect: None,
            hit_idx: None,
            dialog: MessageBox::new(),
            ascii,
        }
    }

    fn sync(&mut self, field: &Field) {
        let config = field.config();
        self.cols = config.cols;
        self.rows = config.rows;
        self.glyphs = field.glyphs();
        self.phase = field.phase();
        self.title = Difficulty::matching(config)
            .map(|d| d.name().to_string())
            .unwrap_or_else(|| "Custom".to_string());
    }

    /// Cell index under a screen position; cells are two characters wide
    fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let r = self.board_rect?;
        let inner_x = r.x + 1;
        let inner_y = r.y + 1;
        if row < inner_y || row >= inner_y + self.rows as u16 {
            return None;
        }
        if column < inner_x || column >= inner_x + (self.cols * 2) as u16 {
            return None;
        }
        let col = ((column - inner_x) / 2) as usize;
        let row = (row - inner_y) as usize;
        Some(row * self.cols + col)
    }

    fn face(&self, glyph: Glyph) -> (String, Style) {
        let board_bg = Color::DarkGray.tmatch();
        let open_bg = Color::Gray.tmatch();
        let mine_ch = if self.ascii { "*" } else { "☼" };
        let flag_ch = if self.ascii { "F" } else { "⚑" };
        match glyph {
            Glyph::Hidden => (
                (if self.ascii { "#" } else { "■" }).to_string(),
                Style::default().fg(Color::Gray.tmatch()).bg(board_bg),
            ),
            Glyph::Blank => (" ".to_string(), Style::default().bg(open_bg)),
            Glyph::Digit(n) => (
                n.to_string(),
                Style::default().fg(digit_color(n)).bg(open_bg),
            ),
            Glyph::Flag => (
                flag_ch.to_string(),
                Style::default().fg(Color::Red.tmatch()).bg(board_bg),
            ),
            Glyph::Question => (
                "?".to_string(),
                Style::default().fg(Color::Red.tmatch()).bg(board_bg),
            ),
            Glyph::Mine => (
                mine_ch.to_string(),
                Style::default().fg(Color::Black.tmatch()).bg(open_bg),
            ),
            Glyph::FirstMine => (
                mine_ch.to_string(),
                Style::default().fg(Color::White.tmatch()).bg(Color::Red.tmatch()),
            ),
            Glyph::Detonated => (
                mine_ch.to_string(),
                Style::default().fg(Color::Red.tmatch()).bg(open_bg),
            ),
            Glyph::WrongFlag => (
                "X".to_string(),
                Style::default().fg(Color::Red.tmatch()).bg(open_bg),
            ),
            Glyph::SavedMine => (
                (if self.ascii { "V" } else { "✓" }).to_string(),
                Style::default().fg(Color::Green.tmatch()).bg(open_bg),
            ),
        }
    }
}

impl Observer for BoardView {
    fn setup(&mut self, field: &Field) {
        self.sync(field);
    }

    fn input(&mut self, raw: &TermEvent) -> Event {
        // a visible dialog swallows board input until acknowledged
        if self.dialog.visible {
            return self.dialog.input(raw);
        }
        if let TermEvent::Mouse(me) = raw {
            match me.kind {
                MouseEventKind::Up(MouseButton::Left) => {
                    if let Some(idx) = self.cell_at(me.column, me.row) {
                        self.hit_idx = Some(idx);
                        return Event::LeftReleased;
                    }
                }
                MouseEventKind::Up(MouseButton::Right) => {
                    if let Some(idx) = self.cell_at(me.column, me.row) {
                        self.hit_idx = Some(idx);
                        return Event::RightReleased;
                    }
                }
                _ => {}
            }
        }
        Event::Nil
    }

    fn update(&mut self, field: &Field, event: Event) {
        let phase = field.phase();
        if phase != self.phase {
            self.dialog.visible = matches!(phase, Phase::Paused | Phase::Won | Phase::Lost);
            self.dialog.text = match phase {
                Phase::Paused => "Paused",
                Phase::Won => "You Win",
                Phase::Lost => "Game Over",
                _ => "",
            }
            .to_string();
        } else if event == Event::Dismiss {
            self.dialog.visible = false;
        }
        self.sync(field);
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = screen_chunks(frame.size()).1;
        let board_area = center_rect((self.cols * 2 + 3) as u16, (self.rows + 2) as u16, area);
        self.board_rect = Some(board_area);
        let board_bg = Color::DarkGray.tmatch();

        let mut lines = vec![];
        for row in 0..self.rows {
            let mut spans = vec![];
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                // the minefield stays covered while paused
                let glyph = if self.phase == Phase::Paused {
                    Glyph::Hidden
                } else {
                    self.glyphs[idx]
                };
                let (s, style) = self.face(glyph);
                spans.push(Span::styled(format!(" {}", s), style));
            }
            // padding column so the right edge shares the board background
            spans.push(Span::styled(" ", Style::default().bg(board_bg)));
            lines.push(Spans::from(spans));
        }
        let paragraph = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.clone())
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(paragraph, board_area);
        self.dialog.render(frame);
    }

    fn hit_cell(&self) -> Option<usize> {
        self.hit_idx
    }
}

/// Bottom bar: mine counter, elapsed time, preset best, exit hint
struct InfoBar {
    mines_left: isize,
    secs: u64,
    phase: Phase,
    // session view of the preset best times, seeded from the config records
    bests: Vec<(BoardConfig, u64)>,
    best: Option<u64>,
}

impl InfoBar {
    fn new(bests: Vec<(BoardConfig, u64)>) -> Self {
        InfoBar {
            mines_left: 0,
            secs: 0,
            phase: Phase::AwaitingFirstMove,
            bests,
            best: None,
        }
    }

    fn refresh_best(&mut self, config: BoardConfig) {
        self.best = self
            .bests
            .iter()
            .find(|(c, _)| *c == config)
            .map(|&(_, secs)| secs);
    }
}

impl Observer for InfoBar {
    fn setup(&mut self, field: &Field) {
        self.mines_left = field.mines_left();
        self.refresh_best(field.config());
    }

    fn update(&mut self, field: &Field, _event: Event) {
        self.mines_left = field.mines_left();
        self.secs = field.elapsed_secs();
        let phase = field.phase();
        // mirror the record the session just set so the display stays fresh
        if phase == Phase::Won
            && self.phase != Phase::Won
            && Difficulty::matching(field.config()).is_some()
        {
            let config = field.config();
            match self.bests.iter_mut().find(|(c, _)| *c == config) {
                Some(entry) if entry.1 <= self.secs => {}
                Some(entry) => entry.1 = self.secs,
                None => self.bests.push((config, self.secs)),
            }
        }
        self.phase = phase;
        self.refresh_best(field.config());
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = screen_chunks(frame.size()).2;
        let best_text = match self.best {
            Some(secs) => format!("   Best: {}s", secs),
            None => String::new(),
        };
        let left_text = format!(
            " Mines: {}   Time: {}s{} ",
            self.mines_left, self.secs, best_text
        );
        let right_key = "Esc";
        let right_rest = "Exit";
        let inner_w = area.width.saturating_sub(2) as usize;
        let left_w = left_text.as_str().width();
        let right_w = right_key.width() + 2 + right_rest.width();
        let mid_spaces = if inner_w > left_w + right_w + 1 {
            inner_w - left_w - right_w - 1
        } else {
            1
        };
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::raw(left_text));
        spans.push(Span::raw(" ".repeat(mid_spaces)));
        spans.push(Span::styled(
            right_key.to_string(),
            Style::default()
                .fg(Color::Yellow.tmatch())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {}", right_rest)));
        spans.push(Span::raw(" "));
        let status = Paragraph::new(Text::from(Spans::from(spans)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        frame.render_widget(status, area);
    }
}

/// App-level key bindings, checked before widget polling
fn global_event(raw: &TermEvent) -> Option<Event> {
    match raw {
        TermEvent::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::F(2) | KeyCode::Char('n') => Some(Event::NewGame),
            KeyCode::Char('p') => Some(Event::Pause),
            KeyCode::Char('r') => Some(Event::Reset),
            KeyCode::Char('1') => Some(Event::PresetBeginner),
            KeyCode::Char('2') => Some(Event::PresetIntermediate),
            KeyCode::Char('3') => Some(Event::PresetExpert),
            _ => None,
        },
        TermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

fn resize_warning(frame: &mut UiFrame<'_>, min_w: u16, min_h: u16) {
    let size = frame.size();
    let warn_lines = vec![
        Spans::from(Span::raw("Terminal size too small.")),
        Spans::from(Span::raw(format!("Minimum required: {} x {}", min_w, min_h))),
    ];
    let warn = Paragraph::new(Text::from(warn_lines))
        .block(Block::default().borders(Borders::ALL).title("Resize Terminal"))
        .alignment(Alignment::Center);
    frame.render_widget(Clear, size);
    let w = 40u16.min(size.width.saturating_sub(2));
    let h = 5u16.min(size.height.saturating_sub(2));
    let area = center_rect(w, h, size);
    frame.render_widget(warn, area);
}

pub fn run(cfg: &mut Config) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let board_config = cfg.board_config();
    let mut mines = Mines::new(board_config);
    let bests = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ]
    .iter()
    .filter_map(|d| cfg.get_record(d).map(|secs| (d.board_config(), secs)))
    .collect();
    // attach order fixes the input-claim priority
    mines.attach(Box::new(StatusLine::new(board_config)));
    mines.attach(Box::new(BoardView::new(cfg.ascii_icons)));
    mines.attach(Box::new(InfoBar::new(bests)));

    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let min_w = 80u16;
            let min_h = (mines.field().config().rows as u16 + 8).max(24);
            terminal.draw(|f| {
                let size = f.size();
                if size.width < min_w || size.height < min_h {
                    resize_warning(f, min_w, min_h);
                } else {
                    mines.render(f);
                }
            })?;
            dirty = false;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        let event = if event::poll(timeout)? {
            let raw = event::read()?;
            match global_event(&raw) {
                Some(e) => e,
                None => mines.translate(&raw),
            }
        } else {
            last_tick = Instant::now();
            Event::Tick
        };

        if event == Event::Quit {
            break;
        }
        if event == Event::Nil {
            continue;
        }

        let phase_before = mines.field().phase();
        if mines.apply(event) {
            dirty = true;
        }
        mines.notify(event);

        // record bookkeeping on the transition into Won
        if mines.field().phase() == Phase::Won && phase_before != Phase::Won {
            if let Some(d) = Difficulty::matching(mines.field().config()) {
                if cfg.set_record(&d, mines.field().elapsed_secs()) {
                    save_config(cfg);
                }
            }
        }
        if matches!(
            event,
            Event::NewGame
                | Event::PresetBeginner
                | Event::PresetIntermediate
                | Event::PresetExpert
        ) {
            cfg.remember_board(mines.field().config());
            save_config(cfg);
        }
    }

    save_config(cfg);
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
