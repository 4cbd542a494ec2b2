// Symbolic event vocabulary and the observer dispatch hub
// Raw terminal input becomes exactly one symbolic event per tick; the model
// applies it to the minefield and broadcasts it to every subscriber

use crossterm::event::Event as TermEvent;
use log::debug;
use ratatui::backend::CrosstermBackend;
use ratatui::Frame;
use std::io::Stdout;

use crate::xms_config::Difficulty;
use crate::xms_field::{BoardConfig, Concealment, Field};

/// Frame type the widget layer draws onto
pub type UiFrame<'a> = Frame<'a, CrosstermBackend<Stdout>>;

/// Closed vocabulary of symbolic events
///
/// Payload-free by design: widgets that need to say *where* something
/// happened record it internally and expose it through the narrow query
/// hooks on [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing to report this tick
    Nil,
    /// Periodic heartbeat emitted when no input arrived within the poll window
    Tick,
    Quit,
    Resize,
    NewGame,
    Reset,
    Pause,
    /// Modal dialog acknowledged
    Dismiss,
    IncRows,
    DecRows,
    IncCols,
    DecCols,
    IncMines,
    DecMines,
    PresetBeginner,
    PresetIntermediate,
    PresetExpert,
    /// Left button released over a minefield cell
    LeftReleased,
    /// Right button released over a minefield cell
    RightReleased,
}

/// Capability every subscriber widget implements
///
/// `input` translates raw terminal input into at most one symbolic event;
/// `update` resynchronizes presentation state after any accepted event,
/// regardless of which widget produced it.
pub trait Observer {
    /// Called once when attached, with the current field state
    fn setup(&mut self, _field: &Field) {}

    /// Claim a raw input by returning a non-[`Event::Nil`] event
    fn input(&mut self, _raw: &TermEvent) -> Event {
        Event::Nil
    }

    /// Refresh presentation state from the field after an accepted event
    fn update(&mut self, field: &Field, event: Event);

    fn render(&mut self, frame: &mut UiFrame<'_>);

    /// Cell index the last claimed pointer event landed on, if this widget
    /// does minefield hit-testing
    fn hit_cell(&self) -> Option<usize> {
        None
    }

    /// Pending board geometry, if this widget owns the configuration steppers
    fn pending_config(&self) -> Option<BoardConfig> {
        None
    }
}

/// The model: owns the minefield and the subscriber list
pub struct Mines {
    field: Field,
    subscribers: Vec<Box<dyn Observer>>,
}

impl Mines {
    pub fn new(config: BoardConfig) -> Self {
        Mines {
            field: Field::new(config),
            subscribers: Vec::new(),
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn attach(&mut self, mut subscriber: Box<dyn Observer>) {
        subscriber.setup(&self.field);
        self.subscribers.push(subscriber);
    }

    /// Poll subscribers in attach order; the first non-nil claim wins,
    /// so each raw input yields at most one symbolic event
    pub fn translate(&mut self, raw: &TermEvent) -> Event {
        for subscriber in &mut self.subscribers {
            let event = subscriber.input(raw);
            if event != Event::Nil {
                debug!("input claimed: {:?}", event);
                return event;
            }
        }
        Event::Nil
    }

    /// Apply one symbolic event to the field; returns whether state that
    /// warrants a redraw changed
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::NewGame => {
                let config = self.pending_config().unwrap_or(self.field.config());
                self.field = Field::new(config);
                true
            }
            Event::PresetBeginner => {
                self.field = Field::new(Difficulty::Beginner.board_config());
                true
            }
            Event::PresetIntermediate => {
                self.field = Field::new(Difficulty::Intermediate.board_config());
                true
            }
            Event::PresetExpert => {
                self.field = Field::new(Difficulty::Expert.board_config());
                true
            }
            Event::Reset => {
                self.field.reset();
                true
            }
            Event::Pause => {
                self.field.toggle_pause();
                true
            }
            Event::Dismiss => {
                // acknowledging the pause dialog resumes play; win/loss
                // dialogs only hide, which the board view handles on update
                self.field.toggle_pause();
                true
            }
            Event::LeftReleased => {
                if let Some(idx) = self.hit_cell() {
                    let (col, row) = self.field.position(idx);
                    match self.field.cell(idx).map(|c| c.concealment()) {
                        Some(Concealment::Opened) => self.field.chord(col, row),
                        _ => self.field.open(col, row),
                    }
                    let _ = self.field.is_win() || self.field.is_game_over();
                    true
                } else {
                    false
                }
            }
            Event::RightReleased => {
                if let Some(idx) = self.hit_cell() {
                    self.field.mark(idx);
                    true
                } else {
                    false
                }
            }
            // stepper values live in the status line; the event still dirties
            // the screen so the new labels get drawn
            Event::IncRows
            | Event::DecRows
            | Event::IncCols
            | Event::DecCols
            | Event::IncMines
            | Event::DecMines => true,
            Event::Tick | Event::Resize => true,
            Event::Quit | Event::Nil => false,
        }
    }

    /// Broadcast an accepted event to every subscriber
    pub fn notify(&mut self, event: Event) {
        let field = &self.field;
        for subscriber in &mut self.subscribers {
            subscriber.update(field, event);
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        for subscriber in &mut self.subscribers {
            subscriber.render(frame);
        }
    }

    fn hit_cell(&self) -> Option<usize> {
        self.subscribers.iter().find_map(|s| s.hit_cell())
    }

    fn pending_config(&self) -> Option<BoardConfig> {
        self.subscribers.iter().find_map(|s| s.pending_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xms_field::{Glyph, Phase};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        claims: Event,
        log: Log,
        hit: Option<usize>,
        pending: Option<BoardConfig>,
    }

    impl Probe {
        fn new(name: &'static str, claims: Event, log: &Log) -> Box<Self> {
            Box::new(Probe {
                name,
                claims,
                log: Rc::clone(log),
                hit: None,
                pending: None,
            })
        }
    }

    impl Observer for Probe {
        fn input(&mut self, _raw: &TermEvent) -> Event {
            self.log.borrow_mut().push(format!("{}:input", self.name));
            self.claims
        }

        fn update(&mut self, _field: &Field, event: Event) {
            self.log
                .borrow_mut()
                .push(format!("{}:update:{:?}", self.name, event));
        }

        fn render(&mut self, _frame: &mut UiFrame<'_>) {}

        fn hit_cell(&self) -> Option<usize> {
            self.hit
        }

        fn pending_config(&self) -> Option<BoardConfig> {
            self.pending
        }
    }

    fn key() -> TermEvent {
        TermEvent::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
    }

    fn model() -> Mines {
        Mines::new(BoardConfig::clamped(8, 8, 10))
    }

    // dense enough that a first click can never flood the whole board,
    // so the phase after one open is always Playing
    fn dense_model() -> Mines {
        Mines::new(BoardConfig::clamped(5, 5, 23))
    }

    #[test]
    fn first_claiming_subscriber_short_circuits_polling() {
        let log: Log = Rc::default();
        let mut mines = model();
        mines.attach(Probe::new("a", Event::Nil, &log));
        mines.attach(Probe::new("b", Event::Pause, &log));
        mines.attach(Probe::new("c", Event::Quit, &log));

        let event = mines.translate(&key());

        assert_eq!(event, Event::Pause);
        assert_eq!(&*log.borrow(), &["a:input", "b:input"]);
    }

    #[test]
    fn unclaimed_input_translates_to_nil() {
        let log: Log = Rc::default();
        let mut mines = model();
        mines.attach(Probe::new("a", Event::Nil, &log));

        assert_eq!(mines.translate(&key()), Event::Nil);
    }

    #[test]
    fn accepted_events_are_broadcast_to_all_subscribers() {
        let log: Log = Rc::default();
        let mut mines = model();
        mines.attach(Probe::new("a", Event::Nil, &log));
        mines.attach(Probe::new("b", Event::Nil, &log));

        mines.notify(Event::Tick);

        assert_eq!(&*log.borrow(), &["a:update:Tick", "b:update:Tick"]);
    }

    #[test]
    fn new_game_applies_the_pending_configuration_atomically() {
        let log: Log = Rc::default();
        let mut mines = model();
        let mut probe = Probe::new("steppers", Event::Nil, &log);
        probe.pending = Some(BoardConfig::clamped(12, 20, 30));
        mines.attach(probe);

        assert!(mines.apply(Event::NewGame));

        let config = mines.field().config();
        assert_eq!((config.cols, config.rows, config.mines), (12, 20, 30));
        assert_eq!(mines.field().phase(), Phase::AwaitingFirstMove);
    }

    #[test]
    fn presets_rebuild_the_field() {
        let log: Log = Rc::default();
        let mut mines = model();
        mines.attach(Probe::new("a", Event::Nil, &log));

        assert!(mines.apply(Event::PresetExpert));

        let config = mines.field().config();
        assert_eq!((config.cols, config.rows, config.mines), (16, 30, 99));
    }

    #[test]
    fn left_release_opens_the_widget_reported_cell() {
        let log: Log = Rc::default();
        let mut mines = dense_model();
        let mut probe = Probe::new("board", Event::Nil, &log);
        probe.hit = Some(0);
        mines.attach(probe);

        assert!(mines.apply(Event::LeftReleased));

        assert_eq!(mines.field().phase(), Phase::Playing);
        let cell = mines.field().cell(0).unwrap();
        assert_eq!(cell.concealment(), Concealment::Opened);
        // the excluded first click never lands on a mine
        assert!(matches!(
            mines.field().glyph(0),
            Glyph::Blank | Glyph::Digit(_)
        ));
    }

    #[test]
    fn right_release_cycles_the_flag() {
        let log: Log = Rc::default();
        let mut mines = dense_model();
        let mut probe = Probe::new("board", Event::Nil, &log);
        probe.hit = Some(5);
        mines.attach(probe);

        // flagging is gated until the field is in play
        mines.apply(Event::RightReleased);
        assert_eq!(
            mines.field().cell(5).unwrap().concealment(),
            Concealment::Closed
        );

        mines.apply(Event::LeftReleased); // hit_cell is 5: opens and starts play
        mines.apply(Event::RightReleased);
        // cell 5 opened by the first click, so marking stays a no-op there
        assert_eq!(
            mines.field().cell(5).unwrap().concealment(),
            Concealment::Opened
        );
    }

    #[test]
    fn pointer_events_without_a_hit_cell_are_inert() {
        let log: Log = Rc::default();
        let mut mines = model();
        mines.attach(Probe::new("a", Event::Nil, &log));

        assert!(!mines.apply(Event::LeftReleased));
        assert!(!mines.apply(Event::RightReleased));
        assert_eq!(mines.field().phase(), Phase::AwaitingFirstMove);
    }

    #[test]
    fn pause_and_dismiss_toggle_play() {
        let log: Log = Rc::default();
        let mut mines = dense_model();
        let mut probe = Probe::new("board", Event::Nil, &log);
        probe.hit = Some(0);
        mines.attach(probe);

        mines.apply(Event::LeftReleased);
        assert_eq!(mines.field().phase(), Phase::Playing);
        mines.apply(Event::Pause);
        assert_eq!(mines.field().phase(), Phase::Paused);
        mines.apply(Event::Dismiss);
        assert_eq!(mines.field().phase(), Phase::Playing);
    }

    #[test]
    fn nil_and_quit_do_not_dirty_the_screen() {
        let mut mines = model();
        assert!(!mines.apply(Event::Nil));
        assert!(!mines.apply(Event::Quit));
        assert!(mines.apply(Event::Tick));
    }
}
