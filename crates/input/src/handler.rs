//! Intent resolution for the menu, board, and win screens.
//!
//! The same key means different things per screen: Down moves the menu
//! highlight on the difficulty screen and the card cursor on the board.

use crate::map::{Direction, Intent};
use crate::types::{CardId, Difficulty, GameAction, Phase};

/// Card cursor over a row-major grid whose last row may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: CardId,
    columns: usize,
    len: usize,
}

impl Cursor {
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            index: 0,
            columns,
            len,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.grid_columns(), difficulty.card_count())
    }

    pub fn index(&self) -> CardId {
        self.index
    }

    /// Place the cursor on a card (ignored when out of range).
    pub fn set(&mut self, index: CardId) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Move one step; edges clamp rather than wrap.
    pub fn step(&mut self, dir: Direction) {
        if self.columns == 0 || self.len == 0 {
            return;
        }
        let col = self.index % self.columns;
        let row = self.index / self.columns;
        let rows = self.len.div_ceil(self.columns);

        match dir {
            Direction::Left => {
                if col > 0 {
                    self.index -= 1;
                }
            }
            Direction::Right => {
                if col + 1 < self.columns && self.index + 1 < self.len {
                    self.index += 1;
                }
            }
            Direction::Up => {
                if row > 0 {
                    self.index -= self.columns;
                }
            }
            Direction::Down => {
                if self.index + self.columns < self.len {
                    self.index += self.columns;
                } else if row + 1 < rows {
                    // Short last row: land on its last card.
                    self.index = self.len - 1;
                }
            }
        }
    }
}

/// Tracks the menu highlight and the card cursor.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    menu_index: usize,
    cursor: Cursor,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted difficulty on the menu.
    pub fn menu_selection(&self) -> Difficulty {
        Difficulty::ALL[self.menu_index]
    }

    pub fn cursor(&self) -> CardId {
        self.cursor.index()
    }

    /// Resolve an intent for the current phase.
    pub fn handle_intent(&mut self, intent: Intent, phase: Phase) -> Option<GameAction> {
        match phase {
            Phase::Idle => self.handle_menu(intent),
            Phase::Running => match intent {
                Intent::Move(dir) => {
                    self.cursor.step(dir);
                    None
                }
                Intent::Confirm => Some(GameAction::Flip(self.cursor.index())),
                Intent::NewGame => Some(GameAction::Reset),
                Intent::Choose(_) => None,
            },
            Phase::Won => match intent {
                Intent::Confirm | Intent::NewGame => Some(GameAction::Reset),
                _ => None,
            },
        }
    }

    /// A mouse click on card `id`: move the cursor there and flip it.
    pub fn handle_click(&mut self, id: CardId, phase: Phase) -> Option<GameAction> {
        if phase != Phase::Running {
            return None;
        }
        self.cursor.set(id);
        Some(GameAction::Flip(id))
    }

    fn handle_menu(&mut self, intent: Intent) -> Option<GameAction> {
        match intent {
            Intent::Move(Direction::Up) => {
                self.menu_index = self.menu_index.saturating_sub(1);
                None
            }
            Intent::Move(Direction::Down) => {
                self.menu_index = (self.menu_index + 1).min(Difficulty::ALL.len() - 1);
                None
            }
            Intent::Move(_) | Intent::NewGame => None,
            Intent::Confirm => Some(self.start(self.menu_selection())),
            Intent::Choose(difficulty) => Some(self.start(difficulty)),
        }
    }

    fn start(&mut self, difficulty: Difficulty) -> GameAction {
        self.cursor = Cursor::for_difficulty(difficulty);
        if let Some(i) = Difficulty::ALL.iter().position(|d| *d == difficulty) {
            self.menu_index = i;
        }
        GameAction::Start(difficulty)
    }
}
