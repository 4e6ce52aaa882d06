//! Spectrum Clicker — an incremental clicker with seven colour buildings.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::{BUY_BUILDING_BASE, CLICK};
use state::{BuildingKind, SpectrumState};

pub struct SpectrumGame {
    pub state: SpectrumState,
}

impl SpectrumGame {
    pub fn new() -> Self {
        let mut state = SpectrumState::new();
        logic::refresh(&mut state);
        Self { state }
    }
}

impl Default for SpectrumGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SpectrumGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key('c') | InputEvent::Key('C') | InputEvent::Click(CLICK) => {
                logic::click(&mut self.state);
                true
            }
            InputEvent::Key(key) => match BuildingKind::from_key(*key) {
                Some(kind) => {
                    logic::buy_building(&mut self.state, kind);
                    true
                }
                None => false,
            },
            InputEvent::Click(id) => {
                let kind = id
                    .checked_sub(BUY_BUILDING_BASE)
                    .and_then(|idx| BuildingKind::all().get(idx as usize));
                match kind {
                    Some(kind) => {
                        logic::buy_building(&mut self.state, *kind);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
