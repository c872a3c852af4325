use log::debug;
use macroquad::prelude::*;

use crate::application::{RunState, Simulation};
use crate::domain::GRID_SIZE;
use crate::ui::{Button, CANVAS_ORIGIN, CELL_SIZE};

/// The three triggers of the controls surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
    Pause,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Stop => "Stop",
            Control::Pause => "Pause",
        }
    }

    /// Run state this control leads to
    pub fn target(self) -> RunState {
        match self {
            Control::Start => RunState::Running,
            Control::Stop => RunState::Stopped,
            Control::Pause => RunState::Paused,
        }
    }

    /// Apply the control's transition to the simulation
    pub fn apply(self, sim: Simulation) -> Simulation {
        match self {
            Control::Start => sim.start(),
            Control::Stop => sim.stop(),
            Control::Pause => sim.pause(),
        }
    }
}

/// Map a canvas-relative pixel to `(row, col)`: x selects the column,
/// y selects the row. Inputs are expected to be non-negative.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32) -> (usize, usize) {
    debug_assert!(x >= 0.0 && y >= 0.0 && cell_size > 0.0);
    let row = (y / cell_size).floor() as usize;
    let col = (x / cell_size).floor() as usize;
    (row, col)
}

/// Cell under a canvas-relative pixel, `None` when the pixel is off the canvas
pub fn canvas_cell_at(x: f32, y: f32) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = pixel_to_cell(x, y, CELL_SIZE);
    (row < GRID_SIZE && col < GRID_SIZE).then_some((row, col))
}

/// Toggle the cell under a window-space click, if any
pub fn click_canvas(sim: &mut Simulation, mouse_pos: (f32, f32)) -> bool {
    let (x, y) = (mouse_pos.0 - CANVAS_ORIGIN.0, mouse_pos.1 - CANVAS_ORIGIN.1);
    match canvas_cell_at(x, y) {
        Some((row, col)) => sim.toggle_cell(row, col),
        None => {
            debug!("click at ({x}, {y}) is off the canvas");
            false
        }
    }
}

/// Handle a left click on the canvas
pub fn handle_canvas_click(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        click_canvas(sim, mouse_pos);
    }
}

/// Process keyboard shortcuts functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    let bindings: [(KeyCode, Control); 3] = [
        (KeyCode::Enter, Control::Start),
        (KeyCode::Escape, Control::Stop),
        (KeyCode::P, Control::Pause),
    ];

    bindings.iter().fold(sim, |s, (key, control)| {
        if is_key_pressed(*key) { control.apply(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(sim: Simulation, buttons: &[Button], mouse_pos: (f32, f32)) -> Simulation {
    buttons.iter().fold(sim, |s, btn| {
        if btn.is_clicked(mouse_pos) { btn.control().apply(s) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::ui::CANVAS_SIZE;

    #[test]
    fn test_pixel_to_cell_floor_division() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 14.0), (0, 0));
        assert_eq!(pixel_to_cell(13.0, 13.0, 14.0), (0, 0));
        assert_eq!(pixel_to_cell(13.9, 13.9, 14.0), (0, 0));
        assert_eq!(pixel_to_cell(895.0, 895.0, 14.0), (63, 63));
    }

    #[test]
    fn test_x_is_column_y_is_row() {
        assert_eq!(pixel_to_cell(14.0, 0.0, 14.0), (0, 1));
        assert_eq!(pixel_to_cell(0.0, 14.0, 14.0), (1, 0));
        assert_eq!(pixel_to_cell(30.0, 100.0, 14.0), (7, 2));
    }

    #[test]
    fn test_canvas_cell_at_bounds() {
        assert_eq!(canvas_cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(canvas_cell_at(CANVAS_SIZE - 0.5, 0.0), Some((0, GRID_SIZE - 1)));
        assert_eq!(canvas_cell_at(CANVAS_SIZE, 0.0), None);
        assert_eq!(canvas_cell_at(0.0, CANVAS_SIZE + 3.0), None);
        assert_eq!(canvas_cell_at(-1.0, 5.0), None);
    }

    #[test]
    fn test_click_canvas_offsets_by_origin() {
        let mut sim = Simulation::new();
        let click = (CANVAS_ORIGIN.0 + 20.0, CANVAS_ORIGIN.1 + 3.0);
        assert!(click_canvas(&mut sim, click));
        assert_eq!(sim.grid[(0, 1)], Cell::Alive);
        assert_eq!(sim.grid.population(), 1);
    }

    #[test]
    fn test_click_in_toolbar_is_ignored() {
        let mut sim = Simulation::new();
        assert!(!click_canvas(&mut sim, (20.0, CANVAS_ORIGIN.1 - 1.0)));
        assert!(sim.grid.is_empty());
    }

    #[test]
    fn test_click_rejected_while_running() {
        let mut sim = Simulation::new().start();
        let click = (CANVAS_ORIGIN.0 + 20.0, CANVAS_ORIGIN.1 + 3.0);
        assert!(!click_canvas(&mut sim, click));
        assert!(sim.grid.is_empty());
    }

    #[test]
    fn test_controls_reach_their_target() {
        for control in [Control::Start, Control::Pause, Control::Stop] {
            let sim = control.apply(Simulation::new().start());
            assert_eq!(sim.state, control.target());
        }
    }
}
