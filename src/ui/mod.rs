mod button;

pub use button::Button;

use crate::domain::GRID_SIZE;
use crate::input::Control;

/// Side of one cell square on the canvas, in pixels
pub const CELL_SIZE: f32 = 14.0;
/// Canvas side in pixels (64 cells of 14px)
pub const CANVAS_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;
pub const OUTLINE_THICKNESS: f32 = 0.4;
/// Fill squares are inset by this much from the cell outline
pub const FILL_INSET: f32 = 1.0;
pub const FILL_SIZE: f32 = CELL_SIZE - 2.0 * FILL_INSET;

pub const TOOLBAR_HEIGHT: f32 = 48.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;

/// Top-left corner of the canvas in window coordinates
pub const CANVAS_ORIGIN: (f32, f32) = (0.0, TOOLBAR_HEIGHT);

pub const WINDOW_WIDTH: i32 = CANVAS_SIZE as i32;
pub const WINDOW_HEIGHT: i32 = (TOOLBAR_HEIGHT + CANVAS_SIZE) as i32;

/// Create the toolbar buttons, left to right: Start, Stop, Pause
pub fn create_buttons() -> Vec<Button> {
    let y = (TOOLBAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    [Control::Start, Control::Stop, Control::Pause]
        .into_iter()
        .enumerate()
        .map(|(idx, control)| {
            let x = BUTTON_GAP + idx as f32 * (BUTTON_WIDTH + BUTTON_GAP);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, control)
        })
        .collect()
}
