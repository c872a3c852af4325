use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{
    Button, CANVAS_ORIGIN, CANVAS_SIZE, CELL_SIZE, FILL_INSET, FILL_SIZE, OUTLINE_THICKNESS,
    TOOLBAR_HEIGHT,
};

/// One square to paint, in canvas pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Cell border, stroked
    Outline { x: f32, y: f32, size: f32 },
    /// Alive cell body, filled
    Fill { x: f32, y: f32, size: f32 },
}

/// Draw commands for the whole grid, row-major.
/// Each cell yields its outline, then a fill when alive. Column maps to x
/// and row maps to y for both.
pub fn render_instructions(grid: &Grid) -> impl Iterator<Item = DrawCommand> + '_ {
    grid.iter_cells().flat_map(|(row, col, cell)| {
        let x = col as f32 * CELL_SIZE;
        let y = row as f32 * CELL_SIZE;
        let outline = DrawCommand::Outline { x, y, size: CELL_SIZE };
        let fill = cell.is_alive().then_some(DrawCommand::Fill {
            x: x + FILL_INSET,
            y: y + FILL_INSET,
            size: FILL_SIZE,
        });
        std::iter::once(outline).chain(fill)
    })
}

/// Paint the grid onto the canvas area
pub fn draw_grid(grid: &Grid) {
    let (ox, oy) = CANVAS_ORIGIN;
    let outline_color = Color::from_rgba(60, 60, 60, 255);
    let alive_color = Color::from_rgba(20, 20, 20, 255);

    draw_rectangle(ox, oy, CANVAS_SIZE, CANVAS_SIZE, WHITE);
    for command in render_instructions(grid) {
        match command {
            DrawCommand::Outline { x, y, size } => {
                draw_rectangle_lines(ox + x, oy + y, size, size, OUTLINE_THICKNESS, outline_color);
            }
            DrawCommand::Fill { x, y, size } => {
                draw_rectangle(ox + x, oy + y, size, size, alive_color);
            }
        }
    }
}

/// Draw the toolbar: buttons plus a status line
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, CANVAS_SIZE, TOOLBAR_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, btn.control().target() == sim.state));

    let status = format!(
        "{} | Generation: {} | Alive: {}",
        sim.state.label(),
        sim.generation,
        sim.grid.population()
    );
    let text_x = buttons.last().map_or(0.0, |b| b.x()) + 140.0;
    draw_text(&status, text_x, TOOLBAR_HEIGHT / 2.0 + 6.0, 18.0, LIGHTGRAY);
}
