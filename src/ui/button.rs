use macroquad::prelude::*;

use crate::input::Control;

/// Toolbar button bound to one simulation control
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    control: Control,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, control: Control) -> Self {
        Self { x, y, width, height, control }
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Hit test against a window-space point
    pub fn contains(&self, point: (f32, f32)) -> bool {
        (self.x..self.x + self.width).contains(&point.0)
            && (self.y..self.y + self.height).contains(&point.1)
    }

    /// Draw button; `active` marks the control matching the current run state
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let fill = match (active, self.contains(mouse_pos)) {
            (true, _) => Color::from_rgba(46, 125, 50, 255),
            (false, true) => Color::from_rgba(100, 149, 237, 255),
            (false, false) => Color::from_rgba(70, 130, 180, 255),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, WHITE);

        let label = self.control.label();
        let text_size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
