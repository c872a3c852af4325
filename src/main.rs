use log::info;
use macroquad::prelude::*;
use life_canvas::{Simulation, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ui::WINDOW_WIDTH,
        window_height: ui::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    info!("starting with a {0}x{0} grid", life_canvas::GRID_SIZE);

    let mut sim = Simulation::new();
    let buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        // Controls first, so a stop in this frame beats a due advance
        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        sim = input::process_keyboard_input(sim);
        input::handle_canvas_click(&mut sim, mouse_pos);

        sim = sim.tick(get_frame_time());

        clear_background(Color::from_rgba(15, 15, 15, 255));
        rendering::draw_grid(&sim.grid);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
