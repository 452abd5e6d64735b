use std::time::Duration;

use log::{error, warn};
use macroquad::prelude::*;
use life_sim::{
    Simulation, SimulationConfig,
    ui::{self, Dropdown, PANEL_WIDTH, PATTERN_DROPDOWN_Y},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1020,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut sim = match Simulation::new(SimulationConfig::default()) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot build simulation: {}", err);
            return;
        }
    };

    let pattern_items: Vec<String> = sim.pattern_names().iter().map(|name| name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(
        ui::panel_x() + 10.0,
        PATTERN_DROPDOWN_Y,
        PANEL_WIDTH - 20.0,
        "Patterns",
        pattern_items,
    );
    let mut message: Option<String> = None;

    // The board starts running as soon as the window opens
    sim.start();

    loop {
        let mouse_pos = mouse_position();

        pattern_dropdown.set_position(ui::panel_x() + 10.0, PATTERN_DROPDOWN_Y);
        let buttons = ui::create_buttons();

        let over_dropdown = pattern_dropdown.captures(mouse_pos) || pattern_dropdown.is_open();
        if let Some(name) = pattern_dropdown.update(mouse_pos) {
            message = sim.load_pattern(name).err().map(|err| {
                warn!("pattern rejected: {}", err);
                err.to_string()
            });
        }

        if !over_dropdown {
            input::process_button_clicks(&mut sim, &buttons, mouse_pos);
            if let Some(err) = input::handle_cell_click(&mut sim, mouse_pos) {
                message = Some(err);
            }
        }
        input::process_keyboard_input(&mut sim);

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(12, 12, 12, 255));
        let snapshot = sim.snapshot();
        rendering::draw_board(&snapshot);
        rendering::draw_controls(
            &snapshot,
            sim.generations_per_second(),
            &buttons,
            &pattern_dropdown,
            message.as_deref(),
            mouse_pos,
        );

        next_frame().await;
    }
}
