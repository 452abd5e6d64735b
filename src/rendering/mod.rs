use macroquad::prelude::*;
use crate::application::{RunState, Snapshot};
use crate::ui::{Button, Dropdown, Control, panel_x, BOARD_MARGIN, CELL_SIZE, PANEL_WIDTH};

const ALIVE: Color = Color::new(0.4, 1.0, 0.2, 1.0);
const DEAD: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the snapshot, row-major from the top-left corner
pub fn draw_board(snapshot: &Snapshot) {
    let width = snapshot.cols as f32 * CELL_SIZE;
    let height = snapshot.rows as f32 * CELL_SIZE;
    draw_rectangle(BOARD_MARGIN, BOARD_MARGIN, width, height, DEAD);

    for (i, cell) in snapshot.cells.iter().enumerate() {
        let (row, col) = (i / snapshot.cols, i % snapshot.cols);
        let x = BOARD_MARGIN + col as f32 * CELL_SIZE;
        let y = BOARD_MARGIN + row as f32 * CELL_SIZE;

        if cell.is_alive() {
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, ALIVE);
        }
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, GRID_LINE);
    }
}

fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(25, 25, 25, 255));
}

/// Draw the control panel: counter, status, buttons, pattern picker and
/// the last rejected command, if any.
pub fn draw_controls(
    snapshot: &Snapshot,
    generations_per_second: f64,
    buttons: &[(Control, Button)],
    dropdown: &Dropdown,
    message: Option<&str>,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    let px = panel_x() + 10.0;

    draw_text("Generation:", px, 30.0, 18.0, WHITE);
    draw_text(&snapshot.generation.to_string(), px, 56.0, 26.0, ALIVE);

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let (status, status_color) = match snapshot.state {
        RunState::Running => ("Running", ALIVE),
        RunState::Paused => ("Paused", ORANGE),
        RunState::Idle => ("Idle", GRAY),
    };

    let speed = format!("Speed: {:.0} gen/s", generations_per_second);
    let alive = format!("Alive: {}", snapshot.population());
    let labels = [
        ("Status:", 560.0, 16.0, WHITE),
        (status, 578.0, 16.0, status_color),
        (speed.as_str(), 600.0, 14.0, LIGHTGRAY),
        (alive.as_str(), 618.0, 14.0, LIGHTGRAY),
        ("Click a cell to toggle it", 646.0, 12.0, GRAY),
        ("Space pause  N step", 660.0, 12.0, GRAY),
        ("R random  C clear  Bksp reset", 674.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    if let Some(message) = message {
        draw_text(message, BOARD_MARGIN, screen_height() - 12.0, 16.0, RED);
    }

    // Drawn last so an open menu sits on top of the labels
    dropdown.draw(mouse_pos);
}
