mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const CELL_SIZE: f32 = 16.0;
/// Gap between the window edge and the board
pub const BOARD_MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Controls offered by the panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    PauseOrResume,
    Step,
    Randomize,
    Clear,
    Reset,
}

/// Create panel buttons with standard layout, top to bottom
pub fn create_buttons() -> Vec<(Control, Button)> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    [
        (Control::PauseOrResume, "Start/Pause/Resume"),
        (Control::Step, "Step"),
        (Control::Randomize, "Randomize"),
        (Control::Clear, "Clear Board"),
        (Control::Reset, "Reset"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (control, label))| {
        let y = 80.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        (control, Button::new(px, y, width, BUTTON_HEIGHT, label))
    })
    .collect()
}

/// Y position of the pattern dropdown, below the buttons
pub const PATTERN_DROPDOWN_Y: f32 = 340.0;
