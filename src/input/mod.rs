use log::warn;
use macroquad::prelude::*;
use crate::application::Simulation;
use crate::ui::{Button, Control, BOARD_MARGIN, CELL_SIZE};

/// Map a screen position to the board cell under it
pub fn cell_at(mouse_pos: (f32, f32), rows: usize, cols: usize) -> Option<(usize, usize)> {
    let x = mouse_pos.0 - BOARD_MARGIN;
    let y = mouse_pos.1 - BOARD_MARGIN;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = ((y / CELL_SIZE) as usize, (x / CELL_SIZE) as usize);
    (row < rows && col < cols).then_some((row, col))
}

/// Toggle the clicked cell. Returns an error message for the status line
/// if the engine rejected the edit.
pub fn handle_cell_click(sim: &mut Simulation, mouse_pos: (f32, f32)) -> Option<String> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    let (rows, cols) = sim.grid().dimensions();
    let (row, col) = cell_at(mouse_pos, rows, cols)?;
    sim.toggle_cell(row, col).err().map(|err| {
        warn!("toggle rejected: {}", err);
        err.to_string()
    })
}

/// Run the engine command behind a panel control
pub fn apply_control(sim: &mut Simulation, control: Control) {
    match control {
        Control::PauseOrResume => sim.pause_or_resume(),
        Control::Step => sim.step(),
        Control::Randomize => sim.randomize(),
        Control::Clear => sim.clear_board(),
        Control::Reset => sim.reset(),
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: &mut Simulation) {
    type KeyAction = (KeyCode, fn(&mut Simulation));

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, Simulation::pause_or_resume),
        (KeyCode::N, Simulation::step),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::C, Simulation::clear_board),
        (KeyCode::Backspace, Simulation::reset),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(sim));
}

/// Process button clicks
pub fn process_button_clicks(sim: &mut Simulation, buttons: &[(Control, Button)], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .for_each(|(control, _)| apply_control(sim, *control));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_board_positions() {
        assert_eq!(cell_at((BOARD_MARGIN, BOARD_MARGIN), 30, 50), Some((0, 0)));
        let x = BOARD_MARGIN + CELL_SIZE * 49.5;
        let y = BOARD_MARGIN + CELL_SIZE * 29.5;
        assert_eq!(cell_at((x, y), 30, 50), Some((29, 49)));
    }

    #[test]
    fn test_cell_at_rejects_outside_board() {
        assert_eq!(cell_at((0.0, 0.0), 30, 50), None);
        let past_right = BOARD_MARGIN + CELL_SIZE * 50.0 + 1.0;
        assert_eq!(cell_at((past_right, BOARD_MARGIN), 30, 50), None);
        let past_bottom = BOARD_MARGIN + CELL_SIZE * 30.0 + 1.0;
        assert_eq!(cell_at((BOARD_MARGIN, past_bottom), 30, 50), None);
    }

    #[test]
    fn test_apply_control_drives_simulation() {
        let mut sim = Simulation::new(Default::default()).unwrap();
        apply_control(&mut sim, Control::Step);
        assert_eq!(sim.generation(), 1);
        apply_control(&mut sim, Control::PauseOrResume);
        assert!(sim.is_running());
        apply_control(&mut sim, Control::Clear);
        assert!(!sim.is_running());
        assert_eq!(sim.grid().population(), 0);
    }
}
