use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

/// Pattern picker. Unlike a plain selector it reports every pick, so
/// choosing the same pattern twice reloads it.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the cursor is over the header or an open menu
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_header(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    /// Handle clicks; returns the picked item, if any
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<&str> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        if self.is_hovered_header(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        let picked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i))?;
        Some(self.items[picked].as_str())
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let header_color = if self.is_hovered_header(mouse_pos) {
            Color::from_rgba(102, 255, 51, 255)
        } else {
            Color::from_rgba(40, 40, 40, 255)
        };
        let header_text = if self.is_hovered_header(mouse_pos) { BLACK } else { WHITE };

        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);
        draw_text(&self.label, self.x + 6.0, self.y + 19.0, FONT_SIZE, header_text);
        let arrow = if self.is_open { "-" } else { "+" };
        draw_text(arrow, self.x + self.width - 16.0, self.y + 19.0, FONT_SIZE, header_text);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(
            self.x,
            self.y + ITEM_HEIGHT,
            self.width,
            menu_height,
            Color::from_rgba(20, 20, 20, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + ITEM_HEIGHT * (i as f32 + 1.0);
            let (fill, text_color) = if self.is_hovered_item(mouse_pos, i) {
                (Color::from_rgba(102, 255, 51, 255), BLACK)
            } else {
                (Color::from_rgba(45, 45, 45, 255), WHITE)
            };
            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, fill);
            draw_rectangle_lines(self.x, item_y, self.width, ITEM_HEIGHT, 1.0, GRAY);
            draw_text(&truncate(item, self.width - 10.0), self.x + 5.0, item_y + 19.0, FONT_SIZE, text_color);
        }

        draw_rectangle_lines(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    fn is_hovered_header(&self, mouse_pos: (f32, f32)) -> bool {
        in_rect(mouse_pos, self.x, self.y, self.width)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        in_rect(mouse_pos, self.x, self.y + ITEM_HEIGHT * (index as f32 + 1.0), self.width)
    }
}

fn in_rect(mouse_pos: (f32, f32), x: f32, y: f32, width: f32) -> bool {
    mouse_pos.0 >= x && mouse_pos.0 <= x + width && mouse_pos.1 >= y && mouse_pos.1 <= y + ITEM_HEIGHT
}

/// Shorten text with an ellipsis until it fits `max_width`
fn truncate(text: &str, max_width: f32) -> String {
    let fits = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width <= max_width;
    if fits(text) {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && !fits(&format!("{}...", truncated)) {
        truncated.pop();
    }
    format!("{}...", truncated)
}
