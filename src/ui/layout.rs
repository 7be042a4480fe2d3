//! Layout helpers

use ratatui::layout::Rect;

/// Center a fixed-size rect inside `area`, clamping to its bounds
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
