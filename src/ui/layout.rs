use ratatui::layout::Rect;

/// Width of the drawn handset, borders included.
pub const PHONE_WIDTH: u16 = 34;
/// Height of the drawn handset, borders included.
pub const PHONE_HEIGHT: u16 = 26;

/// Rectangle of at most `width` × `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where the handset goes inside the terminal.
pub fn phone_rect(area: Rect) -> Rect {
    centered_rect_by_size(area, PHONE_WIDTH, PHONE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_large_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = phone_rect(area);
        assert_eq!(rect, Rect::new(33, 7, PHONE_WIDTH, PHONE_HEIGHT));
    }

    #[test]
    fn clamps_to_small_area() {
        let area = Rect::new(2, 1, 20, 10);
        assert_eq!(phone_rect(area), area);
    }
}
