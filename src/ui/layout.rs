//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub inputs: Rect,
    pub list: Rect,
    pub banner: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Input fields on top, the list in the middle, a one-line status bar at the bottom.
    ///
    /// The banner overlays the bottom of the list.
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let list = chunks[1];
        let banner_height = list.height.min(3);
        let banner = Rect::new(list.x, list.y + list.height - banner_height, list.width, banner_height);

        MainAreas {
            inputs: chunks[0],
            list,
            banner,
            status: chunks[2],
        }
    }

    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_layout_stacks_regions() {
        let areas = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.inputs.height, 6);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.list.height, 17);
        assert_eq!(areas.banner.y + areas.banner.height, areas.list.y + areas.list.height);
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = LayoutManager::centered_rect(60, 30, parent);
        assert!(popup.x >= parent.x && popup.right() <= parent.right());
        assert!(popup.y >= parent.y && popup.bottom() <= parent.bottom());
    }
}
