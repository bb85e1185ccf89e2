use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub page: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Keep the page readable on wide terminals
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(72), Constraint::Min(0)])
        .split(main_chunks[0]);

    AppLayout {
        page: h_chunks[0],
        status_bar: main_chunks[1],
    }
}

/// Stack rows of the given heights from the top of `area`. Rows that do not
/// fit are given an empty rect.
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    chunks.iter().take(heights.len()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_is_last_line() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.page.height, 29);
        assert!(layout.page.width <= 72);
    }

    #[test]
    fn test_stack() {
        let rows = stack(Rect::new(0, 0, 40, 20), &[1, 3, 1]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], Rect::new(0, 1, 40, 3));
        assert_eq!(rows[2].y, 4);
    }
}
