mod layout;
mod page;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    page::render(frame, app_layout.page, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
