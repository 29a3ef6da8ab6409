mod quiz;
mod result;
mod setup;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};
use crate::session::QuizController;

pub fn render(frame: &mut Frame, app: &App, controller: &QuizController) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen(controller) {
        Screen::Setup => setup::render(frame, area, &app.setup),
        Screen::Loading => setup::render_loading(frame, area, &app.setup),
        Screen::Quiz => quiz::render(frame, area, app, controller),
        Screen::Result => result::render(frame, area, app, controller),
    }
}

/// Format seconds as `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(300), "05:00");
        assert_eq!(format_time(3_725), "62:05");
    }
}
