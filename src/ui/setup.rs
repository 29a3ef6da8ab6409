use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::SetupForm;

pub fn render(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let error_line = match form.error() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).bold(),
        )),
        None => Line::from(""),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ONLINE MOCK TEST",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Subject:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("< {} >", form.subject_label()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Questions:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}_", form.count_input()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(""),
        error_line,
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start the mock test".fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[2]);
}

pub fn render_loading(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Fetching {} questions...", form.subject_label()),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("h/l subject  ·  0-9 count  ·  enter start  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    let [line, _] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(widget, line);
}
