use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::format_time;
use crate::app::App;
use crate::session::{QuizController, Session};

const OPTION_LABELS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
/// Timer turns red at or below this many seconds.
const LOW_TIME_SECONDS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App, controller: &QuizController) {
    let Some(session) = controller.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_status_bar(frame, chunks[0], session);
    render_question_text(frame, chunks[1], session);
    render_options(frame, chunks[2], session, app.option_cursor());
    render_navigation(frame, chunks[3], session);
    render_controls(frame, chunks[4]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let [progress_area, timer_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(area);

    let progress = Paragraph::new(format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total()
    ))
    .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(progress, progress_area);

    let remaining = session.time_remaining();
    let timer_color = if remaining <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Gray
    };
    let timer = Paragraph::new(format!("Time Left: {}", format_time(remaining)))
        .alignment(Alignment::Right)
        .style(Style::default().fg(timer_color).bold());
    frame.render_widget(timer, timer_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, session: &Session) {
    let question = session.current_question();
    let widget = Paragraph::new(question.heading(session.current_index() + 1))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let selected = session.pending();

    let lines: Vec<Line> = session
        .current_options()
        .iter()
        .enumerate()
        .flat_map(|(index, option)| {
            let is_cursor = index == cursor;
            let is_selected = selected == Some(option.as_str());

            let style = match (is_cursor, is_selected) {
                (_, true) => Style::default().fg(Color::Green).bold(),
                (true, false) => Style::default().fg(Color::Yellow).bold(),
                (false, false) => Style::default().fg(Color::White),
            };
            let marker = if is_cursor { ">" } else { " " };
            let radio = if is_selected { "(•)" } else { "( )" };
            let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

            [
                Line::from(vec![
                    Span::styled(format!(" {} {} ", marker, radio), style),
                    Span::styled(format!("{}. ", label), style),
                    Span::styled(option.clone(), style),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, session: &Session) {
    let enabled = Style::default().fg(Color::Cyan).bold();
    let disabled = Style::default().fg(Color::DarkGray);

    let previous = Span::styled(
        "[p] Previous",
        if session.can_go_previous() { enabled } else { disabled },
    );
    let forward = if session.is_last_question() {
        Span::styled("[s] Submit", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("[n] Next", enabled)
    };

    let widget = Paragraph::new(Line::from(vec![previous, Span::raw("      "), forward]))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  enter/space choose  ·  p/n navigate  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
