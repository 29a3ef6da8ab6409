use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{QuestionOutcome, QuizController, QuizResult};

pub fn render(frame: &mut Frame, area: Rect, app: &App, controller: &QuizController) {
    let Some(result) = controller.result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], result);
    render_question_breakdown(frame, chunks[1], &result.per_question, app.result_scroll());
    render_controls(frame, chunks[2]);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let percentage = result.percentage();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TEST RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your Score: {}/{}  ({:.0}%)", result.score, result.total, percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(Span::styled(
            format!("Suggestion: {}", result.suggestion),
            Style::default().fg(Color::White),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// Summary lines for one question, followed by a spacer.
fn outcome_lines(number: usize, outcome: &QuestionOutcome) -> [Line<'static>; 4] {
    let (symbol, color) = if outcome.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };
    let (chosen, chosen_style) = match &outcome.selected_answer {
        Some(answer) => (answer.clone(), Style::default().fg(color)),
        None => ("not answered".to_string(), Style::default().fg(Color::DarkGray).italic()),
    };

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
            Span::styled(outcome.question.heading(number), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("     A: ", Style::default().fg(Color::DarkGray)),
            Span::styled(outcome.correct_answer.clone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("   You: ", Style::default().fg(Color::DarkGray)),
            Span::styled(chosen, chosen_style),
        ]),
        Line::from(""),
    ]
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    outcomes: &[QuestionOutcome],
    scroll: usize,
) {
    let lines: Vec<Line> = outcomes
        .iter()
        .enumerate()
        .skip(scroll)
        .flat_map(|(index, outcome)| outcome_lines(index + 1, outcome))
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Correct Answers ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r new test  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
