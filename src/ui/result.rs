use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::Summary;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Ok(summary) = app.session().summary() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &summary);
    render_mistakes(frame, chunks[2], &summary, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &Summary) {
    let verdict = match summary.percentage {
        Some(percentage) => Line::from(Span::styled(
            format!(
                "{} / {}  ({:.2}%)",
                summary.score, summary.requested_count, percentage
            ),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        None => Line::from("No questions were available.".fg(Color::Yellow)),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        verdict,
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_mistakes(frame: &mut Frame, area: Rect, summary: &Summary, scroll: usize) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Mistakes & Correct Answers",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    let mut mistakes = summary.mistakes().peekable();
    if mistakes.peek().is_none() {
        lines.push(Line::from("No mistakes.".fg(Color::Green)));
    }

    for entry in mistakes {
        lines.push(Line::from(vec![
            Span::styled(" - ", Style::default().fg(Color::Red)),
            Span::styled(entry.question.as_str(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(entry.selected.as_str(), Style::default().fg(Color::Red)),
            Span::styled("  ·  correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(entry.correct.as_str(), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
