use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STOCK MARKET FUNDAMENTALS QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Test your knowledge of stock market concepts".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Difficulty  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("< {} >", app.difficulty()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Questions   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("< {} >", app.requested_count()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("h/l difficulty  ·  j/k questions  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    if let Some(warning) = app.warning() {
        let widget = Paragraph::new(warning)
            .alignment(Alignment::Center)
            .fg(Color::Yellow)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, chunks[2]);
    }
}
