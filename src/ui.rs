pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, app::AppState, report::Status};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const LOW_TIME_SECS: u32 = 3;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Question => render_question(self, area, buf),
            AppState::Results => render_results(self, area, buf),
        }
    }
}

fn render_question(app: &App, area: Rect, buf: &mut Buffer) {
    let quiz = &app.quiz;
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let prompt = quiz.current_prompt().unwrap_or_default();
    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_lines = ((prompt.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);
    let padding = area.height.saturating_sub(prompt_lines + 6) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(1),            // player / progress
            Constraint::Length(padding),      // spacer
            Constraint::Length(2),            // timer
            Constraint::Length(prompt_lines), // prompt
            Constraint::Length(3),            // answer box
            Constraint::Min(0),               // spacer
            Constraint::Length(1),            // legend
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!("Player: {}", app.session_config.user_name), bold_style),
        Span::raw("   "),
        Span::styled(
            format!(
                "Question {}/{}   Correct {}",
                quiz.current_index() + 1,
                quiz.total(),
                quiz.correct_count()
            ),
            dim_bold_style,
        ),
    ]));
    header.render(chunks[0], buf);

    if let Some(remaining) = quiz.seconds_remaining() {
        let timer_style = if remaining <= LOW_TIME_SECS {
            Style::default().patch(bold_style).fg(Color::Red)
        } else {
            dim_bold_style
        };
        Paragraph::new(Span::styled(format!("Time: {remaining}s"), timer_style))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }

    Paragraph::new(Span::styled(prompt, bold_style))
        .alignment(if prompt_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);

    let answer = Paragraph::new(Line::from(vec![
        Span::styled(quiz.staged_input(), Style::default().fg(Color::Cyan)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Answer"));
    answer.render(chunks[4], buf);

    Paragraph::new(Span::styled(
        "(enter) submit / (backspace) edit / (esc)ape",
        italic_style,
    ))
    .render(chunks[6], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(report) = app.quiz.report() else {
        return;
    };
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // player
            Constraint::Length(1), // score
            Constraint::Length(1), // padding
            Constraint::Min(3),    // review table
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(report.user_name.clone(), bold_style))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let status_style = match report.status {
        Status::Passed => Style::default().patch(bold_style).fg(Color::Green),
        Status::Failed => Style::default().patch(bold_style).fg(Color::Red),
    };
    Paragraph::new(Line::from(vec![
        Span::styled(report.score_line(), bold_style),
        Span::raw("   "),
        Span::styled(report.status.to_string(), status_style),
    ]))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    // borders and header take three rows
    let visible_rows = chunks[3].height.saturating_sub(3) as usize;
    let max_offset = report.answers.len().saturating_sub(visible_rows);
    let offset = app.review_offset.min(max_offset);

    let rows = report
        .answers
        .iter()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|answer| {
            let style = if answer.is_correct {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(answer.question.clone()),
                Cell::from(answer.correct_answer.clone()),
                Cell::from(answer.user_answer.clone()).style(style),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(vec!["Question", "Correct Answer", "Your Answer"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title("Review"));
    Widget::render(table, chunks[3], buf);

    Paragraph::new(Span::styled("(n)ew / (↑↓) scroll / (esc)ape", italic_style))
        .render(chunks[4], buf);
}
