//! Title bar, step indicator, status bar, and help overlay rendering.

use crate::app::AppState;
use crate::session::WizardStep;
use crate::theme::{Colors, Styles};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Brand title on the left, running total on the right.
pub fn render_title_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled("  P Y R E", Styles::title()),
        Span::styled("  \u{b7}  configurator", Styles::muted()),
    ]);
    f.render_widget(Paragraph::new(brand), halves[0]);

    let total = Line::from(vec![
        Span::styled("YOUR BUILD  ", Styles::muted()),
        Span::styled(
            format!("${}  ", format_dollars(state.total())),
            Styles::price(),
        ),
    ])
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(total), halves[1]);
}

/// One segment per wizard step, the current one highlighted.
pub fn render_step_indicator(f: &mut Frame, state: &AppState, area: Rect) {
    let current = state.session.step();
    let mut spans = vec![Span::raw("  ")];
    for (i, step) in WizardStep::all_steps().iter().enumerate() {
        let marker = format!("{} {}", i + 1, step.label());
        let style = if *step == current {
            Styles::highlighted()
        } else if step.index() < current.index() {
            Styles::muted()
        } else {
            Style::default().fg(Colors::FG_MUTED)
        };
        spans.push(Span::styled(marker, style));
        if step.next().is_some() {
            spans.push(Span::styled("  ›  ", Style::default().fg(Colors::FG_MUTED)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Status message plus key hints.
pub fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let msg_style = if state.status_is_error {
        Styles::error()
    } else {
        Styles::muted()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}", state.status_message), msg_style),
        Span::styled(
            "   ↑↓ move · Enter select · ←→ steps · ? help · q quit",
            Style::default().fg(Colors::FG_MUTED),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Centered help overlay listing every keybinding.
pub fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(46, 14, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("Keys", Styles::title())),
        Line::raw(""),
        Line::raw("  Up/Down, k/j    move cursor"),
        Line::raw("  Enter, Space    select / toggle option"),
        Line::raw("  Right, n, Tab   next step"),
        Line::raw("  Left, b         previous step"),
        Line::raw("  1-6             jump to step"),
        Line::raw("  ?               this help"),
        Line::raw("  q, Esc          quit"),
        Line::raw(""),
        Line::from(Span::styled("  any key to close", Styles::muted())),
    ];
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ACCENT))
            .style(Style::default().bg(Colors::BG_PANEL)),
    );
    f.render_widget(help, area);
}

/// Format a dollar amount with thousands separators.
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let h = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(v[1]);
    h[1]
}
