//! Summary step: the itemized quote.

use crate::app::AppState;
use crate::pricing::LineItemKind;
use crate::theme::{Colors, Styles};
use crate::ui::header::format_dollars;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the itemized quote for the current configuration.
pub fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let quote = state.quote();

    let mut lines = vec![
        Line::from(Span::styled("Your Configuration", Styles::title())),
        Line::from(Span::styled(
            "Review your build before reserving",
            Styles::muted(),
        )),
        Line::raw(""),
    ];

    let mut last_kind = None;
    for item in &quote.items {
        if last_kind != Some(item.kind) {
            lines.push(Line::from(Span::styled(
                format!(" {}", section_heading(item.kind)),
                Styles::muted(),
            )));
            last_kind = Some(item.kind);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("   {:<34}", item.label), Styles::normal()),
            Span::styled(
                if item.kind == LineItemKind::BaseUnit {
                    format!("${}", format_dollars(item.price))
                } else if item.price == 0 {
                    "Included".to_string()
                } else {
                    format!("+${}", format_dollars(item.price))
                },
                Styles::price(),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("   Total".to_string(), Styles::highlighted()),
        Span::styled(
            format!("{:>30}", format!("${}", format_dollars(quote.total))),
            Styles::highlighted(),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        "   Fully refundable $500 deposit to reserve",
        Styles::muted(),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ACCENT)),
    );
    f.render_widget(panel, area);
}

fn section_heading(kind: LineItemKind) -> &'static str {
    match kind {
        LineItemKind::BaseUnit => "Base Unit",
        LineItemKind::Exterior => "Exterior Color",
        LineItemKind::Base => "Base",
        LineItemKind::Module => "Cooking Modules",
        LineItemKind::Accessory => "Accessories",
        LineItemKind::Tool => "Tools",
    }
}
