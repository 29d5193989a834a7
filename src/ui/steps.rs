//! Option list rendering for the five selection steps.
//!
//! Lists are drawn in catalog order. Single-select steps (exterior, base)
//! use radio markers; multi-select steps use checkboxes. Prices render as
//! "+$n" or "Included" for zero-price options, matching the quote.

use crate::app::AppState;
use crate::catalog::{BaseOption, ColorOption, ModuleOption};
use crate::session::WizardStep;
use crate::theme::{hex_color, Colors, Styles};
use crate::ui::header::format_dollars;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the option list for the current (non-summary) step.
pub fn render_options(f: &mut Frame, state: &AppState, area: Rect) {
    let step = state.session.step();
    let cursor = state.cursor();
    let config = state.session.config();

    let mut lines = vec![
        Line::from(Span::styled(step.title(), Styles::title())),
        Line::from(Span::styled(subtitle(step), Styles::muted())),
        Line::raw(""),
    ];

    match step {
        WizardStep::Exterior => {
            for (i, c) in state.catalog.colors().iter().enumerate() {
                lines.push(color_row(c, config.color == c.id, i == cursor));
            }
        }
        WizardStep::Base => {
            for (i, b) in state.catalog.bases().iter().enumerate() {
                lines.extend(base_rows(b, config.base == b.id, i == cursor));
            }
        }
        WizardStep::Modules | WizardStep::Accessories | WizardStep::Tools => {
            let list = step
                .catalog_list()
                .expect("selection steps always have a catalog list");
            let options: &[ModuleOption] = match step {
                WizardStep::Modules => state.catalog.cooking_modules(),
                WizardStep::Accessories => state.catalog.accessories(),
                _ => state.catalog.tools(),
            };
            for (i, m) in options.iter().enumerate() {
                lines.extend(module_rows(m, config.is_selected(list, &m.id), i == cursor));
            }
        }
        WizardStep::Summary => unreachable!("summary renders through ui::summary"),
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
    );
    f.render_widget(panel, area);
}

fn subtitle(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Exterior => "Select from our palette of ceramic finishes",
        WizardStep::Base => "Choose how you want to mount your PYRE",
        WizardStep::Modules => "Expand your capabilities with bolt-on modules",
        WizardStep::Accessories => "Essential additions for the complete experience",
        WizardStep::Tools => "Premium tools designed for PYRE",
        WizardStep::Summary => "",
    }
}

fn color_row(c: &ColorOption, selected: bool, highlighted: bool) -> Line<'static> {
    let marker = if selected { "(\u{2022})" } else { "( )" };
    let name_style = row_style(selected, highlighted);
    Line::from(vec![
        Span::styled(format!(" {marker} "), name_style),
        Span::styled("\u{2588}\u{2588} ", Style::default().fg(hex_color(&c.hex))),
        Span::styled(format!("{:<18}", c.name), name_style),
        price_span(c.price),
    ])
}

fn base_rows(b: &BaseOption, selected: bool, highlighted: bool) -> Vec<Line<'static>> {
    let marker = if selected { "(\u{2022})" } else { "( )" };
    let name_style = row_style(selected, highlighted);
    vec![
        Line::from(vec![
            Span::styled(format!(" {marker} "), name_style),
            Span::styled(format!("{:<24}", b.name), name_style),
            price_span(b.price),
        ]),
        Line::from(Span::styled(
            format!("      {}", b.description),
            Styles::muted(),
        )),
    ]
}

fn module_rows(m: &ModuleOption, selected: bool, highlighted: bool) -> Vec<Line<'static>> {
    let marker = if selected { "[x]" } else { "[ ]" };
    let name_style = row_style(selected, highlighted);
    vec![
        Line::from(vec![
            Span::styled(format!(" {marker} "), name_style),
            Span::styled(format!("{:<28}", m.name), name_style),
            price_span(m.price),
        ]),
        Line::from(Span::styled(
            format!("      {}", m.description),
            Styles::muted(),
        )),
    ]
}

fn row_style(selected: bool, highlighted: bool) -> Style {
    if highlighted {
        Styles::highlighted()
    } else if selected {
        Styles::selected()
    } else {
        Styles::normal()
    }
}

fn price_span(price: u64) -> Span<'static> {
    if price == 0 {
        Span::styled("Included", Styles::muted())
    } else {
        Span::styled(format!("+${}", format_dollars(price)), Styles::price())
    }
}
