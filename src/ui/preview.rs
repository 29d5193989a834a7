//! Terminal preview: draws the scene plan as block art.
//!
//! This is the rendering surface for [`crate::scene::ScenePlan`]. It knows
//! nothing about the configuration itself — body color, stand presence, and
//! attachment flags all arrive pre-derived, so swapping in a different
//! renderer would need no engine changes.

use crate::app::AppState;
use crate::scene::ScenePlan;
use crate::theme::{hex_color, Colors, Styles};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const STEEL: Color = Color::Rgb(136, 136, 136);

/// Render the preview pane from the derived scene plan.
pub fn render_preview(f: &mut Frame, state: &AppState, area: Rect) {
    let scene = state.scene();
    let mut lines = sketch(&scene);

    // Caption strip: resolved finish and base names
    let config = state.session.config();
    let finish = state
        .catalog
        .color(&config.color)
        .map_or("UNKNOWN FINISH".to_string(), |c| c.name.to_uppercase());
    lines.push(Line::from(Span::styled(finish, Styles::price())));
    if let Some(base) = state.catalog.base(&config.base) {
        if scene.has_base {
            lines.push(Line::from(Span::styled(
                format!("WITH {}", base.name.to_uppercase()),
                Styles::muted(),
            )));
        }
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BORDER_INACTIVE))
            .title(Span::styled(" preview ", Styles::muted())),
    );
    f.render_widget(panel, area);
}

/// Build the block-art sketch for a scene plan.
fn sketch(scene: &ScenePlan) -> Vec<Line<'static>> {
    let body = Style::default().fg(hex_color(&scene.body_color));
    // Light finishes get dark trim so the silhouette stays visible
    let trim = if scene.light_body {
        Style::default().fg(Colors::FG_MUTED)
    } else {
        body
    };
    let gold = Style::default().fg(Colors::ACCENT);
    let steel = Style::default().fg(STEEL);

    let mut lines = vec![Line::raw("")];

    // Rotisserie spit runs across above the dome
    if scene.attachments.rotisserie {
        lines.push(Line::from(Span::styled(
            "\u{2500}\u{2500}\u{2500}\u{2500}\u{256b}\u{2500}\u{2500}\u{2500}\u{2500}",
            steel,
        )));
    }

    // Gold knob on top
    lines.push(Line::from(Span::styled("\u{25c9}", gold)));

    // Dome
    lines.push(Line::from(Span::styled(
        "\u{2584}\u{2584}\u{2584}\u{2584}\u{2584}\u{2584}\u{2584}\u{2584}",
        trim,
    )));
    lines.push(Line::from(body_line(
        scene,
        "\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}",
        body,
    )));

    // Gold accent ring
    lines.push(Line::from(Span::styled(
        "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}",
        gold,
    )));

    // Lower body
    lines.push(Line::from(body_line(
        scene,
        "\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}",
        body,
    )));
    lines.push(Line::from(Span::styled(
        "\u{2580}\u{2580}\u{2580}\u{2580}\u{2580}\u{2580}\u{2580}\u{2580}",
        trim,
    )));

    if scene.has_base {
        // Stand: gold legs and a shelf
        lines.push(Line::from(Span::styled("\u{2551}      \u{2551}", gold)));
        lines.push(Line::from(Span::styled("\u{2551}      \u{2551}", gold)));
        lines.push(Line::from(Span::styled(
            "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}",
            steel,
        )));
    } else {
        // Floor shadow only
        lines.push(Line::from(Span::styled(
            "\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}",
            Style::default().fg(Colors::FG_MUTED),
        )));
    }

    lines.push(Line::raw(""));
    lines
}

/// Body row, with the pellet hopper bolted onto the left flank when present.
fn body_line(scene: &ScenePlan, body_blocks: &'static str, body: Style) -> Vec<Span<'static>> {
    if scene.attachments.pellet_feeder {
        vec![
            Span::styled("\u{259f}\u{2588}\u{259c} ", body),
            Span::styled(body_blocks, body),
        ]
    } else {
        vec![Span::styled(body_blocks, body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scene::derive_scene;
    use crate::session::Configuration;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_sketch_reflects_base_presence() {
        let catalog = Catalog::standard();
        let mut config = Configuration::default();
        let without = text_of(&sketch(&derive_scene(&catalog, &config)));
        assert!(!without.contains('\u{2551}'), "no legs without a base");

        config.base = "standard-base".to_string();
        let with = text_of(&sketch(&derive_scene(&catalog, &config)));
        assert!(with.contains('\u{2551}'), "legs appear with a base");
    }

    #[test]
    fn test_sketch_reflects_attachments() {
        let catalog = Catalog::standard();
        let config = Configuration {
            modules: vec!["rotisserie".to_string(), "pellet-feeder".to_string()],
            ..Configuration::default()
        };
        let art = text_of(&sketch(&derive_scene(&catalog, &config)));
        assert!(art.contains('\u{256b}'), "spit crossbar rendered");
        assert!(art.contains('\u{259f}'), "hopper rendered");
    }

    #[test]
    fn test_sketch_toggles_back_off() {
        let catalog = Catalog::standard();
        let plain = text_of(&sketch(&derive_scene(&catalog, &Configuration::default())));
        assert!(!plain.contains('\u{256b}'));
        assert!(!plain.contains('\u{259f}'));
    }
}
