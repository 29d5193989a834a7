//! Scene parameterizer: turns a configuration into a renderable scene plan.
//!
//! The plan is a plain description — body color, stand presence, attachment
//! flags — independent of whatever actually draws it (here the terminal
//! preview in `ui::preview`). Deriving it is pure and total: an unresolvable
//! color falls back to the default finish, and selected ids with no visual
//! mapping are silently ignored. That last part is a deliberate
//! extensibility contract: adding a catalog entry must never require touching
//! this module to avoid a crash, only to gain a visual representation.
//!
//! Pricing and the scene read the same configuration snapshot, so the two
//! can never disagree about what is selected.

use crate::catalog::{Catalog, CatalogList, DEFAULT_COLOR_ID, NO_BASE_ID};
use crate::session::Configuration;
use serde::Serialize;

/// Hex used when the configured color id does not resolve.
/// Matches the obsidian finish so a stale id still renders something sane.
const FALLBACK_BODY_HEX: &str = "#1a1a1a";

/// Attachment visibility flags, one per option with a distinct visual.
///
/// Only two catalog entries change the model today; everything else ships
/// in the box rather than bolting onto the silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Attachments {
    /// Hopper block on the left flank (`pellet-feeder` module)
    pub pellet_feeder: bool,
    /// Spit rod across the dome (`rotisserie` module)
    pub rotisserie: bool,
}

/// Derived description of what the preview should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenePlan {
    /// Resolved body hex, e.g. `#8b2500`
    pub body_color: String,
    /// Light finishes need dark trim for contrast (the arctic case)
    pub light_body: bool,
    /// True iff a stand is part of the build
    pub has_base: bool,
    pub attachments: Attachments,
}

/// Derive the scene plan for a configuration.
pub fn derive_scene(catalog: &Catalog, config: &Configuration) -> ScenePlan {
    let (body_color, light_body) = match catalog.color(&config.color) {
        Some(c) => (c.hex.clone(), is_light_hex(&c.hex)),
        None => (FALLBACK_BODY_HEX.to_string(), false),
    };

    ScenePlan {
        body_color,
        light_body,
        has_base: config.base != NO_BASE_ID,
        attachments: Attachments {
            pellet_feeder: config.is_selected(CatalogList::Modules, "pellet-feeder"),
            rotisserie: config.is_selected(CatalogList::Modules, "rotisserie"),
        },
    }
}

/// Rough luminance test over the hex triplet.
///
/// Good enough to flip the trim on near-white finishes; a malformed hex
/// reads as dark, which matches the fallback behavior elsewhere.
fn is_light_hex(hex: &str) -> bool {
    parse_hex(hex).is_some_and(|(r, g, b)| {
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        luma > 180.0
    })
}

/// Parse `#rrggbb` into an RGB triple. Returns `None` for anything else.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
