//! Pricing engine: derives the running total and the itemized quote.
//!
//! Price is never stored — it is recomputed from the configuration and the
//! catalog on every read, so it can never go stale. Both functions here are
//! pure: the same configuration always yields the same numbers, and ids the
//! catalog cannot resolve contribute zero instead of failing (see
//! [`crate::catalog::Catalog::price_of`]).

use crate::catalog::{Catalog, CatalogList};
use crate::session::Configuration;
use serde::Serialize;

/// Which part of the build a quote line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    BaseUnit,
    Exterior,
    Base,
    Module,
    Accessory,
    Tool,
}

/// One row of the itemized quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    /// Resolved display name from the catalog
    pub label: String,
    /// Price contribution in whole dollars
    pub price: u64,
}

/// Itemized quote for a configuration.
///
/// Rows follow catalog order within each section, not selection order, so
/// the summary reads the same no matter how the visitor clicked through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub items: Vec<LineItem>,
    pub total: u64,
}

/// Total price of a configuration in whole dollars.
///
/// `base_price + color + base + Σ modules + Σ accessories + Σ tools`, with
/// unresolved ids degrading to zero. The result is always at least the base
/// price since option prices are non-negative.
pub fn total_price(catalog: &Catalog, config: &Configuration) -> u64 {
    let mut total = catalog.base_price();
    total += catalog.price_of(CatalogList::Colors, &config.color);
    total += catalog.price_of(CatalogList::Bases, &config.base);
    for id in &config.modules {
        total += catalog.price_of(CatalogList::Modules, id);
    }
    for id in &config.accessories {
        total += catalog.price_of(CatalogList::Accessories, id);
    }
    for id in &config.tools {
        total += catalog.price_of(CatalogList::Tools, id);
    }
    total
}

/// Build the itemized quote for a configuration.
///
/// The quote's total always equals [`total_price`] for the same snapshot:
/// both walk the same resolved entries and apply the same zero-on-miss
/// policy. Unresolved ids simply produce no row.
pub fn build_quote(catalog: &Catalog, config: &Configuration) -> Quote {
    let mut items = vec![LineItem {
        kind: LineItemKind::BaseUnit,
        label: "PYRE Base Unit".to_string(),
        price: catalog.base_price(),
    }];

    if let Some(color) = catalog.color(&config.color) {
        items.push(LineItem {
            kind: LineItemKind::Exterior,
            label: color.name.clone(),
            price: color.price,
        });
    }
    if let Some(base) = catalog.base(&config.base) {
        items.push(LineItem {
            kind: LineItemKind::Base,
            label: base.name.clone(),
            price: base.price,
        });
    }

    // Walk the catalog, not the selection lists, to keep catalog order
    for m in catalog.cooking_modules() {
        if config.is_selected(CatalogList::Modules, &m.id) {
            items.push(LineItem {
                kind: LineItemKind::Module,
                label: m.name.clone(),
                price: m.price,
            });
        }
    }
    for a in catalog.accessories() {
        if config.is_selected(CatalogList::Accessories, &a.id) {
            items.push(LineItem {
                kind: LineItemKind::Accessory,
                label: a.name.clone(),
                price: a.price,
            });
        }
    }
    for t in catalog.tools() {
        if config.is_selected(CatalogList::Tools, &t.id) {
            items.push(LineItem {
                kind: LineItemKind::Tool,
                label: t.name.clone(),
                price: t.price,
            });
        }
    }

    let total = items.iter().map(|i| i.price).sum();
    Quote { items, total }
}
