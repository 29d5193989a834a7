//! Product catalog: the immutable reference data every other module reads.
//!
//! The catalog is built once at startup via [`Catalog::standard`] and never
//! mutated afterwards. Entries are looked up by string id; a miss returns
//! `None` rather than an error, and [`Catalog::price_of`] coerces a miss to
//! zero. That defensive default is intentional: a configuration holding an
//! id the catalog no longer knows about prices and renders as if the option
//! were absent, instead of crashing the session.
//!
//! Id uniqueness is required within each list only. The same id may appear
//! in two different lists without conflict.

use serde::Serialize;
use std::collections::HashMap;
use strum::Display;

/// Sticker price of the bare appliance before any options, in whole dollars.
pub const BASE_PRICE: u64 = 4999;

/// Default exterior finish for a fresh session.
pub const DEFAULT_COLOR_ID: &str = "obsidian";

/// Sentinel base id meaning "mount on your own surface" — prices at zero and
/// renders without a stand.
pub const NO_BASE_ID: &str = "no-base";

/// Category tag carried by every module-style option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    Cooking,
    Accessory,
    Tool,
}

/// The five selectable lists the catalog is organized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CatalogList {
    Colors,
    Bases,
    Modules,
    Accessories,
    Tools,
}

/// An exterior finish option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOption {
    pub id: String,
    pub name: String,
    /// Hex color of the ceramic body, e.g. `#1a1a1a`
    pub hex: String,
    pub price: u64,
}

/// A base/stand option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
}

/// A bolt-on module, accessory, or tool option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: OptionCategory,
}

/// Borrowed view of any catalog entry, returned by [`Catalog::lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryRef<'a> {
    Color(&'a ColorOption),
    Base(&'a BaseOption),
    Module(&'a ModuleOption),
}

impl<'a> EntryRef<'a> {
    /// Stable id of the underlying entry
    pub fn id(&self) -> &'a str {
        match self {
            Self::Color(c) => &c.id,
            Self::Base(b) => &b.id,
            Self::Module(m) => &m.id,
        }
    }

    /// Display name of the underlying entry
    pub fn name(&self) -> &'a str {
        match self {
            Self::Color(c) => &c.name,
            Self::Base(b) => &b.name,
            Self::Module(m) => &m.name,
        }
    }

    /// Price in whole dollars
    pub fn price(&self) -> u64 {
        match self {
            Self::Color(c) => c.price,
            Self::Base(b) => b.price,
            Self::Module(m) => m.price,
        }
    }
}

/// The full option catalog plus the base unit price.
///
/// Lists keep their authoring order, which is also the display and summary
/// order. Lookup is O(1) via id indexes built at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    colors: Vec<ColorOption>,
    bases: Vec<BaseOption>,
    cooking_modules: Vec<ModuleOption>,
    accessories: Vec<ModuleOption>,
    tools: Vec<ModuleOption>,
    base_price: u64,
    index: HashMap<(CatalogList, String), usize>,
}

impl Catalog {
    /// Build the standard PYRE catalog.
    pub fn standard() -> Self {
        let colors = vec![
            color("obsidian", "Obsidian Black", "#1a1a1a", 0),
            color("gunmetal", "Gunmetal Grey", "#4a4a4a", 0),
            color("ember", "Ember Red", "#8b2500", 500),
            color("arctic", "Arctic White", "#f5f5f5", 500),
        ];
        let bases = vec![
            base(
                NO_BASE_ID,
                "No Base",
                "Mount on your own surface or existing setup",
                0,
            ),
            base(
                "standard-base",
                "Standard Base",
                "Powder-coated steel with adjustable feet",
                799,
            ),
            base(
                "premium-base",
                "Premium Cart Base",
                "Stainless steel cart with wheels, side shelves, and storage",
                1499,
            ),
        ];
        let cooking_modules = vec![
            module(
                "pellet-feeder",
                "PyroFeed Pellet System",
                "Automated pellet feeding with 20lb hopper capacity",
                999,
                OptionCategory::Cooking,
            ),
            module(
                "flattop",
                "Flat Top Griddle Module",
                "Cast iron griddle for smash burgers and breakfast",
                349,
                OptionCategory::Cooking,
            ),
            module(
                "pizza-oven",
                "Pizza Oven Module",
                "900\u{b0}F capable dome for Neapolitan-style pizza",
                599,
                OptionCategory::Cooking,
            ),
            module(
                "rotisserie",
                "Rotisserie System",
                "Heavy-duty rotisserie with motor and spit",
                449,
                OptionCategory::Cooking,
            ),
            module(
                "offset-box",
                "Offset Firebox",
                "Separate firebox for authentic offset smoking",
                699,
                OptionCategory::Cooking,
            ),
            module(
                "cold-smoke",
                "Cold Smoke Generator",
                "Low-temp smoke for cheese and charcuterie",
                299,
                OptionCategory::Cooking,
            ),
        ];
        let accessories = vec![
            module(
                "cover",
                "Premium Cover",
                "All-weather protection with PYRE logo",
                149,
                OptionCategory::Accessory,
            ),
            module(
                "grate-set",
                "Stainless Steel Grate Set",
                "Full set of premium cooking grates",
                249,
                OptionCategory::Accessory,
            ),
            module(
                "deflector",
                "Heat Deflector Plates",
                "Ceramic deflectors for indirect cooking",
                179,
                OptionCategory::Accessory,
            ),
            module(
                "ash-tool",
                "Ash Management System",
                "Easy-clean ash drawer and tools",
                129,
                OptionCategory::Accessory,
            ),
        ];
        let tools = vec![
            module(
                "tool-set",
                "PYRE Tool Set",
                "Tongs, spatula, fork, and brush in stainless steel",
                199,
                OptionCategory::Tool,
            ),
            module(
                "thermometer",
                "Wireless Meat Probes (4-pack)",
                "Bluetooth probes synced with the companion app",
                149,
                OptionCategory::Tool,
            ),
            module(
                "gloves",
                "Heat-Resistant Gloves",
                "Premium leather and aramid construction",
                79,
                OptionCategory::Tool,
            ),
            module(
                "apron",
                "PYRE Leather Apron",
                "Full-grain leather with brass hardware",
                189,
                OptionCategory::Tool,
            ),
        ];

        Self::build(colors, bases, cooking_modules, accessories, tools, BASE_PRICE)
    }

    /// Assemble a catalog and its lookup index.
    ///
    /// Panics in debug builds if a list contains a duplicate id; the standard
    /// catalog is authored by hand and checked by tests, so this never fires
    /// at runtime.
    fn build(
        colors: Vec<ColorOption>,
        bases: Vec<BaseOption>,
        cooking_modules: Vec<ModuleOption>,
        accessories: Vec<ModuleOption>,
        tools: Vec<ModuleOption>,
        base_price: u64,
    ) -> Self {
        let mut index = HashMap::new();
        let mut insert = |list: CatalogList, id: &str, pos: usize| {
            let prior = index.insert((list, id.to_string()), pos);
            debug_assert!(prior.is_none(), "duplicate id '{id}' in {list} catalog");
        };

        for (i, c) in colors.iter().enumerate() {
            insert(CatalogList::Colors, &c.id, i);
        }
        for (i, b) in bases.iter().enumerate() {
            insert(CatalogList::Bases, &b.id, i);
        }
        for (i, m) in cooking_modules.iter().enumerate() {
            insert(CatalogList::Modules, &m.id, i);
        }
        for (i, a) in accessories.iter().enumerate() {
            insert(CatalogList::Accessories, &a.id, i);
        }
        for (i, t) in tools.iter().enumerate() {
            insert(CatalogList::Tools, &t.id, i);
        }

        Self {
            colors,
            bases,
            cooking_modules,
            accessories,
            tools,
            base_price,
            index,
        }
    }

    /// Price of the bare appliance in whole dollars
    #[inline]
    pub fn base_price(&self) -> u64 {
        self.base_price
    }

    /// Exterior finishes, in display order
    pub fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    /// Base/stand options, in display order
    pub fn bases(&self) -> &[BaseOption] {
        &self.bases
    }

    /// Cooking modules, in display order
    pub fn cooking_modules(&self) -> &[ModuleOption] {
        &self.cooking_modules
    }

    /// Accessories, in display order
    pub fn accessories(&self) -> &[ModuleOption] {
        &self.accessories
    }

    /// Tools, in display order
    pub fn tools(&self) -> &[ModuleOption] {
        &self.tools
    }

    /// Look up an entry by list and id.
    ///
    /// Returns `None` on a miss; callers decide whether a miss is a rejected
    /// selection (session ops) or a zero-price no-op (pricing, scene).
    pub fn lookup(&self, list: CatalogList, id: &str) -> Option<EntryRef<'_>> {
        let pos = *self.index.get(&(list, id.to_string()))?;
        let entry = match list {
            CatalogList::Colors => EntryRef::Color(&self.colors[pos]),
            CatalogList::Bases => EntryRef::Base(&self.bases[pos]),
            CatalogList::Modules => EntryRef::Module(&self.cooking_modules[pos]),
            CatalogList::Accessories => EntryRef::Module(&self.accessories[pos]),
            CatalogList::Tools => EntryRef::Module(&self.tools[pos]),
        };
        Some(entry)
    }

    /// True if the id exists in the given list
    pub fn contains(&self, list: CatalogList, id: &str) -> bool {
        self.index.contains_key(&(list, id.to_string()))
    }

    /// Price of an id in a list, or zero when the id is unknown.
    ///
    /// This is the single place the NotFound-degrades-to-zero policy lives.
    pub fn price_of(&self, list: CatalogList, id: &str) -> u64 {
        self.lookup(list, id).map_or(0, |e| e.price())
    }

    /// Resolve a color entry, for scene and summary rendering
    pub fn color(&self, id: &str) -> Option<&ColorOption> {
        match self.lookup(CatalogList::Colors, id)? {
            EntryRef::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Resolve a base entry
    pub fn base(&self, id: &str) -> Option<&BaseOption> {
        match self.lookup(CatalogList::Bases, id)? {
            EntryRef::Base(b) => Some(b),
            _ => None,
        }
    }
}

fn color(id: &str, name: &str, hex: &str, price: u64) -> ColorOption {
    ColorOption {
        id: id.to_string(),
        name: name.to_string(),
        hex: hex.to_string(),
        price,
    }
}

fn base(id: &str, name: &str, description: &str, price: u64) -> BaseOption {
    BaseOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
    }
}

fn module(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: OptionCategory,
) -> ModuleOption {
    ModuleOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
    }
}
