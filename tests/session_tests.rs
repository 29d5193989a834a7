//! Integration tests exercising the configurator engine through the public
//! API: catalog, session operations, pricing, and scene derivation together.

use pyretui::{
    build_quote, derive_scene, total_price, Catalog, CatalogList, Configuration,
    ConfiguratorSession, SelectionError, WizardStep, BASE_PRICE, NO_BASE_ID,
};

#[test]
fn fresh_session_prices_at_base() {
    let catalog = Catalog::standard();
    let session = ConfiguratorSession::new();
    assert_eq!(session.config().color, "obsidian");
    assert_eq!(session.config().base, NO_BASE_ID);
    assert_eq!(total_price(&catalog, session.config()), BASE_PRICE);
    assert_eq!(total_price(&catalog, session.config()), 4999);
}

#[test]
fn full_walkthrough_builds_the_expected_quote() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();

    // Exterior
    session.select_color(&catalog, "ember").unwrap();
    session.advance();
    // Base
    session.select_base(&catalog, "standard-base").unwrap();
    session.advance();
    // Modules
    session.toggle_module(&catalog, "pizza-oven").unwrap();
    session.advance();
    // Skip accessories and tools — every step is optional
    session.advance();
    session.advance();
    assert_eq!(session.step(), WizardStep::Summary);

    // 4999 + 500 + 799 + 599
    assert_eq!(total_price(&catalog, session.config()), 6897);

    let quote = build_quote(&catalog, session.config());
    assert_eq!(quote.total, 6897);
    let labels: Vec<&str> = quote.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "PYRE Base Unit",
            "Ember Red",
            "Standard Base",
            "Pizza Oven Module",
        ]
    );
}

#[test]
fn rotisserie_toggle_drives_scene_and_price_together() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();
    let base_total = total_price(&catalog, session.config());

    session.toggle_module(&catalog, "rotisserie").unwrap();
    assert!(derive_scene(&catalog, session.config()).attachments.rotisserie);
    assert_eq!(total_price(&catalog, session.config()), base_total + 449);

    session.toggle_module(&catalog, "rotisserie").unwrap();
    assert!(!derive_scene(&catalog, session.config()).attachments.rotisserie);
    assert_eq!(total_price(&catalog, session.config()), base_total);
}

#[test]
fn base_selection_drives_stand_visibility() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();
    assert!(!derive_scene(&catalog, session.config()).has_base);

    session.select_base(&catalog, "standard-base").unwrap();
    assert!(derive_scene(&catalog, session.config()).has_base);

    session.select_base(&catalog, "premium-base").unwrap();
    assert!(derive_scene(&catalog, session.config()).has_base);

    session.select_base(&catalog, NO_BASE_ID).unwrap();
    assert!(!derive_scene(&catalog, session.config()).has_base);
}

#[test]
fn rejected_operations_change_nothing() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();
    session.select_color(&catalog, "arctic").unwrap();
    session.toggle_tool(&catalog, "gloves").unwrap();
    session.go_to_step(4).unwrap();

    let config_before = session.config().clone();
    let step_before = session.step();
    let total_before = total_price(&catalog, session.config());

    assert!(matches!(
        session.select_color(&catalog, "neon"),
        Err(SelectionError::InvalidSelection { .. })
    ));
    assert!(session.toggle_module(&catalog, "jet-engine").is_err());
    assert!(matches!(
        session.go_to_step(6),
        Err(SelectionError::StepOutOfRange { .. })
    ));

    assert_eq!(session.config(), &config_before);
    assert_eq!(session.step(), step_before);
    assert_eq!(total_price(&catalog, session.config()), total_before);
}

#[test]
fn stale_configuration_degrades_instead_of_failing() {
    // A configuration holding ids the catalog no longer knows about (e.g.
    // saved before a catalog revision) prices and renders as if those
    // options were absent.
    let catalog = Catalog::standard();
    let config = Configuration {
        color: "copper".to_string(),
        base: "discontinued-cart".to_string(),
        modules: vec!["pizza-oven".to_string(), "retired-module".to_string()],
        ..Configuration::default()
    };

    assert_eq!(total_price(&catalog, &config), BASE_PRICE + 599);

    let scene = derive_scene(&catalog, &config);
    assert_eq!(scene.body_color, "#1a1a1a"); // fallback finish
    assert!(scene.has_base); // unknown base is still not the sentinel
}

#[test]
fn step_navigation_is_saturating_and_fully_connected() {
    let mut session = ConfiguratorSession::new();

    // Saturate upward
    for _ in 0..10 {
        session.advance();
    }
    assert_eq!(session.step(), WizardStep::Summary);

    // Saturate downward
    for _ in 0..10 {
        session.retreat();
    }
    assert_eq!(session.step(), WizardStep::Exterior);

    // Any step from any step
    for from in 0..WizardStep::COUNT {
        for to in 0..WizardStep::COUNT {
            session.go_to_step(from).unwrap();
            session.go_to_step(to).unwrap();
            assert_eq!(session.step().index(), to);
        }
    }
}

#[test]
fn display_order_is_catalog_order_not_selection_order() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();

    // Select tools in reverse catalog order
    session.toggle_tool(&catalog, "apron").unwrap();
    session.toggle_tool(&catalog, "tool-set").unwrap();
    // Selection order is preserved in the raw configuration
    assert_eq!(session.config().tools, vec!["apron", "tool-set"]);

    // But the quote follows catalog order
    let quote = build_quote(&catalog, session.config());
    let tool_labels: Vec<&str> = quote
        .items
        .iter()
        .filter(|i| i.label.contains("Tool Set") || i.label.contains("Apron"))
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(tool_labels, vec!["PYRE Tool Set", "PYRE Leather Apron"]);
}

#[test]
fn multi_select_lists_are_independent_per_category() {
    let catalog = Catalog::standard();
    let mut session = ConfiguratorSession::new();
    session.toggle_module(&catalog, "cold-smoke").unwrap();
    session.toggle_accessory(&catalog, "cover").unwrap();
    session.toggle_tool(&catalog, "thermometer").unwrap();

    let config = session.config();
    assert!(config.is_selected(CatalogList::Modules, "cold-smoke"));
    assert!(!config.is_selected(CatalogList::Accessories, "cold-smoke"));
    assert!(config.is_selected(CatalogList::Accessories, "cover"));
    assert!(config.is_selected(CatalogList::Tools, "thermometer"));

    assert_eq!(
        total_price(&catalog, config),
        BASE_PRICE + 299 + 149 + 149
    );
}
