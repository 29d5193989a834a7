//! Property-based tests for the configurator engine.
//!
//! Uses proptest to verify the invariants that must hold for every
//! configuration, not just the curated scenarios:
//! - total price never drops below the base price
//! - double-toggle is identity (state and price)
//! - price is invariant under multi-select reordering
//! - step navigation saturates and rejects without mutating

use proptest::prelude::*;
use pyretui::{
    derive_scene, total_price, Catalog, Configuration, ConfiguratorSession, WizardStep, BASE_PRICE,
};

/// Strategy: any color id, valid or junk
fn color_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("obsidian".to_string()),
        Just("gunmetal".to_string()),
        Just("ember".to_string()),
        Just("arctic".to_string()),
        "[a-z]{1,12}",
    ]
}

/// Strategy: any base id, valid or junk
fn base_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("no-base".to_string()),
        Just("standard-base".to_string()),
        Just("premium-base".to_string()),
        "[a-z-]{1,16}",
    ]
}

/// Strategy: subset of valid cooking module ids plus occasional junk
fn module_ids_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("pellet-feeder".to_string()),
            Just("flattop".to_string()),
            Just("pizza-oven".to_string()),
            Just("rotisserie".to_string()),
            Just("offset-box".to_string()),
            Just("cold-smoke".to_string()),
            "[a-z-]{1,16}",
        ],
        0..6,
    )
}

/// Strategy: arbitrary configurations, including unresolvable ids
fn configuration_strategy() -> impl Strategy<Value = Configuration> {
    (color_id_strategy(), base_id_strategy(), module_ids_strategy()).prop_map(
        |(color, base, modules)| Configuration {
            color,
            base,
            modules,
            ..Configuration::default()
        },
    )
}

proptest! {
    /// Total never drops below the base price, whatever the configuration
    #[test]
    fn total_is_at_least_base_price(config in configuration_strategy()) {
        let catalog = Catalog::standard();
        prop_assert!(total_price(&catalog, &config) >= BASE_PRICE);
    }

    /// Pricing is a pure function: same snapshot, same total
    #[test]
    fn pricing_is_deterministic(config in configuration_strategy()) {
        let catalog = Catalog::standard();
        prop_assert_eq!(total_price(&catalog, &config), total_price(&catalog, &config));
    }

    /// Total is invariant under reordering of the multi-select lists
    #[test]
    fn total_is_order_independent(config in configuration_strategy()) {
        let catalog = Catalog::standard();
        let mut reversed = config.clone();
        reversed.modules.reverse();
        prop_assert_eq!(
            total_price(&catalog, &config),
            total_price(&catalog, &reversed)
        );
    }

    /// Scene derivation is total: any configuration yields a plan
    #[test]
    fn scene_never_fails(config in configuration_strategy()) {
        let catalog = Catalog::standard();
        let scene = derive_scene(&catalog, &config);
        prop_assert!(scene.body_color.starts_with('#'));
    }

    /// Pricing and scene read the same snapshot and agree on selections
    #[test]
    fn scene_and_price_agree_on_rotisserie(select in any::<bool>()) {
        let catalog = Catalog::standard();
        let mut session = ConfiguratorSession::new();
        if select {
            session.toggle_module(&catalog, "rotisserie").unwrap();
        }
        let scene = derive_scene(&catalog, session.config());
        let total = total_price(&catalog, session.config());
        prop_assert_eq!(scene.attachments.rotisserie, select);
        prop_assert_eq!(total, if select { BASE_PRICE + 449 } else { BASE_PRICE });
    }

    /// Double-toggle of any valid module id is identity for state and price
    #[test]
    fn double_toggle_is_identity(id in prop_oneof![
        Just("pellet-feeder"),
        Just("flattop"),
        Just("pizza-oven"),
        Just("rotisserie"),
        Just("offset-box"),
        Just("cold-smoke"),
    ], pre_selected in any::<bool>()) {
        let catalog = Catalog::standard();
        let mut session = ConfiguratorSession::new();
        if pre_selected {
            session.toggle_module(&catalog, id).unwrap();
        }
        let config_before = session.config().clone();
        let total_before = total_price(&catalog, session.config());

        session.toggle_module(&catalog, id).unwrap();
        session.toggle_module(&catalog, id).unwrap();

        prop_assert_eq!(session.config(), &config_before);
        prop_assert_eq!(total_price(&catalog, session.config()), total_before);
    }

    /// Any sequence of advance/retreat keeps the step in range and saturates
    #[test]
    fn navigation_stays_in_range(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut session = ConfiguratorSession::new();
        for forward in moves {
            if forward {
                session.advance();
            } else {
                session.retreat();
            }
            let index = session.step().index();
            prop_assert!(index < WizardStep::COUNT);
        }
    }

    /// Out-of-range jumps are rejected and leave the step unchanged
    #[test]
    fn out_of_range_jump_rejected(index in WizardStep::COUNT..1000usize) {
        let mut session = ConfiguratorSession::new();
        session.go_to_step(3).unwrap();
        prop_assert!(session.go_to_step(index).is_err());
        prop_assert_eq!(session.step(), WizardStep::Accessories);
    }

    /// Valid jumps land exactly where asked, from anywhere
    #[test]
    fn valid_jump_lands(from in 0..WizardStep::COUNT, to in 0..WizardStep::COUNT) {
        let mut session = ConfiguratorSession::new();
        session.go_to_step(from).unwrap();
        session.go_to_step(to).unwrap();
        prop_assert_eq!(session.step().index(), to);
    }

    /// Arbitrary ids never crash selection, they are rejected or applied
    #[test]
    fn arbitrary_ids_never_crash(id in ".*") {
        let catalog = Catalog::standard();
        let mut session = ConfiguratorSession::new();
        let _ = session.select_color(&catalog, &id);
        let _ = session.toggle_module(&catalog, &id);
        // The session is still internally consistent
        prop_assert!(catalog.contains(
            pyretui::CatalogList::Colors,
            &session.config().color
        ));
    }
}
