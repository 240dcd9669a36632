//! Property tests over arbitrary command sequences.

use pandemic_deckbuilder::{
    CardCatalog, Command, CommandResult, EntityId, GameState, Phase, Session, SessionConfig, Zone,
};
use proptest::prelude::*;

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..7).prop_map(Command::PlayAt),
        (0u32..40).prop_map(|id| Command::Play(EntityId(id))),
        Just(Command::PlayAll),
        (0usize..4).prop_map(Command::Draw),
        (0usize..5).prop_map(|slot| Command::Acquire { slot }),
        Just(Command::EndTurn),
        Just(Command::BeginBuyPhase),
    ]
}

fn config(seed: u64, gated: bool) -> SessionConfig {
    let config = SessionConfig::new().with_seed(seed);
    if gated {
        config.acquire_in_buy_phase_only()
    } else {
        config
    }
}

proptest! {
    /// Every card ever created sits in exactly one zone.
    #[test]
    fn proptest_cards_are_conserved(
        seed in any::<u64>(),
        gated in any::<bool>(),
        commands in prop::collection::vec(command(), 0..80),
    ) {
        let mut session = Session::new(config(seed, gated)).unwrap();

        for command in commands {
            let _ = session.apply(command);

            let state = session.state();
            let view = session.view();
            prop_assert_eq!(view.card_count(), state.cards_created());
            prop_assert_eq!(state.zones.total_cards(), state.cards_created());
        }
    }

    /// A refused command leaves the visible state untouched.
    #[test]
    fn proptest_refused_commands_change_nothing(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 0..60),
    ) {
        let mut session = Session::new(config(seed, true)).unwrap();

        for command in commands {
            session.drain_events();
            let before = session.view();
            let history = session.state().history.len();

            if session.apply(command).is_err() {
                prop_assert_eq!(session.view(), before);
                prop_assert_eq!(session.state().history.len(), history);
                prop_assert!(session.drain_events().is_empty());
            }
        }
    }

    /// Ending a turn discards played then hand after the old discard, resets
    /// the ledger and draws min(hand size, available) cards.
    #[test]
    fn proptest_end_turn(
        seed in any::<u64>(),
        plays in 0usize..6,
        buy in any::<bool>(),
    ) {
        let mut session = Session::new(SessionConfig::new().with_seed(seed)).unwrap();
        for _ in 0..plays {
            let _ = session.apply(Command::PlayAt(0));
        }
        if buy {
            let _ = session.apply(Command::Acquire { slot: 1 });
        }

        let state = session.state();
        let mut expected = state.zones.cards(Zone::Discard).to_vec();
        expected.extend_from_slice(state.zones.cards(Zone::Played));
        expected.extend_from_slice(state.hand());
        let available = state.zones.zone_size(Zone::Deck) + expected.len();
        let turn = state.turn;

        let report = match session.apply(Command::EndTurn).unwrap() {
            CommandResult::TurnEnded(report) => report,
            other => panic!("expected TurnEnded, got {other:?}"),
        };

        let state = session.state();
        prop_assert_eq!(state.turn, turn + 1);
        prop_assert_eq!(state.phase, Phase::Play);
        prop_assert!(state.ledger.is_zero());
        prop_assert!(state.zones.is_empty(Zone::Played));
        prop_assert_eq!(report.draw.drawn_count(), available.min(5));
        prop_assert_eq!(state.hand(), report.draw.drawn.as_slice());
        if report.draw.recycles == 0 {
            prop_assert_eq!(state.zones.cards(Zone::Discard), expected.as_slice());
        }
    }
}

/// The same key always yields equal templates, and every stamped card gets
/// its own id.
#[test]
fn test_catalog_idempotence() {
    let catalog = CardCatalog::standard();
    assert_eq!(catalog.get("medic").unwrap(), catalog.get("medic").unwrap());

    let mut state = GameState::with_seed(0);
    let ids: Vec<_> = (0..5)
        .map(|_| state.spawn_card(&catalog, "medic", Zone::Discard).unwrap())
        .collect();

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());

    let names: Vec<_> = ids.iter().map(|&id| state.card(id).unwrap().name.clone()).collect();
    assert!(names.iter().all(|n| n == "Medic"));
}

/// Image references resolve by file name.
#[test]
fn test_catalog_find_by_image() {
    let catalog = CardCatalog::standard();

    let template = catalog
        .find_by_image("https://example.org/static/assets/cards/player-cards/scout.svg")
        .unwrap();
    assert_eq!(template.key.as_str(), "scout");
    assert!(catalog.find_by_image("scout.png").is_err());
}
