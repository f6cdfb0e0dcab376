//! Shared set-up for the reasoner integration tests.
#![allow(dead_code, reason = "not every test binary uses every helper")]

use clue_reasoner::GameConfig;
use clue_reasoner::NoRefuterPolicy;
use clue_reasoner::Reasoner;
use clue_reasoner::ReasonerResult;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three players, two suspects, one weapon and one room.
pub(crate) fn small_game(policy: NoRefuterPolicy) -> GameConfig {
    GameConfig::builder()
        .players(["P1", "P2", "P3"])
        .suspects(["s1", "s2"])
        .weapons(["w1"])
        .rooms(["r1"])
        .no_refuter_policy(policy)
        .build()
        .expect("valid configuration")
}

/// Four players and three cards per category, so that single events leave most cards open.
pub(crate) fn medium_game(policy: NoRefuterPolicy) -> GameConfig {
    GameConfig::builder()
        .players(["ann", "bob", "cat", "dan"])
        .suspects(["plum", "green", "white"])
        .weapons(["rope", "knife", "pipe"])
        .rooms(["hall", "study", "attic"])
        .no_refuter_policy(policy)
        .build()
        .expect("valid configuration")
}

/// A suggestion: suggester, the three cards, the refuter and the card shown.
pub(crate) type Turn = (
    &'static str,
    [&'static str; 3],
    Option<&'static str>,
    Option<&'static str>,
);

/// The hand of "sc" in the scripted six-player game.
pub(crate) const CLASSIC_HAND: [&str; 3] = ["wh", "li", "st"];

/// Every suggestion of the scripted six-player game, in the order they were made.
pub(crate) const CLASSIC_TURNS: [Turn; 27] = [
    ("sc", ["sc", "ro", "lo"], Some("mu"), Some("sc")),
    ("mu", ["pe", "pi", "di"], Some("pe"), None),
    ("wh", ["mu", "re", "ba"], Some("pe"), None),
    ("gr", ["wh", "kn", "ba"], Some("pl"), None),
    ("pe", ["gr", "ca", "di"], Some("wh"), None),
    ("pl", ["wh", "wr", "st"], Some("sc"), Some("wh")),
    ("sc", ["pl", "ro", "co"], Some("mu"), Some("pl")),
    ("mu", ["pe", "ro", "ba"], Some("wh"), None),
    ("wh", ["mu", "ca", "st"], Some("gr"), None),
    ("gr", ["pe", "kn", "di"], Some("pe"), None),
    ("pe", ["mu", "pi", "di"], Some("pl"), None),
    ("pl", ["gr", "kn", "co"], Some("wh"), None),
    ("sc", ["pe", "kn", "lo"], Some("mu"), Some("lo")),
    ("mu", ["pe", "kn", "di"], Some("wh"), None),
    ("wh", ["pe", "wr", "ha"], Some("gr"), None),
    ("gr", ["wh", "pi", "co"], Some("pl"), None),
    ("pe", ["sc", "pi", "ha"], Some("mu"), None),
    ("pl", ["pe", "pi", "ba"], None, None),
    ("sc", ["wh", "pi", "ha"], Some("pe"), Some("ha")),
    ("wh", ["pe", "pi", "ha"], Some("pe"), None),
    ("pe", ["pe", "pi", "ha"], None, None),
    ("sc", ["gr", "pi", "st"], Some("wh"), Some("gr")),
    ("mu", ["pe", "pi", "ba"], Some("pl"), None),
    ("wh", ["pe", "pi", "st"], Some("sc"), Some("st")),
    ("gr", ["wh", "pi", "st"], Some("sc"), Some("wh")),
    ("pe", ["wh", "pi", "st"], Some("sc"), Some("wh")),
    ("pl", ["pe", "pi", "ki"], Some("gr"), None),
];

/// Feed the hand and every suggestion of the scripted game to `reasoner`.
pub(crate) fn replay_classic_game(reasoner: &mut Reasoner) -> ReasonerResult<()> {
    let _ = reasoner.hand("sc", CLASSIC_HAND)?;

    for (suggester, cards, refuter, shown) in CLASSIC_TURNS {
        let _ = reasoner.suggest(suggester, cards, refuter, shown)?;
    }

    Ok(())
}
