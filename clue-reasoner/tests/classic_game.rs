#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024
//! Replays a scripted six-player game and checks the final notepad.

mod helpers;

use clue_reasoner::Category;
use clue_reasoner::DpllOracle;
use clue_reasoner::GameConfig;
use clue_reasoner::GameConfigBuilder;
use clue_reasoner::KnowledgeBase;
use clue_reasoner::LiteralValue;
use clue_reasoner::NoRefuterPolicy;
use clue_reasoner::Reasoner;
use helpers::init_logger;
use helpers::replay_classic_game;

const SOLVED_NOTEPAD: &str = concat!(
    "\tsc\tmu\twh\tgr\tpe\tpl\tcf\n",
    "mu\tN\tN\tN\tN\tN\tY\tN\n",
    "pl\tN\tY\tN\tN\tN\tN\tN\n",
    "gr\tN\tN\tY\tN\tN\tN\tN\n",
    "pe\tN\tN\tN\tN\tN\tN\tY\n",
    "sc\tN\tY\tN\tN\tN\tN\tN\n",
    "wh\tY\tN\tN\tN\tN\tN\tN\n",
    "kn\tN\tN\tY\tN\tN\tN\tN\n",
    "ca\tN\tN\tN\tY\tN\tN\tN\n",
    "re\tN\tN\tN\tN\tY\tN\tN\n",
    "ro\tN\tN\tY\tN\tN\tN\tN\n",
    "pi\tN\tN\tN\tN\tN\tN\tY\n",
    "wr\tN\tN\tN\tY\tN\tN\tN\n",
    "ha\tN\tN\tN\tN\tY\tN\tN\n",
    "lo\tN\tY\tN\tN\tN\tN\tN\n",
    "di\tN\tN\tN\tN\tY\tN\tN\n",
    "ki\tN\tN\tN\tY\tN\tN\tN\n",
    "ba\tN\tN\tN\tN\tN\tY\tN\n",
    "co\tN\tN\tN\tN\tN\tY\tN\n",
    "bi\tN\tN\tN\tN\tN\tN\tY\n",
    "li\tY\tN\tN\tN\tN\tN\tN\n",
    "st\tY\tN\tN\tN\tN\tN\tN\n",
);

/// The classic game with the given policy for suggestions nobody refuted.
fn classic(policy: NoRefuterPolicy) -> GameConfig {
    classic_builder()
        .no_refuter_policy(policy)
        .build()
        .expect("valid configuration")
}

fn classic_builder() -> GameConfigBuilder {
    GameConfig::builder()
        .players(["sc", "mu", "wh", "gr", "pe", "pl"])
        .suspects(["mu", "pl", "gr", "pe", "sc", "wh"])
        .weapons(["kn", "ca", "re", "ro", "pi", "wr"])
        .rooms(["ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st"])
}

fn assert_solution(reasoner: &Reasoner) {
    let config = reasoner.config();
    let notepad = reasoner.notepad();

    assert_eq!(SOLVED_NOTEPAD, notepad.to_string());
    assert_eq!(config.card("pe").ok(), notepad.solution(Category::Suspect));
    assert_eq!(config.card("pi").ok(), notepad.solution(Category::Weapon));
    assert_eq!(config.card("bi").ok(), notepad.solution(Category::Room));
}

#[test]
fn scripted_game_is_solved_when_nobody_is_reached() {
    init_logger();
    let mut reasoner = Reasoner::new(classic(NoRefuterPolicy::NotReached));
    replay_classic_game(&mut reasoner).unwrap();

    assert!(reasoner.is_satisfiable());
    assert_eq!(649, reasoner.knowledge_base().len());
    assert_solution(&reasoner);
}

#[test]
fn scripted_game_is_solved_when_everybody_passed() {
    init_logger();
    let mut reasoner = Reasoner::new(classic(NoRefuterPolicy::AllPassed));
    replay_classic_game(&mut reasoner).unwrap();

    assert!(reasoner.is_satisfiable());
    // The two unrefuted suggestions each exclude three cards for five players.
    assert_eq!(679, reasoner.knowledge_base().len());
    assert_solution(&reasoner);
}

#[test]
fn correct_accusation_leaves_the_notepad_unchanged() {
    let mut reasoner = Reasoner::new(GameConfig::classic());
    replay_classic_game(&mut reasoner).unwrap();

    let appended = reasoner.accuse("sc", ["pe", "pi", "bi"], true).unwrap();
    assert_eq!(6, appended.len());

    assert!(reasoner.is_satisfiable());
    assert_solution(&reasoner);
}

#[test]
fn wrong_accusation_contradicts_the_game() {
    let mut reasoner = Reasoner::new(GameConfig::classic());
    replay_classic_game(&mut reasoner).unwrap();

    let _ = reasoner.accuse("sc", ["pe", "pi", "bi"], false).unwrap();
    assert!(!reasoner.is_satisfiable());
}

#[test]
fn early_game_leaves_the_case_file_open() {
    let mut reasoner = Reasoner::new(GameConfig::classic());
    let _ = reasoner.hand("sc", ["wh", "li", "st"]).unwrap();
    let _ = reasoner
        .suggest("sc", ["sc", "ro", "lo"], Some("mu"), Some("sc"))
        .unwrap();

    assert_eq!(LiteralValue::True, reasoner.query_names("mu", "sc").unwrap());
    assert_eq!(LiteralValue::False, reasoner.query_names("cf", "sc").unwrap());
    assert_eq!(
        LiteralValue::Undetermined,
        reasoner.query_names("cf", "pe").unwrap()
    );

    let notepad = reasoner.notepad();
    assert_eq!(None, notepad.solution(Category::Suspect));
}

#[test]
fn game_resumes_from_dimacs() {
    let config = GameConfig::classic();
    let mut reasoner = Reasoner::new(config.clone());
    replay_classic_game(&mut reasoner).unwrap();

    let mut written = vec![];
    reasoner.write_dimacs(&mut written).unwrap();
    assert!(String::from_utf8(written.clone())
        .unwrap()
        .starts_with("p cnf 147 649\n"));

    let knowledge_base = KnowledgeBase::read_dimacs(written.as_slice()).unwrap();
    assert_eq!(reasoner.knowledge_base(), &knowledge_base);

    let mut resumed = Reasoner::from_knowledge_base(config, knowledge_base, DpllOracle).unwrap();
    let _ = resumed.accuse("sc", ["pe", "pi", "bi"], true).unwrap();

    assert_eq!(655, resumed.knowledge_base().len());
    assert_solution(&resumed);
}
