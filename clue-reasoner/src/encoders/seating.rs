//! Classification of the seats around the table after a suggestion.
//!
//! Play passes forward from the suggester until somebody refutes. Every seat strictly between the
//! suggester and the refuter was asked and could not refute; the seats after the refuter were
//! never asked.
use std::cmp::Ordering;

use crate::config::NoRefuterPolicy;

/// The part a seat played in a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatRole {
    Suggester,
    Refuter,
    /// Was asked and holds none of the suggested cards.
    Passed,
    /// Was never asked; nothing is learned.
    NotReached,
}

/// The role of `seat` in a suggestion made by `suggester` and refuted by `refuter`, if anybody
/// refuted.
///
/// Without a refuter the outcome depends on the [`NoRefuterPolicy`]: either nobody counts as
/// reached, or everybody except the suggester passed.
pub fn seat_role(
    seat: usize,
    suggester: usize,
    refuter: Option<usize>,
    policy: NoRefuterPolicy,
) -> SeatRole {
    if seat == suggester {
        return SeatRole::Suggester;
    }

    match refuter {
        Some(refuter) if seat == refuter => SeatRole::Refuter,
        Some(refuter) if lies_strictly_between(seat, suggester, refuter) => SeatRole::Passed,
        Some(_) => SeatRole::NotReached,
        None => match policy {
            NoRefuterPolicy::NotReached => SeatRole::NotReached,
            NoRefuterPolicy::AllPassed => SeatRole::Passed,
        },
    }
}

/// The role of every seat `0..num_seats`, in seating order.
pub fn classify_seats(
    num_seats: usize,
    suggester: usize,
    refuter: Option<usize>,
    policy: NoRefuterPolicy,
) -> Vec<SeatRole> {
    (0..num_seats)
        .map(|seat| seat_role(seat, suggester, refuter, policy))
        .collect()
}

/// Whether walking forward from `from`, wrapping past the last seat, reaches `seat` before `to`.
fn lies_strictly_between(seat: usize, from: usize, to: usize) -> bool {
    match from.cmp(&to) {
        Ordering::Less => from < seat && seat < to,
        Ordering::Greater => from < seat || seat < to,
        Ordering::Equal => false,
    }
}
