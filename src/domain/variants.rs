//! Deal-type policies: the six registered ways a round can be dealt and led.

use super::pants::PantsKind;
use super::state::{next_seat, team_of, Seat};

/// The six deal types a player can call. One concrete `Deal` carries the
/// round; the kind selects the dealing, trump-request, and turn-advance
/// policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealKind {
    /// All 32 cards out at once; the ace of diamonds marks the owner.
    AllCards,
    /// Staged dealing, `n` cards per seat and batch (n in 2..=4).
    Staged(u8),
    /// Pants with single-card exchange units.
    SinglePants,
    /// Pants with left/right pair exchange units.
    DoublePants,
}

pub const DEAL_KINDS: [DealKind; 6] = [
    DealKind::AllCards,
    DealKind::Staged(2),
    DealKind::Staged(3),
    DealKind::Staged(4),
    DealKind::SinglePants,
    DealKind::DoublePants,
];

impl DealKind {
    /// The label players call the deal by.
    pub fn label(self) -> &'static str {
        match self {
            DealKind::AllCards => "По всем",
            DealKind::Staged(2) => "По 2",
            DealKind::Staged(3) => "По 3",
            DealKind::Staged(_) => "По 4",
            DealKind::SinglePants => "Одинарные штаны",
            DealKind::DoublePants => "Двойные штаны",
        }
    }

    /// Case-insensitive exact match against the registered labels.
    pub fn from_label(text: &str) -> Option<DealKind> {
        let wanted = text.trim().to_lowercase();
        DEAL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.label().to_lowercase() == wanted)
    }

    pub fn labels() -> [&'static str; 6] {
        [
            DealKind::AllCards.label(),
            DealKind::Staged(2).label(),
            DealKind::Staged(3).label(),
            DealKind::Staged(4).label(),
            DealKind::SinglePants.label(),
            DealKind::DoublePants.label(),
        ]
    }

    pub(crate) fn pants_kind(self) -> Option<PantsKind> {
        match self {
            DealKind::SinglePants => Some(PantsKind::Single),
            DealKind::DoublePants => Some(PantsKind::Double),
            _ => None,
        }
    }

    /// Who leads after a resolved trick: the winner, except in staged deals
    /// where the owner always leads.
    pub(crate) fn next_leader(self, owner: Seat, winner: Seat) -> Seat {
        match self {
            DealKind::Staged(_) => owner,
            _ => winner,
        }
    }

    /// Leader for the first trick after the pants exchange resolved.
    ///
    /// Single: the pile winner unless its team already owns the deal.
    /// Double: both foreign side-winners hand the lead to the seat after
    /// the owner; exactly one leads itself; none leaves the owner leading.
    pub(crate) fn exchange_leader(
        self,
        owner: Seat,
        left_winner: Seat,
        right_winner: Option<Seat>,
    ) -> Seat {
        let owner_team = team_of(owner);
        match (self, right_winner) {
            (DealKind::SinglePants, _) => {
                if team_of(left_winner) != owner_team {
                    left_winner
                } else {
                    owner
                }
            }
            (DealKind::DoublePants, Some(right_winner)) => {
                let left_foreign = team_of(left_winner) != owner_team;
                let right_foreign = team_of(right_winner) != owner_team;
                match (left_foreign, right_foreign) {
                    (true, true) => next_seat(owner),
                    (true, false) => left_winner,
                    (false, true) => right_winner,
                    (false, false) => owner,
                }
            }
            _ => owner,
        }
    }
}
