use crate::core::view::in_scope;
use crate::models::role::Capabilities;
use crate::models::session::Session;
use crate::models::shift::{ShiftLabel, ShiftState};
use crate::models::tanker::TankerRecord;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    /// Branch users only: who is on shift.
    CurrentEmployee { label: ShiftLabel, state: ShiftState },
    /// Non-branch users only.
    TotalBranches(usize),
    NumberOfTankers(usize),
    /// Sum of the capacities that read as numbers; others are skipped.
    TotalQuantity(f64),
}

impl Card {
    pub fn title(&self) -> &'static str {
        match self {
            Card::CurrentEmployee { .. } => "Current Employee",
            Card::TotalBranches(_) => "Total Branches",
            Card::NumberOfTankers(_) => "Number of Tankers",
            Card::TotalQuantity(_) => "Total Quantity",
        }
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn cards(
        session: &Session,
        tankers: &[TankerRecord],
        shift: Option<(ShiftLabel, ShiftState)>,
    ) -> Vec<Card> {
        let caps: &Capabilities = &session.capabilities;
        let mut cards = Vec::new();

        if caps.is_branch {
            let (label, state) = shift.unwrap_or((ShiftLabel::Morning, ShiftState::Idle));
            cards.push(Card::CurrentEmployee { label, state });
        } else {
            let branches: BTreeSet<&str> = tankers.iter().map(|t| t.branch.as_str()).collect();
            cards.push(Card::TotalBranches(branches.len()));
        }

        let scoped: Vec<&TankerRecord> = tankers
            .iter()
            .filter(|t| in_scope(*t, caps, &session.branch_scope))
            .collect();

        let quantity: f64 = scoped
            .iter()
            .filter_map(|t| t.tanker_capacity.trim().parse::<f64>().ok())
            .sum();

        cards.push(Card::NumberOfTankers(scoped.len()));
        cards.push(Card::TotalQuantity(quantity));
        cards
    }
}
