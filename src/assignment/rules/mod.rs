//! Fairness and safety rules the optimizer enforces.
//!
//! Each rule scores a crew member twice: `loss` is how much the member's
//! current boat violates the rule, `grad` is how attractive the member is as a
//! swap-in when some other crew member carries a loss.

mod assist;
mod partner;
mod repeat;
mod skill_spread;
mod whitelist;

pub use assist::AssistRule;
pub use partner::PartnerRule;
pub use repeat::RepeatRule;
pub use skill_spread::SkillSpreadRule;
pub use whitelist::WhitelistRule;

use std::sync::Arc;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::RuleWeights;
use crate::flotilla::BoatAssignment;
use crate::roster::Crew;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum RuleKind {
    Assist,
    Whitelist,
    SkillSpread,
    Partner,
    Repeat,
}

pub trait Rule: Send + Sync {
    fn kind(&self) -> RuleKind;

    /// Violation attributable to `crew` sailing on `boat`.
    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32;

    /// Desirability of `crew` as a swap-in for this rule.
    fn grad(&self, crew: &Crew) -> u32;
}

/// Builds the stock implementation of a rule.
pub fn standard_rule(kind: RuleKind) -> Arc<dyn Rule> {
    match kind {
        RuleKind::Assist => Arc::new(AssistRule),
        RuleKind::Whitelist => Arc::new(WhitelistRule),
        RuleKind::SkillSpread => Arc::new(SkillSpreadRule),
        RuleKind::Partner => Arc::new(PartnerRule),
        RuleKind::Repeat => Arc::new(RepeatRule),
    }
}

/// Rules in the order the optimizer works through them: heaviest first.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<(u32, Arc<dyn Rule>)>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// All five stock rules weighted by `weights`.
    pub fn standard(weights: &RuleWeights) -> Self {
        use strum::IntoEnumIterator;

        RuleKind::iter().fold(Self::empty(), |set, kind| {
            set.with(weights.weight(kind), standard_rule(kind))
        })
    }

    /// Adds a rule, replacing any rule of the same kind. Equal weights keep
    /// insertion order.
    pub fn with(mut self, weight: u32, rule: Arc<dyn Rule>) -> Self {
        self.rules.retain(|(_, existing)| existing.kind() != rule.kind());
        self.rules.push((weight, rule));
        self.rules.sort_by(|a, b| b.0.cmp(&a.0));
        self
    }

    pub fn without(mut self, kind: RuleKind) -> Self {
        self.rules.retain(|(_, rule)| rule.kind() != kind);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.iter().map(|(_, rule)| rule)
    }

    pub fn weighted(&self) -> impl Iterator<Item = (u32, &Arc<dyn Rule>)> {
        self.rules.iter().map(|(weight, rule)| (*weight, rule))
    }

    pub fn kinds(&self) -> Vec<RuleKind> {
        self.iter().map(|rule| rule.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
