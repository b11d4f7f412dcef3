use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{
    index::{CrewIndex, Slot},
    rules::{Rule, RuleKind, RuleSet},
    AssignmentError,
};
use crate::{
    config::RuleWeights,
    diagnostics::{Decision, DecisionSink, SettleReason},
    flotilla::{BoatAssignment, Flotilla},
    roster::{CrewKey, MAX_SKILL},
};

/// Per-rule outcome of one optimizer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleKind,
    pub swaps: usize,
    pub reason: SettleReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeReport {
    pub outcomes: Vec<RuleOutcome>,
    /// Crew still unlocked once every rule has settled.
    pub unlocked: usize,
    /// The flotilla was unchanged since the last run, so no rule was run.
    pub already_settled: bool,
}

impl OptimizeReport {
    pub fn total_swaps(&self) -> usize {
        self.outcomes.iter().map(|o| o.swaps).sum()
    }
}

/// Total loss per rule and the weighted sum over all rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlotillaScore {
    pub losses: Vec<(RuleKind, u32)>,
    pub weighted: u32,
}

/// One unlocked crew member scored against a rule.
struct Scored {
    key: CrewKey,
    boat: usize,
    loss: u32,
    grad: u32,
}

/// Greedy, rule-by-rule swap search over a flotilla.
///
/// Rules are handled strictly in weight order. Within a rule the crew member
/// with the largest loss is swapped with the best-graded crew member from
/// another boat that carries less loss, and the crew member moved in is locked.
/// Every swap shrinks the unlocked set, so each rule terminates.
pub struct AssignmentService {
    rules: RuleSet,
    sink: Arc<dyn DecisionSink>,
}

impl AssignmentService {
    pub fn builder(sink: Arc<dyn DecisionSink>) -> AssignmentServiceBuilder {
        AssignmentServiceBuilder::new(sink)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Redistributes crew among the flotilla's boats in place. Boats and crew
    /// are never added or removed.
    ///
    /// A flotilla this service already settled, and that has not changed
    /// since, is returned untouched.
    #[instrument(skip_all, fields(event_id = %flotilla.event_id))]
    pub fn optimize(&self, flotilla: &mut Flotilla) -> Result<OptimizeReport, AssignmentError> {
        if flotilla.is_settled() {
            debug!("Flotilla unchanged since it was last optimized");
            return Ok(OptimizeReport {
                already_settled: true,
                ..OptimizeReport::default()
            });
        }
        CrewIndex::build(&flotilla.crewed_boats)?;

        let mut unlocked: HashSet<CrewKey> = flotilla
            .crewed_boats
            .iter()
            .flat_map(|assignment| assignment.crews.iter().map(|crew| crew.key.clone()))
            .collect();
        self.lock_helpers(flotilla, &mut unlocked);

        let mut report = OptimizeReport::default();
        for rule in self.rules.iter() {
            let outcome = self.settle_rule(rule.as_ref(), flotilla, &mut unlocked)?;
            report.outcomes.push(outcome);
        }
        report.unlocked = unlocked.len();
        flotilla.settled = flotilla.fingerprint();

        info!(
            swaps = report.total_swaps(),
            unlocked = report.unlocked,
            "Flotilla optimized"
        );
        Ok(report)
    }

    /// Sums every crew member's loss per rule, locked or not.
    pub fn score(&self, flotilla: &Flotilla) -> FlotillaScore {
        let mut score = FlotillaScore::default();
        for (weight, rule) in self.rules.weighted() {
            let loss: u32 = flotilla
                .crewed_boats
                .iter()
                .flat_map(|assignment| {
                    assignment
                        .crews
                        .iter()
                        .map(move |crew| rule.loss(crew, assignment))
                })
                .sum();
            score.weighted += weight * loss;
            score.losses.push((rule.kind(), loss));
        }
        score
    }

    /// Keeps the first fully skilled crew member on each boat that needs
    /// assistance out of reach of the swap search.
    fn lock_helpers(&self, flotilla: &Flotilla, unlocked: &mut HashSet<CrewKey>) {
        for assignment in &flotilla.crewed_boats {
            if !assignment.boat.assistance_required {
                continue;
            }
            if let Some(helper) = assignment.crews.iter().find(|c| c.skill == MAX_SKILL) {
                unlocked.remove(&helper.key);
                self.sink.record(Decision::HelperLocked {
                    boat: assignment.boat.key.clone(),
                    crew: helper.key.clone(),
                });
            }
        }
    }

    fn settle_rule(
        &self,
        rule: &dyn Rule,
        flotilla: &mut Flotilla,
        unlocked: &mut HashSet<CrewKey>,
    ) -> Result<RuleOutcome, AssignmentError> {
        let kind = rule.kind();
        let mut swaps = 0;

        let reason = loop {
            if unlocked.len() <= 1 {
                break SettleReason::Exhausted;
            }

            let index = CrewIndex::build(&flotilla.crewed_boats)?;
            let scored = Self::score_unlocked(rule, &flotilla.crewed_boats, unlocked);

            // First maximum in flotilla order.
            let Some(target) = scored
                .iter()
                .reduce(|best, s| if s.loss > best.loss { s } else { best })
            else {
                break SettleReason::Exhausted;
            };
            if target.loss == 0 {
                break SettleReason::NoViolation;
            }

            let mut by_grad: Vec<&Scored> = scored.iter().collect();
            by_grad.sort_by(|a, b| b.grad.cmp(&a.grad));
            if by_grad.first().map_or(0, |s| s.grad) == 0 {
                break SettleReason::NoGradient;
            }

            let Some(candidate) = by_grad
                .into_iter()
                .find(|s| s.boat != target.boat && s.loss < target.loss)
            else {
                break SettleReason::NoCandidate;
            };

            let target_slot = index.locate(kind, &target.key)?;
            let candidate_slot = index.locate(kind, &candidate.key)?;
            Self::exchange(&mut flotilla.crewed_boats, target_slot, candidate_slot);

            let unlocked_before = unlocked.len();
            unlocked.remove(&candidate.key);
            swaps += 1;

            self.sink.record(Decision::Swapped {
                rule: kind,
                target: target.key.clone(),
                target_boat: flotilla.crewed_boats[target_slot.0].boat.key.clone(),
                target_loss: target.loss,
                candidate: candidate.key.clone(),
                candidate_boat: flotilla.crewed_boats[candidate_slot.0].boat.key.clone(),
                candidate_loss: candidate.loss,
                unlocked_before,
                unlocked_after: unlocked.len(),
            });
        };

        debug!(rule = %kind, swaps, ?reason, "Rule settled");
        self.sink.record(Decision::RuleSettled {
            rule: kind,
            reason,
            swaps,
        });

        Ok(RuleOutcome {
            rule: kind,
            swaps,
            reason,
        })
    }

    fn score_unlocked(
        rule: &dyn Rule,
        boats: &[BoatAssignment],
        unlocked: &HashSet<CrewKey>,
    ) -> Vec<Scored> {
        boats
            .iter()
            .enumerate()
            .flat_map(|(boat, assignment)| {
                assignment
                    .crews
                    .iter()
                    .filter(move |crew| unlocked.contains(&crew.key))
                    .map(move |crew| Scored {
                        key: crew.key.clone(),
                        boat,
                        loss: rule.loss(crew, assignment),
                        grad: rule.grad(crew),
                    })
            })
            .collect()
    }

    fn exchange(boats: &mut [BoatAssignment], (tb, ts): Slot, (cb, cs): Slot) {
        let target = boats[tb].crews[ts].clone();
        let candidate = std::mem::replace(&mut boats[cb].crews[cs], target);
        boats[tb].crews[ts] = candidate;
    }
}

pub struct AssignmentServiceBuilder {
    rules: RuleSet,
    sink: Arc<dyn DecisionSink>,
}

impl AssignmentServiceBuilder {
    fn new(sink: Arc<dyn DecisionSink>) -> Self {
        Self {
            rules: RuleSet::standard(&RuleWeights::default()),
            sink,
        }
    }

    /// Replaces the rule set with the stock rules under `weights`.
    pub fn with_weights(mut self, weights: &RuleWeights) -> Self {
        self.rules = RuleSet::standard(weights);
        self
    }

    pub fn with_rule(mut self, weight: u32, rule: Arc<dyn Rule>) -> Self {
        self.rules = self.rules.with(weight, rule);
        self
    }

    pub fn without_rule(mut self, kind: RuleKind) -> Self {
        self.rules = self.rules.without(kind);
        self
    }

    pub fn build(self) -> AssignmentService {
        AssignmentService {
            rules: self.rules,
            sink: self.sink,
        }
    }
}
