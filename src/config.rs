use tracing::debug;

use crate::assignment::RuleKind;

/// Weights that fix the order in which the optimizer works through its rules.
/// A higher weight is handled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleWeights {
    pub assist: u32,
    pub whitelist: u32,
    pub skill_spread: u32,
    pub partner: u32,
    pub repeat: u32,
}

impl RuleWeights {
    pub fn weight(&self, rule: RuleKind) -> u32 {
        match rule {
            RuleKind::Assist => self.assist,
            RuleKind::Whitelist => self.whitelist,
            RuleKind::SkillSpread => self.skill_spread,
            RuleKind::Partner => self.partner,
            RuleKind::Repeat => self.repeat,
        }
    }
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            assist: 16,
            whitelist: 8,
            skill_spread: 4,
            partner: 2,
            repeat: 1,
        }
    }
}

/// Bounds on the selection walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    /// Boats one walk may skip because their minimum cannot be met.
    pub local: usize,
    /// Tie orders tried before settling on the best selection.
    pub global: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self { local: 6, global: 8 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub weights: RuleWeights,
    pub selection: SelectionLimits,
}

impl PipelineConfig {
    /// Reads overrides from `FLOTILLA_*` environment variables, falling back to
    /// the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            weights: RuleWeights {
                assist: env_or("FLOTILLA_WEIGHT_ASSIST", defaults.weights.assist),
                whitelist: env_or("FLOTILLA_WEIGHT_WHITELIST", defaults.weights.whitelist),
                skill_spread: env_or(
                    "FLOTILLA_WEIGHT_SKILL_SPREAD",
                    defaults.weights.skill_spread,
                ),
                partner: env_or("FLOTILLA_WEIGHT_PARTNER", defaults.weights.partner),
                repeat: env_or("FLOTILLA_WEIGHT_REPEAT", defaults.weights.repeat),
            },
            selection: SelectionLimits {
                local: env_or("FLOTILLA_LOCAL_ITERATIONS", defaults.selection.local),
                global: env_or("FLOTILLA_GLOBAL_ITERATIONS", defaults.selection.global),
            },
        };
        debug!(?config, "Loaded pipeline configuration");
        config
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
