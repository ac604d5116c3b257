// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::constants::{ParamId, DEFAULT_SEQ_ERROR_RATE};
use crate::errors::Error;
use crate::model::genotype::GENOTYPE_STATES;
use crate::Result;

pub mod genotype;
pub mod p17;
pub mod parameters;
pub mod pt19;
pub mod uniform;

pub use genotype::{Genotype, Nucleotide};
pub use p17::P17GenotypeErrorModel;
pub use parameters::GenotypeErrorRates;
pub use pt19::PT19GenotypeErrorModel;
pub use uniform::UniformErrorModel;

/// Bit-encoded observed state over an alphabet of up to 32 states.
/// A single set bit is an unambiguous observation; the all-ones mask over
/// the alphabet means the observation is completely unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateMask(pub u32);

impl StateMask {
    /// Mask with only the bit for the given state set.
    pub fn unambiguous(state: usize) -> Self {
        StateMask(1 << state)
    }

    /// All-ones mask over an alphabet of the given size.
    pub fn fully_ambiguous(states: usize) -> Self {
        StateMask(((1u64 << states) - 1) as u32)
    }

    /// Canonical true-state candidate: the index of the lowest set bit.
    pub fn canonical_state(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// Number of states consistent with the observation.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_fully_ambiguous(self, states: usize) -> bool {
        self == Self::fully_ambiguous(states)
    }

    /// Whether the mask constrains the true state at all. The empty mask is
    /// treated like the all-ones mask: an observation consistent with no
    /// state carries no information.
    pub fn is_uninformative(self, states: usize) -> bool {
        self.0 == 0 || self.is_fully_ambiguous(states)
    }
}

/// Capability interface of all tip error models. Given the current parameter
/// values, `compute_state_probs` maps one observed state mask to a vector of
/// relative (unnormalized) likelihoods over the true states, which seeds the
/// conditional likelihood vector of the corresponding tip.
///
/// `set_params` is the sole mutator; concurrent `compute_state_probs` calls
/// on a shared instance are safe as long as no thread is writing.
pub trait ErrorModel: Debug + Send + Sync {
    /// Stable tag of this model, as used in configuration and serialization.
    fn name(&self) -> &'static str;

    /// Size of the state alphabet this model operates on.
    fn states(&self) -> usize;

    /// Optimizer tags of the tunable parameters, order-aligned with
    /// `param_names` and `params`.
    fn param_ids(&self) -> Vec<ParamId>;

    fn param_names(&self) -> Vec<&'static str>;

    /// Current parameter values, in `param_ids` order.
    fn params(&self) -> Vec<f64>;

    /// Bulk parameter update. Fails if fewer values are supplied than the
    /// model minimally requires; surplus values are ignored. Values are
    /// taken as-is, bounds enforcement is up to the caller.
    fn set_params(&mut self, values: &[f64]) -> Result<()>;

    /// Overwrites `probs` (length `states()`) with the relative likelihood
    /// of each true state given the observation. Total over all masks in
    /// `[0, 2^states)`; uninformative masks yield all-ones.
    fn compute_state_probs(&self, observed: StateMask, probs: &mut [f64]);
}

/// The closed set of available error models.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumIter, IntoStaticStr,
)]
pub enum ErrorModelKind {
    #[strum(serialize = "UNIFORM")]
    Uniform,
    #[strum(serialize = "P17")]
    P17,
    #[strum(serialize = "PT19")]
    PT19,
}

impl ErrorModelKind {
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().map_err(|_| Error::UnknownModelTag {
            tag: tag.to_owned(),
        })
    }

    /// Builds a model of this kind with default starting rates. The genotype
    /// models are only defined over the ten-state diploid alphabet.
    pub fn instantiate(&self, states: usize) -> Result<Box<dyn ErrorModel>> {
        let model: Box<dyn ErrorModel> = match self {
            ErrorModelKind::Uniform => Box::new(UniformErrorModel::new(
                states,
                f64::from(DEFAULT_SEQ_ERROR_RATE),
            )),
            ErrorModelKind::P17 => {
                self.ensure_genotype_states(states)?;
                Box::new(P17GenotypeErrorModel::new(GenotypeErrorRates::default()))
            }
            ErrorModelKind::PT19 => {
                self.ensure_genotype_states(states)?;
                Box::new(PT19GenotypeErrorModel::new(GenotypeErrorRates::default()))
            }
        };
        debug!(
            "instantiated {} error model over {} states",
            model.name(),
            model.states()
        );

        Ok(model)
    }

    fn ensure_genotype_states(&self, states: usize) -> Result<()> {
        if states == GENOTYPE_STATES {
            Ok(())
        } else {
            Err(Error::UnsupportedStates {
                model: (*self).into(),
                expected: GENOTYPE_STATES,
                states,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_mask() {
        let mask = StateMask::unambiguous(3);
        assert_eq!(mask.0, 0b1000);
        assert_eq!(mask.canonical_state(), 3);
        assert_eq!(mask.count(), 1);
        assert!(!mask.is_fully_ambiguous(4));

        let full = StateMask::fully_ambiguous(10);
        assert_eq!(full.0, 0b11_1111_1111);
        assert_eq!(full.count(), 10);
        assert!(full.is_fully_ambiguous(10));
        assert!(full.is_uninformative(10));
        assert!(StateMask(0).is_uninformative(10));

        // partial ambiguity: lowest set bit is canonical
        let partial = StateMask(0b0110);
        assert_eq!(partial.canonical_state(), 1);
        assert_eq!(partial.count(), 2);
        assert!(!partial.is_uninformative(4));
    }

    #[test]
    fn test_kind_tag_round_trip() {
        for (kind, tag) in &[
            (ErrorModelKind::Uniform, "UNIFORM"),
            (ErrorModelKind::P17, "P17"),
            (ErrorModelKind::PT19, "PT19"),
        ] {
            assert_eq!(ErrorModelKind::from_tag(tag).unwrap(), *kind);
            let name: &'static str = (*kind).into();
            assert_eq!(name, *tag);
        }
        assert_eq!(
            ErrorModelKind::from_tag("P18"),
            Err(Error::UnknownModelTag {
                tag: "P18".to_owned()
            })
        );
    }

    #[test]
    fn test_instantiate() {
        let model = ErrorModelKind::Uniform.instantiate(4).unwrap();
        assert_eq!(model.name(), "UNIFORM");
        assert_eq!(model.states(), 4);

        let model = ErrorModelKind::P17.instantiate(10).unwrap();
        assert_eq!(model.name(), "P17");
        assert_eq!(model.states(), 10);

        assert_eq!(
            ErrorModelKind::PT19.instantiate(4).unwrap_err(),
            Error::UnsupportedStates {
                model: "PT19",
                expected: 10,
                states: 4
            }
        );
    }
}
