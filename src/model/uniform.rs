use derive_new::new;
use getset::CopyGetters;

use crate::constants::{ParamId, PARAM_SEQ_ERROR};
use crate::errors::Error;
use crate::model::{ErrorModel, ErrorModelKind, StateMask};
use crate::Result;

/// Alphabet-agnostic error model: the observed state keeps probability
/// `1 - e`, and the error mass `e` is spread uniformly over all states the
/// observation excludes. Usable for any fixed alphabet size, e.g. plain
/// nucleotides or amino acids.
#[derive(new, Copy, Clone, Debug, PartialEq, CopyGetters, Serialize, Deserialize)]
pub struct UniformErrorModel {
    #[getset(get_copy = "pub")]
    states: usize,
    #[getset(get_copy = "pub")]
    seq_error_rate: f64,
}

impl ErrorModel for UniformErrorModel {
    fn name(&self) -> &'static str {
        ErrorModelKind::Uniform.into()
    }

    fn states(&self) -> usize {
        self.states
    }

    fn param_ids(&self) -> Vec<ParamId> {
        vec![PARAM_SEQ_ERROR]
    }

    fn param_names(&self) -> Vec<&'static str> {
        vec!["SEQ_ERROR"]
    }

    fn params(&self) -> Vec<f64> {
        vec![self.seq_error_rate]
    }

    fn set_params(&mut self, values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::InsufficientParams {
                expected: 1,
                got: 0,
            });
        }
        self.seq_error_rate = values[0];

        Ok(())
    }

    fn compute_state_probs(&self, observed: StateMask, probs: &mut [f64]) {
        debug_assert_eq!(probs.len(), self.states);

        if observed.is_uninformative(self.states) {
            for p in probs.iter_mut() {
                *p = 1.;
            }
            return;
        }

        let state_id = observed.canonical_state();
        let bitset = observed.count() as f64;
        let bitunset = (self.states - observed.count()) as f64;
        for (k, p) in probs.iter_mut().enumerate() {
            *p = if k == state_id {
                (1. - self.seq_error_rate) / bitset
            } else {
                self.seq_error_rate / bitunset
            };
        }
    }
}
