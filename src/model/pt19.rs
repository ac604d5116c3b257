use derive_new::new;
use getset::Getters;
use strum::IntoEnumIterator;

use crate::constants::ParamId;
use crate::model::genotype::{Genotype, GENOTYPE_STATES};
use crate::model::parameters::GenotypeErrorRates;
use crate::model::{ErrorModel, ErrorModelKind, StateMask};
use crate::Result;

const ONE_3: f64 = 1. / 3.;
const ONE_6: f64 = 1. / 6.;
const ONE_8: f64 = 1. / 8.;
const THREE_8: f64 = 3. / 8.;
const ONE_12: f64 = 1. / 12.;

/// Refinement of the P17 genotype error model with additional interaction
/// terms between sequencing error and allelic dropout. Kept as a separate
/// strategy next to P17; both correspond to published parameterizations with
/// independently verifiable coefficients. Emitted values are relative
/// likelihoods and are intentionally not normalized.
#[derive(new, Copy, Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
pub struct PT19GenotypeErrorModel {
    #[getset(get = "pub")]
    rates: GenotypeErrorRates,
}

impl ErrorModel for PT19GenotypeErrorModel {
    fn name(&self) -> &'static str {
        ErrorModelKind::PT19.into()
    }

    fn states(&self) -> usize {
        GENOTYPE_STATES
    }

    fn param_ids(&self) -> Vec<ParamId> {
        GenotypeErrorRates::param_ids()
    }

    fn param_names(&self) -> Vec<&'static str> {
        GenotypeErrorRates::param_names()
    }

    fn params(&self) -> Vec<f64> {
        self.rates.values()
    }

    fn set_params(&mut self, values: &[f64]) -> Result<()> {
        self.rates.set(values)
    }

    fn compute_state_probs(&self, observed: StateMask, probs: &mut [f64]) {
        debug_assert_eq!(probs.len(), GENOTYPE_STATES);

        if observed.is_uninformative(GENOTYPE_STATES) {
            for p in probs.iter_mut() {
                *p = 1.;
            }
            return;
        }

        let e = self.rates.seq_error_rate();
        let d = self.rates.ado_rate();
        let obs = Genotype::from_index(observed.canonical_state())
            .expect("bug: observed state outside of the genotype alphabet");

        for (truth, p) in Genotype::iter().zip(probs.iter_mut()) {
            *p = match obs.mut_dist(truth) {
                0 => {
                    if obs.is_homozygous() {
                        1. - e + 0.5 * e * d
                    } else {
                        (1. - d) * (1. - e) + ONE_12 * e * d
                    }
                }
                1 => {
                    if truth.is_homozygous() {
                        ONE_12 * e * d + ONE_3 * (1. - d) * e
                    } else if obs.is_homozygous() {
                        0.5 * d + ONE_6 * e - THREE_8 * e * d
                    } else {
                        ONE_6 * e - ONE_8 * e * d
                    }
                }
                _ => {
                    if obs.is_homozygous() {
                        ONE_12 * e * d
                    } else {
                        0.
                    }
                }
            };
        }
    }
}
