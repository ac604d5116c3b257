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

/// Single-cell genotype error model with sequencing error rate `e` and
/// allelic dropout rate `d`. The likelihood of each true genotype is a
/// closed form in `e` and `d`, tiered by the substitution distance to the
/// observed genotype and by the homozygosity of both. Emitted values are
/// relative likelihoods and are intentionally not normalized.
#[derive(new, Copy, Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
pub struct P17GenotypeErrorModel {
    #[getset(get = "pub")]
    rates: GenotypeErrorRates,
}

impl ErrorModel for P17GenotypeErrorModel {
    fn name(&self) -> &'static str {
        ErrorModelKind::P17.into()
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
                        1. - e - d + e * d
                    }
                }
                1 => {
                    if truth.is_homozygous() {
                        (1. - d) * e * ONE_3
                    } else if obs.is_homozygous() {
                        0.5 * d + ONE_6 * e - ONE_3 * e * d
                    } else {
                        (1. - d) * e * ONE_6
                    }
                }
                _ => {
                    if obs.is_homozygous() {
                        ONE_6 * e * d
                    } else {
                        0.
                    }
                }
            };
        }
    }
}
