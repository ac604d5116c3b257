use derive_new::new;
use getset::CopyGetters;

use crate::constants::{
    ParamId, DEFAULT_ADO_RATE, DEFAULT_SEQ_ERROR_RATE, PARAM_ADO_RATE, PARAM_SEQ_ERROR,
};
use crate::errors::Error;
use crate::Result;

/// Tunable rates shared by the genotype error models.
#[derive(new, Copy, Clone, Debug, PartialEq, CopyGetters, Serialize, Deserialize)]
pub struct GenotypeErrorRates {
    /// Probability that a single sequenced allele is misread.
    #[getset(get_copy = "pub")]
    seq_error_rate: f64,
    /// Probability that one allele of a heterozygous genotype drops out,
    /// making it appear homozygous.
    #[getset(get_copy = "pub")]
    ado_rate: f64,
}

impl Default for GenotypeErrorRates {
    fn default() -> Self {
        GenotypeErrorRates::new(
            f64::from(DEFAULT_SEQ_ERROR_RATE),
            f64::from(DEFAULT_ADO_RATE),
        )
    }
}

impl GenotypeErrorRates {
    pub fn param_ids() -> Vec<ParamId> {
        vec![PARAM_SEQ_ERROR, PARAM_ADO_RATE]
    }

    pub fn param_names() -> Vec<&'static str> {
        vec!["SEQ_ERROR", "ADO_RATE"]
    }

    pub fn values(&self) -> Vec<f64> {
        vec![self.seq_error_rate, self.ado_rate]
    }

    /// Updates the sequencing error rate and, when a second value is given,
    /// the dropout rate. A single-element slice leaves the dropout rate
    /// untouched, so the optimizer can tune the rates independently.
    pub fn set(&mut self, values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::InsufficientParams {
                expected: 1,
                got: 0,
            });
        }
        self.seq_error_rate = values[0];
        if values.len() > 1 {
            self.ado_rate = values[1];
        }

        Ok(())
    }
}
