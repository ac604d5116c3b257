use std::fmt;

use itertools::Itertools;

use crate::model::ErrorModel;

/// Renders an error model and its current parameter values as a single
/// human-readable line, e.g. `P17,  SEQ_ERROR: 0.05,  ADO_RATE: 0.1`.
///
/// Panics if the model reports parameter names and values of different
/// lengths; that is a defect in the model implementation, not an input error.
pub struct ModelReport<'a>(pub &'a dyn ErrorModel);

impl fmt::Display for ModelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self.0.param_names();
        let values = self.0.params();
        assert_eq!(
            names.len(),
            values.len(),
            "bug: parameter names and values of model {} differ in length",
            self.0.name()
        );

        let params = names
            .iter()
            .zip(values)
            .map(|(name, value)| format!("{}: {}", name, value))
            .join(",  ");

        write!(f, "{},  {}", self.0.name(), params)
    }
}

/// Logs the model report at info level.
pub fn log_model(model: &dyn ErrorModel) {
    info!("{}", ModelReport(model));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ParamId;
    use crate::model::parameters::GenotypeErrorRates;
    use crate::model::{P17GenotypeErrorModel, StateMask, UniformErrorModel};
    use crate::Result;

    #[test]
    fn test_report_rendering() {
        let model = P17GenotypeErrorModel::new(GenotypeErrorRates::new(0.1, 0.25));
        assert_eq!(
            format!("{}", ModelReport(&model)),
            "P17,  SEQ_ERROR: 0.1,  ADO_RATE: 0.25"
        );

        let model = UniformErrorModel::new(4, 0.05);
        assert_eq!(
            format!("{}", ModelReport(&model)),
            "UNIFORM,  SEQ_ERROR: 0.05"
        );
    }

    #[derive(Debug)]
    struct MismatchedModel;

    impl ErrorModel for MismatchedModel {
        fn name(&self) -> &'static str {
            "MISMATCHED"
        }

        fn states(&self) -> usize {
            4
        }

        fn param_ids(&self) -> Vec<ParamId> {
            vec![]
        }

        fn param_names(&self) -> Vec<&'static str> {
            vec!["SEQ_ERROR"]
        }

        fn params(&self) -> Vec<f64> {
            vec![]
        }

        fn set_params(&mut self, _values: &[f64]) -> Result<()> {
            Ok(())
        }

        fn compute_state_probs(&self, _observed: StateMask, _probs: &mut [f64]) {}
    }

    #[test]
    #[should_panic(expected = "parameter names and values")]
    fn test_report_panics_on_accessor_mismatch() {
        format!("{}", ModelReport(&MismatchedModel));
    }
}
