use cmac_core::{Domain, Sample};

use crate::{Approximator, Associations, Error, ParamError, metric};

/// Predicted samples for a dataset together with their aggregate accuracy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// One predicted sample per input sample, in input order.
    pub samples: Vec<Sample>,

    /// Accuracy of the predictions against the input targets.
    pub accuracy: f64,
}

/// Predicts every sample in `data`, building a fresh association table.
///
/// # Errors
///
/// Returns an error if `data` is empty, any input lies outside `domain`, or
/// the model cannot produce a prediction for one of the samples.
pub fn predict<A: Approximator>(
    model: &A,
    data: &[Sample],
    domain: Domain,
) -> Result<Prediction, Error> {
    if data.is_empty() {
        return Err(ParamError::EmptyData.into());
    }

    let associations = model.indexer().associate(data, domain)?;
    predict_associated(model, data, &associations)
}

/// Predicts every sample in `data` using an already built association table.
///
/// The table must have been built for this same dataset, which is what the
/// training loop does after each epoch.
///
/// # Errors
///
/// Returns an error if `data` is empty, the table length does not match,
/// or the model cannot produce a prediction for one of the samples.
pub fn predict_associated<A: Approximator>(
    model: &A,
    data: &[Sample],
    associations: &Associations,
) -> Result<Prediction, Error> {
    if data.is_empty() {
        return Err(ParamError::EmptyData.into());
    }
    if associations.len() != data.len() {
        return Err(Error::AssociationMismatch {
            samples: data.len(),
            indices: associations.len(),
        });
    }

    let samples = data
        .iter()
        .zip(associations.indices())
        .map(|(sample, &start)| Ok(Sample::new(sample.x, model.estimate(sample.x, start)?)))
        .collect::<Result<Vec<_>, Error>>()?;

    let accuracy = metric::accuracy(data, &samples);

    Ok(Prediction { samples, accuracy })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Continuous, Discrete};

    fn dataset() -> Vec<Sample> {
        (0..20)
            .map(|i| {
                let x = f64::from(i) * 0.2;
                Sample::new(x, x.sin())
            })
            .collect()
    }

    #[test]
    fn untrained_discrete_predicts_the_window_width() {
        let model = Discrete::new(2, 5).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();

        let prediction = predict(&model, &[Sample::new(1.0, 2.0)], domain).unwrap();

        assert_eq!(prediction.samples, vec![Sample::new(1.0, 2.0)]);
        assert_relative_eq!(prediction.accuracy, 1.0);
    }

    #[test]
    fn keeps_input_order_and_coordinates() {
        let model = Discrete::new(3, 20).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();
        let mut data = dataset();
        data.reverse();

        let prediction = predict(&model, &data, domain).unwrap();

        let xs: Vec<_> = prediction.samples.iter().map(|s| s.x).collect();
        let expected: Vec<_> = data.iter().map(|s| s.x).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn repeated_prediction_is_identical() {
        let model = Continuous::new(2, 35).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();
        let data = dataset();

        let first = predict(&model, &data, domain).unwrap();
        let second = predict(&model, &data, domain).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn reused_table_matches_a_fresh_one() {
        let model = Continuous::new(2, 35).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();
        let data = dataset();
        let associations = model.indexer().associate(&data, domain).unwrap();

        let fresh = predict(&model, &data, domain).unwrap();
        let reused = predict_associated(&model, &data, &associations).unwrap();

        assert_eq!(fresh, reused);
    }

    #[test]
    fn rejects_a_table_for_another_dataset() {
        let model = Discrete::new(2, 35).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();
        let data = dataset();
        let associations = model.indexer().associate(&data[..5], domain).unwrap();

        assert_eq!(
            predict_associated(&model, &data, &associations),
            Err(Error::AssociationMismatch {
                samples: 20,
                indices: 5,
            })
        );
    }

    #[test]
    fn rejects_empty_data() {
        let model = Discrete::new(2, 5).unwrap();
        let domain = Domain::new(0.0, 1.0).unwrap();

        assert_eq!(
            predict(&model, &[], domain),
            Err(Error::InvalidParameters(ParamError::EmptyData))
        );
    }

    #[test]
    fn rejects_inputs_outside_the_domain() {
        let model = Discrete::new(2, 5).unwrap();
        let domain = Domain::new(0.0, 1.0).unwrap();

        assert!(matches!(
            predict(&model, &[Sample::new(1.0, 0.0)], domain),
            Err(Error::OutsideDomain { .. })
        ));
    }
}
