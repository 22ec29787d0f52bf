/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Solvers rely on this when they evaluate a model several times per
/// step at intermediate states.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(2.0 * input)
        }
    }

    #[test]
    fn model_is_repeatable() {
        let first = Doubler.call(&1.5).unwrap();
        let second = Doubler.call(&1.5).unwrap();

        assert_eq!(first, 3.0);
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_keeps_input_and_output() {
        let snapshot = Snapshot::new(1.5, Doubler.call(&1.5).unwrap());

        assert_eq!(snapshot.input, 1.5);
        assert_eq!(snapshot.output, 3.0);
    }
}
