/// A state that can be advanced along its derivative.
///
/// Implementing this trait lets the generic solvers move a state forward by
/// `derivative * delta`. Multi-stage methods such as RK4 call [`step`] from
/// the same base state several times with different derivatives and deltas,
/// so implementations must not depend on how often they are called.
///
/// `Delta` is usually `f64` seconds, but a dimensioned type such as
/// `uom::si::f64::Time` works as well.
///
/// [`step`]: StepIntegrable::step
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state reached by following `derivative` for `delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the derivative type of a [`StepIntegrable`] state.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
