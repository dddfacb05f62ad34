//! Design-space sweeps: parameter grids and batch evaluation.

use crate::coil::{Coil, CoilReport};
use crate::math::Scalar;

/// `n` evenly spaced samples from `start` to `stop`; the last one is `stop`
/// exactly, so a grid of turns ends where it was asked to.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    let last = n.saturating_sub(1);
    if last == 0 {
        return vec![start; n];
    }
    let step = (stop - start) / last as Scalar;
    (0..n)
        .map(|i| if i == last { stop } else { start + step * i as Scalar })
        .collect()
}

/// Applies `f` to each sample and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(samples: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    samples.into_iter().map(f).collect()
}

/// Reports for every coil, in input order.
#[must_use]
pub fn evaluate<'a, I>(coils: I) -> Vec<CoilReport>
where
    I: IntoIterator<Item = &'a Coil>,
{
    coils.into_iter().map(Coil::report).collect()
}

/// Parallel [`evaluate`]; each coil is independent, results keep input order.
#[cfg(feature = "parallel")]
#[must_use]
pub fn par_evaluate(coils: &[Coil]) -> Vec<CoilReport> {
    use rayon::prelude::*;

    coils.par_iter().map(Coil::report).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coil::CoilSpec;
    use crate::shape::{InductanceFormula, Shape};

    fn coils() -> Vec<Coil> {
        let base = CoilSpec::builder()
            .turns(5.0)
            .outer_diameter(30.0)
            .clearance(0.2)
            .trace_width(0.4)
            .build()
            .unwrap();
        let template = Coil::new(base.clone(), InductanceFormula::CurrentSheet).unwrap();
        sweep_map(linspace(5.0, 12.0, 8), |turns| {
            template
                .retune(base.to_builder().turns(turns).build().unwrap())
                .unwrap()
        })
    }

    #[test]
    fn turn_grid_ends_on_its_bounds() {
        let turns = linspace(0.1, 0.7, 7);
        assert_eq!(turns.len(), 7);
        assert_eq!(turns[0], 0.1);
        assert_eq!(turns[6], 0.7);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn quarter_turn_grid_builds_square_coils() {
        let base = CoilSpec::builder()
            .outer_diameter(30.0)
            .clearance(0.2)
            .trace_width(0.4)
            .shape(Shape::Square);
        for turns in linspace(2.0, 10.0, 33) {
            let spec = base.clone().turns(turns).build();
            assert!(spec.is_ok(), "{turns} turns should end on a corner");
        }
    }

    #[test]
    fn inductance_grows_with_turns() {
        let reports = evaluate(&coils());
        assert_eq!(reports.len(), 8);
        assert!(reports.windows(2).all(|w| w[1].inductance > w[0].inductance));
        assert_eq!(reports[0].turns, 5.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let coils = coils();
        assert_eq!(par_evaluate(&coils), evaluate(&coils));
    }
}
