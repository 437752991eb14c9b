//! Property-based tests for the beam solver using proptest.
//!
//! Loadings mix point forces, point moments, and linearly varying distributed
//! forces and moments. Covers support conditions, shear jumps at point
//! forces, moment jumps and continuity, reaction equilibrium, and the
//! unloaded beam.

use beam_core::{BeamModel, BeamSolver, LoadAssembly, LoadInstance, ResponseKind, SpanPolicy};
use proptest::prelude::*;

const MODULUS: f64 = 2.0e4;
const INERTIA: f64 = 0.5;

/// (magnitude, position as a fraction of the span)
fn load_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-100.0f64..100.0, 0.05f64..0.95)
}

/// Linear ramp with independent end magnitudes, start before end.
fn ramp_strategy() -> impl Strategy<Value = ((f64, f64), (f64, f64))> {
    (-100.0f64..100.0, -100.0f64..100.0, 0.05f64..0.95, 0.05f64..0.95)
        .prop_filter("ramp needs a non-trivial length", |&(_, _, f1, f2)| (f1 - f2).abs() > 0.01)
        .prop_map(|(m1, m2, f1, f2)| ((m1, f1.min(f2)), (m2, f1.max(f2))))
}

#[derive(Debug, Default)]
struct Loading {
    forces: Vec<(f64, f64)>,
    moments: Vec<(f64, f64)>,
    force_ramps: Vec<((f64, f64), (f64, f64))>,
    moment_ramps: Vec<((f64, f64), (f64, f64))>,
}

impl Loading {
    fn assembly(&self, length: f64) -> LoadAssembly {
        let at = |(magnitude, fraction): (f64, f64)| LoadInstance::new(magnitude, fraction * length);
        let mut loads = LoadAssembly::new();
        for &force in &self.forces {
            loads.add_point_force(at(force));
        }
        for &moment in &self.moments {
            loads.add_point_moment(at(moment));
        }
        for &(a, b) in &self.force_ramps {
            loads.add_distributed_force([at(a), at(b)]).unwrap();
        }
        for &(a, b) in &self.moment_ramps {
            loads.add_distributed_moment([at(a), at(b)]).unwrap();
        }
        loads
    }

    /// Sum of all magnitudes, used to scale tolerances.
    fn total_magnitude(&self) -> f64 {
        let points = self.forces.iter().chain(&self.moments);
        let ramp_ends = self
            .force_ramps
            .iter()
            .chain(&self.moment_ramps)
            .flat_map(|&(a, b)| [a, b]);
        points.copied().chain(ramp_ends).map(|(m, _)| m.abs()).sum()
    }

    /// Segment end positions of both distributed groups, as span fractions.
    fn ramp_fractions(&self) -> Vec<f64> {
        self.force_ramps
            .iter()
            .chain(&self.moment_ramps)
            .flat_map(|&((_, f1), (_, f2))| [f1, f2])
            .collect()
    }
}

fn loading_strategy() -> impl Strategy<Value = Loading> {
    (
        prop::collection::vec(load_strategy(), 0..4),
        prop::collection::vec(load_strategy(), 0..3),
        prop::collection::vec(ramp_strategy(), 0..3),
        prop::collection::vec(ramp_strategy(), 0..3),
    )
        .prop_map(|(forces, moments, force_ramps, moment_ramps)| Loading {
            forces,
            moments,
            force_ramps,
            moment_ramps,
        })
}

fn far_from(x: f64, others: impl IntoIterator<Item = f64>, gap: f64) -> bool {
    others.into_iter().all(|o| (x - o).abs() > gap)
}

// ── Support Conditions ───────────────────────────────────────────────

proptest! {
    /// Moment and deflection vanish at both supports for any interior loading.
    #[test]
    fn supports_carry_no_moment_or_deflection(
        length in 1.0f64..20.0,
        loading in loading_strategy(),
    ) {
        let loads = loading.assembly(length);
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);

        let scale = 1.0 + loading.total_magnitude() * length.powi(2);
        let ei = MODULUS * INERTIA;

        prop_assert!(solver.moment(0.0).unwrap().abs() <= 1e-9 * scale);
        prop_assert!(solver.moment(length).unwrap().abs() <= 1e-9 * scale);
        prop_assert!(solver.deflection(0.0).unwrap().abs() <= 1e-9 * scale * length.powi(2) / ei);
        prop_assert!(solver.deflection(length).unwrap().abs() <= 1e-9 * scale * length.powi(2) / ei);
    }
}

// ── Discontinuities ──────────────────────────────────────────────────

proptest! {
    /// Across the whole span the shear changes by minus the total applied
    /// force, point and distributed.
    #[test]
    fn net_shear_jump_is_negative_total_force(
        length in 1.0f64..20.0,
        forces in prop::collection::vec(load_strategy(), 1..6),
        force_ramps in prop::collection::vec(ramp_strategy(), 0..3),
    ) {
        let loading = Loading { forces, force_ramps, ..Loading::default() };
        let loads = loading.assembly(length);
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);

        let jump = solver.shear(length).unwrap() - solver.shear(0.0).unwrap();
        let scale = 1.0 + loading.total_magnitude() * length;
        prop_assert!((jump + loads.total_force()).abs() <= 1e-9 * scale);
    }

    /// Each point force produces a local shear step of -P, whatever else
    /// loads the beam.
    #[test]
    fn local_shear_step_at_each_point_force(
        length in 1.0f64..20.0,
        loading in loading_strategy(),
    ) {
        let loads = loading.assembly(length);
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);

        let delta = 1e-9;
        let tolerance = 1e-6 * (1.0 + loading.total_magnitude());

        // Point moments and distributed-moment ends also step the shear
        let mut steps: Vec<f64> = loading.forces.iter().chain(&loading.moments).map(|&(_, f)| f).collect();
        steps.extend(loading.moment_ramps.iter().flat_map(|&((_, f1), (_, f2))| [f1, f2]));

        for (i, &(magnitude, fraction)) in loading.forces.iter().enumerate() {
            let others = steps.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &f)| f * length);
            let a = fraction * length;
            if far_from(a, others, 1e3 * delta) {
                let step = solver.shear(a + delta).unwrap() - solver.shear(a - delta).unwrap();
                prop_assert!((step + magnitude).abs() <= tolerance, "step {} for P = {}", step, magnitude);
            }
        }
    }

    /// The moment diagram steps by -M at each point moment and is
    /// continuous at point forces and at every segment point of distributed
    /// forces and moments.
    #[test]
    fn moment_steps_only_at_point_moments(
        length in 1.0f64..20.0,
        loading in loading_strategy(),
    ) {
        let loads = loading.assembly(length);
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);

        let delta = 1e-9;
        let tolerance = 1e-6 * (1.0 + loading.total_magnitude() * length);
        let moment_positions: Vec<f64> = loading.moments.iter().map(|&(_, f)| f * length).collect();

        for (i, &(magnitude, fraction)) in loading.moments.iter().enumerate() {
            let others = moment_positions.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &x)| x);
            let a = fraction * length;
            if far_from(a, others, 1e3 * delta) {
                let step = solver.moment(a + delta).unwrap() - solver.moment(a - delta).unwrap();
                prop_assert!((step + magnitude).abs() <= tolerance, "step {} for M = {}", step, magnitude);
            }
        }

        let smooth = loading
            .forces
            .iter()
            .map(|&(_, f)| f)
            .chain(loading.ramp_fractions());
        for f in smooth {
            let p = f * length;
            if far_from(p, moment_positions.iter().copied(), 1e3 * delta) {
                let gap = solver.moment(p + delta).unwrap() - solver.moment(p - delta).unwrap();
                prop_assert!(gap.abs() <= tolerance, "moment jumps by {} at {}", gap, p);
            }
        }
    }
}

// ── Equilibrium ──────────────────────────────────────────────────────

proptest! {
    /// Reactions balance the applied forces, and the moments about the left
    /// support balance including applied couples.
    #[test]
    fn reactions_satisfy_equilibrium(
        length in 1.0f64..20.0,
        loading in loading_strategy(),
    ) {
        let loads = loading.assembly(length);
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);
        let reactions = solver.reactions().unwrap();

        let scale = 1.0 + loading.total_magnitude() * length.powi(2);
        prop_assert!((reactions.left + reactions.right + loads.total_force()).abs() <= 1e-9 * scale);

        // First moment of a trapezoid w1..w2 over [a, b] about x = 0
        let first_moment = |((w1, f1), (w2, f2)): ((f64, f64), (f64, f64))| {
            let (a, b) = (f1 * length, f2 * length);
            (b - a) / 6.0 * (w1 * (2.0 * a + b) + w2 * (a + 2.0 * b))
        };
        let force_lever: f64 = loading.forces.iter().map(|&(m, f)| m * f * length).sum::<f64>()
            + loading.force_ramps.iter().map(|&r| first_moment(r)).sum::<f64>();
        let couples: f64 = loading.moments.iter().map(|&(m, _)| m).sum::<f64>()
            + loads.distributed_moments().iter().map(|s| s.resultant()).sum::<f64>();

        prop_assert!((reactions.right * length + force_lever - couples).abs() <= 1e-9 * scale * length);
    }

    /// Without loads, every response is zero at every position, inside the
    /// span or not.
    #[test]
    fn unloaded_beam_is_at_rest(
        length in 0.5f64..50.0,
        x in -100.0f64..100.0,
    ) {
        let loads = LoadAssembly::new();
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model);

        for kind in ResponseKind::ALL {
            prop_assert_eq!(solver.response(kind, x).unwrap(), 0.0);
        }
    }

    /// Strict mode accepts exactly the closed span.
    #[test]
    fn strict_policy_matches_span_bounds(
        length in 0.5f64..50.0,
        x in -100.0f64..100.0,
    ) {
        let loads = LoadAssembly::new();
        let model = BeamModel::new(length, MODULUS, INERTIA, &loads).unwrap();
        let solver = BeamSolver::new(model).with_span_policy(SpanPolicy::Strict);

        let inside = (0.0..=length).contains(&x);
        prop_assert_eq!(solver.shear(x).is_ok(), inside);
    }
}
