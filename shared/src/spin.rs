use rand::Rng;

use crate::prize::Prize;

/// Duration of the visual spin transition.
pub const SPIN_DURATION_MS: u32 = 4_500;
/// Cadence of the tick sound while the wheel is turning.
pub const TICK_INTERVAL_MS: u32 = 100;
/// Extra full rotations added to every spin, drawn from this inclusive range.
pub const MIN_FULL_TURNS: u32 = 5;
pub const MAX_FULL_TURNS: u32 = 8;
/// Landing jitter, as a fraction of one segment width on either side of
/// the segment center.
pub const JITTER_FRACTION: f64 = 0.4;
/// How long the decorative lever stays pulled after a trigger.
pub const LEVER_RESET_MS: u32 = 400;

/// A fully resolved spin: where the wheel will stop and how it gets there.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    /// Index of the prize the pointer will rest on.
    pub target_index: usize,
    /// Extra full rotations, in `{5, 6, 7, 8}`.
    pub full_turns: u32,
    /// Forward distance from the current orientation to the destination,
    /// always in `[0, 360)` so the wheel never visually spins backward.
    pub forward_delta: f64,
    /// New absolute rotation. Strictly greater than the previous rotation;
    /// the accumulator is never reset so consecutive spins stay continuous.
    pub total_rotation: f64,
}

/// Computes the spin that brings `target` (or a uniformly random prize when
/// `target` is `None`) under the fixed pointer at the top of the wheel.
///
/// Segments are laid out in list order from the 270° conic origin, so
/// segment `i` spans `[i * 360/n, (i+1) * 360/n)` in wheel coordinates and
/// the pointer sits at wheel angle `(360 - rotation) mod 360`.
///
/// Returns `None` when a pinned target is not on the wheel; the caller's
/// state must stay untouched in that case.
pub fn plan_spin<R: Rng>(
    prizes: &[Prize],
    target: Option<&Prize>,
    current_rotation: f64,
    rng: &mut R,
) -> Option<SpinPlan> {
    let target_index = match target {
        Some(wanted) => match prizes.iter().position(|p| p.name == wanted.name) {
            Some(index) => index,
            None => {
                log::error!("target prize {:?} is not on the wheel, spin aborted", wanted.name);
                return None;
            }
        },
        None => rng.gen_range(0..prizes.len()),
    };

    let segment = 360.0 / prizes.len() as f64;
    let segment_center = target_index as f64 * segment + segment / 2.0;
    // Land somewhere inside the segment rather than dead-center.
    let jitter = (rng.gen::<f64>() - 0.5) * segment * (JITTER_FRACTION * 2.0);
    let destination = (360.0 - segment_center - jitter).rem_euclid(360.0);

    let current = current_rotation.rem_euclid(360.0);
    let mut forward_delta = destination - current;
    if forward_delta < 0.0 {
        forward_delta += 360.0;
    }

    let full_turns = rng.gen_range(MIN_FULL_TURNS..=MAX_FULL_TURNS);
    let total_rotation = current_rotation + f64::from(full_turns) * 360.0 + forward_delta;

    Some(SpinPlan {
        target_index,
        full_turns,
        forward_delta,
        total_rotation,
    })
}

/// Which segment sits under the pointer for a given absolute rotation.
pub fn landed_index(rotation: f64, segment_count: usize) -> usize {
    let segment = 360.0 / segment_count as f64;
    let pointer_angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let index = (pointer_angle / segment) as usize;
    index.min(segment_count - 1)
}

/// In-memory state of one wheel for the lifetime of the page view.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGame {
    pub prizes: Vec<Prize>,
    /// Absolute rotation in degrees, monotonically non-decreasing.
    pub rotation: f64,
    pub is_spinning: bool,
    pub last_result: Option<Prize>,
}

impl WheelGame {
    /// The prize list must be non-empty; segment geometry divides by its
    /// length.
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self {
            prizes,
            rotation: 0.0,
            is_spinning: false,
            last_result: None,
        }
    }

    /// Starts a spin toward `target` (random when `None`). No-op while a
    /// spin is already in progress or when the pinned target is unknown;
    /// neither case mutates any state.
    pub fn begin_spin<R: Rng>(&mut self, target: Option<&Prize>, rng: &mut R) -> Option<SpinPlan> {
        if self.is_spinning {
            return None;
        }
        let plan = plan_spin(&self.prizes, target, self.rotation, rng)?;
        self.rotation = plan.total_rotation;
        self.is_spinning = true;
        self.last_result = None;
        Some(plan)
    }

    /// Reports the resolved prize once the spin animation has run its
    /// course, clearing the spinning flag.
    pub fn finish_spin(&mut self, target_index: usize) -> Option<Prize> {
        self.is_spinning = false;
        self.last_result = self.prizes.get(target_index).cloned();
        self.last_result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::initial_prizes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_wheel() -> Vec<Prize> {
        vec![
            Prize::new("alpha", "#ff0000"),
            Prize::new("beta", "#00ff00"),
            Prize::new("gamma", "#0000ff"),
        ]
    }

    #[test]
    fn test_pinned_spin_lands_on_target() {
        let prizes = initial_prizes();
        let mut rng = StdRng::seed_from_u64(7);
        let mut rotation = 0.0;
        for _ in 0..50 {
            for (index, prize) in prizes.iter().enumerate() {
                let plan = plan_spin(&prizes, Some(prize), rotation, &mut rng).unwrap();
                assert_eq!(plan.target_index, index);
                assert_eq!(landed_index(plan.total_rotation, prizes.len()), index);
                rotation = plan.total_rotation;
            }
        }
    }

    #[test]
    fn test_random_spin_lands_on_its_own_target() {
        let prizes = small_wheel();
        let mut rng = StdRng::seed_from_u64(42);
        let mut rotation = 123.4;
        for _ in 0..200 {
            let plan = plan_spin(&prizes, None, rotation, &mut rng).unwrap();
            assert_eq!(landed_index(plan.total_rotation, prizes.len()), plan.target_index);
            rotation = plan.total_rotation;
        }
    }

    #[test]
    fn test_forward_delta_and_turn_bounds() {
        let prizes = initial_prizes();
        let mut rng = StdRng::seed_from_u64(99);
        let mut rotation = 0.0;
        for _ in 0..500 {
            let plan = plan_spin(&prizes, None, rotation, &mut rng).unwrap();
            assert!(plan.forward_delta >= 0.0 && plan.forward_delta < 360.0);
            assert!((MIN_FULL_TURNS..=MAX_FULL_TURNS).contains(&plan.full_turns));
            assert!(plan.total_rotation >= rotation + f64::from(MIN_FULL_TURNS) * 360.0);
            assert!(plan.total_rotation < rotation + f64::from(MAX_FULL_TURNS) * 360.0 + 360.0);
            rotation = plan.total_rotation;
        }
    }

    #[test]
    fn test_rotation_accumulates_without_reset() {
        let prizes = small_wheel();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = WheelGame::new(prizes);
        let mut previous = game.rotation;
        for _ in 0..20 {
            let plan = game.begin_spin(None, &mut rng).unwrap();
            assert!(game.rotation > previous);
            previous = game.rotation;
            game.finish_spin(plan.target_index);
        }
    }

    #[test]
    fn test_spin_while_spinning_is_ignored() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = WheelGame::new(small_wheel());
        let plan = game.begin_spin(None, &mut rng).unwrap();
        let snapshot = game.clone();

        assert!(game.begin_spin(None, &mut rng).is_none());
        let pinned = game.prizes[0].clone();
        assert!(game.begin_spin(Some(&pinned), &mut rng).is_none());
        assert_eq!(game, snapshot);

        game.finish_spin(plan.target_index);
        assert!(!game.is_spinning);
    }

    #[test]
    fn test_unknown_target_leaves_state_unchanged() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = WheelGame::new(small_wheel());
        let ghost = Prize::new("not on the wheel", "#000000");
        assert!(game.begin_spin(Some(&ghost), &mut rng).is_none());
        assert_eq!(game.rotation, 0.0);
        assert!(!game.is_spinning);
        assert!(game.last_result.is_none());
    }

    #[test]
    fn test_pinned_spin_resolves_exact_prize() {
        let prizes = initial_prizes();
        let pinned = prizes[3].clone();
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = WheelGame::new(prizes.clone());

        let plan = game.begin_spin(Some(&pinned), &mut rng).unwrap();
        assert!(game.is_spinning);
        assert!(game.last_result.is_none());

        let resolved = game.finish_spin(plan.target_index).unwrap();
        assert_eq!(resolved, prizes[3]);
        assert_eq!(game.last_result, Some(prizes[3].clone()));
        assert!(!game.is_spinning);
    }

    #[test]
    fn test_random_spins_are_roughly_uniform() {
        let prizes = initial_prizes();
        let n = prizes.len();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = vec![0u32; n];
        let trials = 10_000;
        let mut rotation = 0.0;
        for _ in 0..trials {
            let plan = plan_spin(&prizes, None, rotation, &mut rng).unwrap();
            counts[plan.target_index] += 1;
            rotation = plan.total_rotation;
        }
        let expected = trials / n as u32;
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (expected * 4 / 5..=expected * 6 / 5).contains(count),
                "prize {} drawn {} times, expected about {}",
                index,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_clearing_pin_restores_random_draw() {
        let prizes = initial_prizes();
        let pinned = prizes[2].clone();
        let mut rng = StdRng::seed_from_u64(77);
        let mut game = WheelGame::new(prizes.clone());

        let plan = game.begin_spin(Some(&pinned), &mut rng).unwrap();
        game.finish_spin(plan.target_index);
        assert_eq!(game.last_result, Some(pinned));

        // Pin cleared: draws must cover the whole wheel again.
        let mut seen = vec![false; prizes.len()];
        for _ in 0..2_000 {
            let plan = game.begin_spin(None, &mut rng).unwrap();
            seen[plan.target_index] = true;
            game.finish_spin(plan.target_index);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_landed_index_covers_segment_boundaries() {
        // Pointer exactly on a divider belongs to the next segment, and a
        // full-turn rotation maps back to segment 0.
        assert_eq!(landed_index(0.0, 8), 0);
        assert_eq!(landed_index(360.0, 8), 0);
        assert_eq!(landed_index(315.0, 8), 1);
        assert_eq!(landed_index(45.0, 8), 7);
        assert_eq!(landed_index(5.0 * 360.0 + 315.0, 8), 1);
    }
}
