use prism_core::constants::{BASE_SPIN, DECAY_FACTOR_MAX, DECAY_FACTOR_MIN};
use prism_core::spin::IdleSpin;
use proptest::prelude::*;

#[test]
fn new_spin_starts_at_base() {
    let spin = IdleSpin::new(BASE_SPIN, 0.98);
    assert_eq!(spin.velocity, BASE_SPIN);
}

#[test]
fn zero_velocity_resets_to_base() {
    let mut spin = IdleSpin::new(BASE_SPIN, 0.98);
    spin.set_from_drag(0.0);
    spin.step();
    assert_eq!(spin.velocity, BASE_SPIN);
}

#[test]
fn velocity_under_base_is_left_alone() {
    let mut spin = IdleSpin::new(BASE_SPIN, 0.98);
    spin.set_from_drag(0.25);
    spin.step();
    assert_eq!(spin.velocity, 0.25);
}

#[test]
fn released_prism_decays_from_drag_velocity() {
    let mut spin = IdleSpin::new(BASE_SPIN, 0.98);
    spin.set_from_drag(30.0);
    spin.step();
    assert!((spin.velocity - 29.4).abs() < 1e-4);
}

#[test]
fn decay_settles_near_base_without_oscillating() {
    let mut spin = IdleSpin::new(BASE_SPIN, 0.985);
    spin.set_from_drag(-40.0);
    let mut previous = spin.velocity;
    for _ in 0..2000 {
        spin.step();
        assert!(spin.velocity < 0.0);
        assert!(spin.velocity.abs() <= previous.abs());
        previous = spin.velocity;
    }
    assert!(spin.velocity.abs() <= BASE_SPIN.abs() / 0.985 + 1e-4);
}

proptest! {
    #[test]
    fn one_step_shrinks_fast_velocity_and_keeps_sign(
        magnitude in 0.41f32..500.0,
        negative in any::<bool>(),
        decay in DECAY_FACTOR_MIN..=DECAY_FACTOR_MAX,
    ) {
        let v = if negative { -magnitude } else { magnitude };
        let mut spin = IdleSpin::new(BASE_SPIN, decay);
        spin.set_from_drag(v);
        spin.step();
        prop_assert!(spin.velocity.abs() < v.abs());
        prop_assert_eq!(spin.velocity.signum(), v.signum());
    }
}
