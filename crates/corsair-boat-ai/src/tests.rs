#[cfg(test)]
mod tests {
    use corsair_core::constants::*;
    use corsair_core::types::{heading_direction, Position};

    use crate::fsm::{bearing_heading, evaluate, BoatContext, BoatPhase};
    use crate::profiles::BoatProfile;

    fn make_context(boat: Position, ship: Position, elapsed: u64, roll: f64) -> BoatContext {
        BoatContext {
            position: boat,
            heading: 0.0,
            target: ship,
            target_alive: true,
            ammo: BOAT_AMMO,
            elapsed_ticks: elapsed,
            fire_roll: roll,
        }
    }

    #[test]
    fn test_far_boat_pursues_on_both_axes() {
        let ctx = make_context(
            Position::new(500.0, 0.0, -400.0),
            Position::new(0.0, 0.0, 0.0),
            0,
            0.0,
        );
        let update = evaluate(&ctx, &BoatProfile::default());
        assert_eq!(update.phase, BoatPhase::Pursuing);
        assert_eq!(update.position.x, 500.0 - BOAT_STEP);
        assert_eq!(update.position.z, -400.0 + BOAT_STEP);
        assert!(!update.fire, "Pursuing boats never fire");
    }

    #[test]
    fn test_aligned_axis_does_not_move() {
        let ctx = make_context(
            Position::new(0.0, 0.0, 800.0),
            Position::new(0.0, 0.0, 0.0),
            0,
            1.0,
        );
        let update = evaluate(&ctx, &BoatProfile::default());
        assert_eq!(update.position.x, 0.0);
        assert_eq!(update.position.z, 800.0 - BOAT_STEP);
    }

    #[test]
    fn test_diagonal_closing_is_faster_than_axial() {
        let profile = BoatProfile::default();
        let ship = Position::new(0.0, 0.0, 0.0);
        let diag = evaluate(&make_context(Position::new(300.0, 0.0, 300.0), ship, 0, 1.0), &profile);
        let axial = evaluate(&make_context(Position::new(300.0, 0.0, 0.0), ship, 0, 1.0), &profile);
        let diag_gain = Position::new(300.0, 0.0, 300.0).planar_distance_to(&ship)
            - diag.position.planar_distance_to(&ship);
        let axial_gain = 300.0 - axial.position.planar_distance_to(&ship);
        assert!(diag_gain > axial_gain);
    }

    #[test]
    fn test_in_range_holds_position() {
        let pos = Position::new(40.0, 0.0, 30.0);
        let ctx = make_context(pos, Position::new(0.0, 0.0, 0.0), 0, 1.0);
        let update = evaluate(&ctx, &BoatProfile::default());
        assert_eq!(update.phase, BoatPhase::InRange);
        assert_eq!(update.position, pos);
    }

    #[test]
    fn test_fires_only_after_grace_with_lucky_roll() {
        let profile = BoatProfile::default();
        let boat = Position::new(20.0, 0.0, 0.0);
        let ship = Position::new(0.0, 0.0, 0.0);

        let early = evaluate(&make_context(boat, ship, BOAT_FIRE_GRACE_TICKS - 1, 0.0), &profile);
        assert!(!early.fire, "No fire before the grace period");

        let unlucky = evaluate(&make_context(boat, ship, BOAT_FIRE_GRACE_TICKS, 0.5), &profile);
        assert!(!unlucky.fire, "Roll above probability should not fire");

        let lucky = evaluate(&make_context(boat, ship, BOAT_FIRE_GRACE_TICKS, 0.001), &profile);
        assert!(lucky.fire);
    }

    #[test]
    fn test_no_fire_without_ammo() {
        let mut ctx = make_context(
            Position::new(20.0, 0.0, 0.0),
            Position::new(0.0, 0.0, 0.0),
            10_000,
            0.0,
        );
        ctx.ammo = 0;
        let update = evaluate(&ctx, &BoatProfile::default());
        assert!(!update.fire);
    }

    #[test]
    fn test_idle_when_target_destroyed() {
        let mut ctx = make_context(
            Position::new(500.0, 0.0, 500.0),
            Position::new(0.0, 0.0, 0.0),
            10_000,
            0.0,
        );
        ctx.target_alive = false;
        ctx.heading = 1.25;
        let update = evaluate(&ctx, &BoatProfile::default());
        assert_eq!(update.phase, BoatPhase::Idle);
        assert_eq!(update.position, ctx.position);
        assert_eq!(update.heading, 1.25);
        assert!(!update.fire);
    }

    #[test]
    fn test_reverse_heading_points_at_target() {
        // Enemy cannonballs travel along -heading; that must aim at the ship.
        let boat = Position::new(300.0, 0.0, -120.0);
        let ship = Position::new(-50.0, 0.0, 75.0);
        let heading = bearing_heading(&boat, &ship);
        let aim = -heading_direction(heading);
        let to_ship = boat.planar_offset_to(&ship).normalize();
        assert!(
            (aim - to_ship).length() < 1e-9,
            "aim {aim:?} should match {to_ship:?}"
        );
    }

    #[test]
    fn test_profile_clamps_probability() {
        assert_eq!(BoatProfile::with_fire_probability(3.0).fire_probability, 1.0);
        assert_eq!(BoatProfile::with_fire_probability(-1.0).fire_probability, 0.0);
    }
}
