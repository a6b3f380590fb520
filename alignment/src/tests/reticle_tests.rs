use common::FloatExt;
use glam::Vec2;

use crate::angle::Hours;
use crate::reticle::*;

#[test]
fn radii_strictly_decrease_by_a_constant_step() {
    for size in [10.5_f32, 11.0, 64.0, 400.0, 1234.5] {
        let geometry = ReticleGeometry::new(size).unwrap();
        let radii = geometry.radii();

        assert_eq!(radii.len(), LEVEL_COUNT);
        assert!(radii.iter().all(|&r| r > 0.0));

        let step = radii[0] - radii[1];
        for pair in radii.windows(2) {
            assert!(pair[0] > pair[1], "radii must strictly decrease for size {size}");
            assert!((pair[0] - pair[1]).approximately_eq_within(step, 1e-3));
        }
    }
}

#[test]
fn outer_radius_leaves_margin() {
    let geometry = ReticleGeometry::new(400.0).unwrap();

    assert!(geometry.radius(OUTER_LEVEL).approximately_eq(195.0));
    assert!(geometry.radius(CENTER_LEVEL).approximately_eq_within(195.0 / 7.0, 1e-4));
    assert_eq!(geometry.center(), Vec2::splat(200.0));
}

#[test]
fn rejects_tiny_canvas() {
    assert_eq!(
        ReticleGeometry::new(10.0),
        Err(ReticleError::CanvasTooSmall(10.0))
    );
    assert!(ReticleGeometry::new(0.0).is_err());
    assert!(ReticleGeometry::new(-50.0).is_err());
    assert!(ReticleGeometry::new(f32::NAN).is_err());
    assert!(ReticleGeometry::new(f32::INFINITY).is_err());
}

#[test]
fn draws_three_circles() {
    let geometry = ReticleGeometry::new(300.0).unwrap();
    let circles: Vec<f32> = geometry.circle_radii().collect();

    assert_eq!(
        circles,
        vec![
            geometry.radius(OUTER_LEVEL),
            geometry.radius(STAR_ORBIT_LEVEL),
            geometry.radius(CENTER_LEVEL),
        ]
    );
}

#[test]
fn forty_eight_ticks_eight_long() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let ticks: Vec<Tick> = geometry.ticks().collect();

    assert_eq!(ticks.len(), TICK_COUNT);
    assert_eq!(ticks.iter().filter(|tick| tick.long).count(), 8);
    assert_eq!(ticks.iter().filter(|tick| !tick.long).count(), 40);

    for (index, tick) in ticks.iter().enumerate() {
        assert_eq!(tick.index, index);
        assert!(tick.angle_deg.approximately_eq_within(index as f32 * 7.5, 1e-4));
        assert_eq!(tick.long, index % 6 == 0);
    }
}

#[test]
fn tick_lengths_follow_levels() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let center = geometry.center();

    for tick in geometry.ticks() {
        let start = tick.start.distance(center);
        let end = tick.end.distance(center);
        let expected_end = if tick.long {
            geometry.radius(STAR_ORBIT_LEVEL)
        } else {
            geometry.radius(SHORT_TICK_LEVEL)
        };

        assert!(start.approximately_eq_within(geometry.radius(OUTER_LEVEL), 1e-3));
        assert!(end.approximately_eq_within(expected_end, 1e-3));
    }
}

#[test]
fn first_tick_points_up_and_quarter_tick_points_right() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let ticks: Vec<Tick> = geometry.ticks().collect();

    assert!(ticks[0].start.x.approximately_eq_within(200.0, 1e-3));
    assert!(ticks[0].start.y.approximately_eq_within(5.0, 1e-3));

    assert!(ticks[12].start.x.approximately_eq_within(395.0, 1e-3));
    assert!(ticks[12].start.y.approximately_eq_within(200.0, 1e-3));
}

#[test]
fn star_marker_rides_the_orbit_circle() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let orbit = geometry.radius(STAR_ORBIT_LEVEL);

    for step in 0..24 {
        let hour_angle = Hours::new(step as f64 + 0.25);
        for orientation in [ReticleOrientation::Direct, ReticleOrientation::Inverted] {
            let marker = geometry.star_marker(hour_angle, orientation);
            assert!(marker
                .distance(geometry.center())
                .approximately_eq_within(orbit, 1e-3));
        }
    }
}

#[test]
fn direct_view_moves_counter_clockwise_from_the_top() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let center = geometry.center();
    let orbit = geometry.radius(STAR_ORBIT_LEVEL);

    let top = geometry.star_marker(Hours::new(0.0), ReticleOrientation::Direct);
    assert!((top - (center + Vec2::new(0.0, -orbit))).length() < 1e-3);

    let left = geometry.star_marker(Hours::new(6.0), ReticleOrientation::Direct);
    assert!((left - (center + Vec2::new(-orbit, 0.0))).length() < 1e-3);
}

#[test]
fn inverted_view_is_point_reflection() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let center = geometry.center();

    for step in 0..12 {
        let hour_angle = Hours::new(step as f64 * 2.0 + 0.7);
        let direct = geometry.star_marker(hour_angle, ReticleOrientation::Direct) - center;
        let inverted = geometry.star_marker(hour_angle, ReticleOrientation::Inverted) - center;

        assert!((direct + inverted).length() < 1e-3);
    }

    assert_eq!(ReticleOrientation::default(), ReticleOrientation::Inverted);
}

#[test]
fn tick_hour_labels_match_marker_direction() {
    let geometry = ReticleGeometry::new(400.0).unwrap();
    let center = geometry.center();

    for orientation in [ReticleOrientation::Direct, ReticleOrientation::Inverted] {
        for tick in geometry.ticks().filter(|tick| tick.long) {
            let hour_angle = hour_angle_at(tick.angle_deg, orientation);
            let marker = geometry.star_marker(hour_angle, orientation) - center;
            let tick_direction = tick.start - center;

            assert!(marker.normalize().dot(tick_direction.normalize()) > 0.9999);
        }
    }
}

#[test]
fn long_ticks_are_three_hours_apart() {
    assert!(hour_angle_at(0.0, ReticleOrientation::Direct).value().approximately_eq(0.0));
    assert!(hour_angle_at(45.0, ReticleOrientation::Direct)
        .value()
        .approximately_eq(21.0));
    assert!(hour_angle_at(0.0, ReticleOrientation::Inverted)
        .value()
        .approximately_eq(12.0));
    assert!(hour_angle_at(90.0, ReticleOrientation::Inverted)
        .value()
        .approximately_eq(6.0));
}
