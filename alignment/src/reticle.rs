//! Polar scope reticle geometry in canvas coordinates (origin top-left,
//! y down).

use glam::Vec2;

use crate::angle::Hours;

pub const LEVEL_COUNT: usize = 7;
pub const TICK_COUNT: usize = 48;
pub const LONG_TICK_EVERY: usize = 6;
pub const TICK_SPACING_DEG: f32 = 360.0 / TICK_COUNT as f32;
pub const CANVAS_MARGIN: f32 = 5.0;

pub const OUTER_LEVEL: usize = 0;
pub const SHORT_TICK_LEVEL: usize = 1;
pub const STAR_ORBIT_LEVEL: usize = 2;
pub const CENTER_LEVEL: usize = 6;
pub const CIRCLE_LEVELS: [usize; 3] = [OUTER_LEVEL, STAR_ORBIT_LEVEL, CENTER_LEVEL];

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum ReticleError {
    #[error("canvas size {0} is too small for a reticle")]
    CanvasTooSmall(f32),
}

/// How the sky appears on the reticle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReticleOrientation {
    /// Naked-eye view toward the pole.
    Direct,
    /// View through an inverting polar scope, rotated by 180 degrees.
    #[default]
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    /// Clockwise from the top of the canvas.
    pub angle_deg: f32,
    pub long: bool,
    pub start: Vec2,
    pub end: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReticleGeometry {
    size: f32,
    radii: [f32; LEVEL_COUNT],
}

impl ReticleGeometry {
    pub fn new(size: f32) -> Result<Self, ReticleError> {
        if !size.is_finite() || size <= 2.0 * CANVAS_MARGIN {
            return Err(ReticleError::CanvasTooSmall(size));
        }

        let outer = size / 2.0 - CANVAS_MARGIN;
        let radii = std::array::from_fn(|level| {
            outer * (LEVEL_COUNT - level) as f32 / LEVEL_COUNT as f32
        });

        Ok(Self { size, radii })
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size / 2.0)
    }

    pub fn radii(&self) -> &[f32; LEVEL_COUNT] {
        &self.radii
    }

    pub fn radius(&self, level: usize) -> f32 {
        self.radii[level]
    }

    pub fn circle_radii(&self) -> impl Iterator<Item = f32> + '_ {
        CIRCLE_LEVELS.iter().map(|&level| self.radii[level])
    }

    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        let center = self.center();
        let outer = self.radii[OUTER_LEVEL];

        (0..TICK_COUNT).map(move |index| {
            let long = index % LONG_TICK_EVERY == 0;
            let inner = if long {
                self.radii[STAR_ORBIT_LEVEL]
            } else {
                self.radii[SHORT_TICK_LEVEL]
            };
            let angle_deg = index as f32 * TICK_SPACING_DEG;
            let direction = clockwise_from_top(angle_deg.to_radians());

            Tick {
                index,
                angle_deg,
                long,
                start: center + direction * outer,
                end: center + direction * inner,
            }
        })
    }

    /// Where the star sits on the orbit circle for the given hour angle.
    /// In the direct view hour angle 0 is straight up and the star moves
    /// counter-clockwise as the hour angle grows.
    pub fn star_marker(&self, hour_angle: Hours, orientation: ReticleOrientation) -> Vec2 {
        let phi = hour_angle.to_radians() as f32;
        let direct = Vec2::new(-phi.sin(), -phi.cos());
        let offset = match orientation {
            ReticleOrientation::Direct => direct,
            ReticleOrientation::Inverted => -direct,
        };

        self.center() + offset * self.radii[STAR_ORBIT_LEVEL]
    }
}

/// Hour angle that puts the star in the direction `angle_deg` (clockwise
/// from the top). Inverse of [`ReticleGeometry::star_marker`].
pub fn hour_angle_at(angle_deg: f32, orientation: ReticleOrientation) -> Hours {
    let angle = angle_deg as f64;
    match orientation {
        ReticleOrientation::Direct => Hours::from_degrees(-angle),
        ReticleOrientation::Inverted => Hours::from_degrees(180.0 - angle),
    }
}

fn clockwise_from_top(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), -angle.cos())
}
