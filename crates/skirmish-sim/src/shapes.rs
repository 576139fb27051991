//! Silhouette geometry for ships and projectiles.
//!
//! Shapes are defined in model space pointing along +X, then rotated by the
//! facing angle and translated to the entity position.

use glam::DVec2;

use skirmish_core::types::Position;

/// Map a model-space point into device space.
pub fn place(origin: &Position, facing: f64, local: DVec2) -> Position {
    (origin.as_dvec2() + DVec2::from_angle(facing).rotate(local)).into()
}

fn place_all<const N: usize>(origin: &Position, facing: f64, local: [DVec2; N]) -> [Position; N] {
    local.map(|p| place(origin, facing, p))
}

/// Arrowhead hull with a notched tail.
pub fn ship_hull(origin: &Position, facing: f64, size: f64) -> [Position; 4] {
    place_all(
        origin,
        facing,
        [
            DVec2::new(size, 0.0),
            DVec2::new(-0.6 * size, -0.5 * size),
            DVec2::new(-0.2 * size, 0.0),
            DVec2::new(-0.6 * size, 0.5 * size),
        ],
    )
}

/// Engine glow anchor and radius.
pub fn ship_engine(origin: &Position, facing: f64, size: f64) -> (Position, f64) {
    let center = place(origin, facing, DVec2::new(-0.65 * size, 0.0));
    (center, (size * 0.2).trunc().max(2.0))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TorpedoShape {
    pub body: [Position; 5],
    pub fin_top: [Position; 3],
    pub fin_bottom: [Position; 3],
    pub tail: Position,
    pub flame_radius: f64,
}

pub fn torpedo(origin: &Position, facing: f64, radius: f64) -> TorpedoShape {
    let size = (radius * 3.0).trunc().max(4.0);
    let length = size * 3.0;
    let width = (size * 0.7).trunc().max(3.0);
    let nose_len = (size * 0.8).trunc().max(3.0);
    let fin_len = (size * 0.6).trunc().max(3.0);

    let front = length / 2.0;
    let back = -length / 2.0;
    let half = width / 2.0;
    let third = width / 3.0;

    TorpedoShape {
        body: place_all(
            origin,
            facing,
            [
                DVec2::new(back, -half),
                DVec2::new(front - nose_len, -half),
                DVec2::new(front, 0.0),
                DVec2::new(front - nose_len, half),
                DVec2::new(back, half),
            ],
        ),
        fin_top: place_all(
            origin,
            facing,
            [
                DVec2::new(back, -half),
                DVec2::new(back - fin_len, 0.0),
                DVec2::new(back, -third),
            ],
        ),
        fin_bottom: place_all(
            origin,
            facing,
            [
                DVec2::new(back, half),
                DVec2::new(back - fin_len, 0.0),
                DVec2::new(back, third),
            ],
        ),
        tail: place(origin, facing, DVec2::new(back - 2.0, 0.0)),
        flame_radius: (size * 0.4).trunc().max(2.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BombShape {
    pub body: [Position; 5],
    pub fin_top: [Position; 3],
    pub fin_bottom: [Position; 3],
    pub stripe: [Position; 4],
}

/// Short, chunky bomb with cross fins and a side stripe.
pub fn glide_bomb(origin: &Position, facing: f64, radius: f64) -> BombShape {
    let size = (radius * 3.0).trunc().max(5.0);
    let length = (size * 2.2).trunc();
    let width = (size * 0.9).trunc().max(4.0);
    let nose_len = (size * 0.7).trunc().max(3.0);
    let tail_len = (size * 0.6).trunc().max(3.0);

    let front = length / 2.0;
    let back = -length / 2.0;
    let half = width / 2.0;
    let third = width / 3.0;
    let stripe_half = width * 0.18;
    let shoulder = front - nose_len;

    BombShape {
        body: place_all(
            origin,
            facing,
            [
                DVec2::new(back + tail_len, -half),
                DVec2::new(shoulder, -half),
                DVec2::new(front, 0.0),
                DVec2::new(shoulder, half),
                DVec2::new(back + tail_len, half),
            ],
        ),
        fin_top: place_all(
            origin,
            facing,
            [
                DVec2::new(back + tail_len, -half),
                DVec2::new(back - tail_len, 0.0),
                DVec2::new(back + tail_len, -third),
            ],
        ),
        fin_bottom: place_all(
            origin,
            facing,
            [
                DVec2::new(back + tail_len, half),
                DVec2::new(back - tail_len, 0.0),
                DVec2::new(back + tail_len, third),
            ],
        ),
        stripe: place_all(
            origin,
            facing,
            [
                DVec2::new(back + tail_len * 0.2, -stripe_half),
                DVec2::new(shoulder - 1.0, -stripe_half),
                DVec2::new(shoulder - 1.0, stripe_half),
                DVec2::new(back + tail_len * 0.2, stripe_half),
            ],
        ),
    }
}
