// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/perimeter.rs
//
// Perimeter walk: evenly spaced dots around a square with the leftover
// spacing carried across each corner.

use super::square::Coordinate;

/// Dot diameter and spacing of a dotted border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPattern {
    /// Dot diameter.
    pub line_weight: f64,
    /// Free space between two neighbouring dots.
    pub gap: f64,
}

impl DotPattern {
    pub fn new(line_weight: f64, gap: f64) -> Self {
        Self { line_weight, gap }
    }

    /// Distance between two dot centers.
    pub fn step(&self) -> f64 {
        self.line_weight + self.gap
    }

    pub fn radius(&self) -> f64 {
        self.line_weight / 2.0
    }
}

/// Axis-aligned region dots are clipped to, in the walk's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    pub fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    /// Projection of the region onto `axis`, as `(low, high)`.
    fn project(&self, axis: Coordinate) -> (f64, f64) {
        let a = axis.x * self.min.x + axis.y * self.min.y;
        let b = axis.x * self.max.x + axis.y * self.max.y;
        let c = axis.x * self.min.x + axis.y * self.max.y;
        let d = axis.x * self.max.x + axis.y * self.min.y;
        (a.min(b).min(c).min(d), a.max(b).max(c).max(d))
    }
}

/// One straight side of the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub start: Coordinate,
    /// Unit direction along the side.
    pub direction: Coordinate,
    pub length: f64,
}

impl Run {
    fn along(&self, point: Coordinate) -> f64 {
        self.direction.x * point.x + self.direction.y * point.y
    }

    fn across(&self, point: Coordinate) -> f64 {
        self.direction.x * point.y - self.direction.y * point.x
    }

    fn at(&self, distance: f64) -> Coordinate {
        Coordinate::new(
            self.start.x + self.direction.x * distance,
            self.start.y + self.direction.y * distance,
        )
    }

    /// Place dots along the run starting `offset` past its start.
    ///
    /// Returns the signed overshoot past the run's end corner, which is the
    /// starting offset of the following run.
    pub fn walk(&self, offset: f64, step: f64, place: impl FnMut(Coordinate)) -> f64 {
        self.walk_clipped(offset, step, None, place)
    }

    /// Like [`Run::walk`], but only dots within `margin` of `bounds` are
    /// placed. The overshoot is the same as for the full walk.
    pub fn walk_within(
        &self,
        offset: f64,
        step: f64,
        bounds: &Bounds,
        margin: f64,
        place: impl FnMut(Coordinate),
    ) -> f64 {
        self.walk_clipped(offset, step, Some((bounds, margin)), place)
    }

    fn walk_clipped(
        &self,
        offset: f64,
        step: f64,
        clip: Option<(&Bounds, f64)>,
        mut place: impl FnMut(Coordinate),
    ) -> f64 {
        if !(step > 0.0) || !self.length.is_finite() || !offset.is_finite() {
            return 0.0;
        }

        // Dots sit at `offset + i * step` for `i` in `0..count`.
        let count = if offset <= self.length {
            ((self.length - offset) / step).floor() + 1.0
        } else {
            0.0
        };
        let overshoot = offset + count * step - self.length;

        let (mut first, mut last) = (0.0, count - 1.0);
        if let Some((bounds, margin)) = clip {
            let normal = Coordinate::new(-self.direction.y, self.direction.x);
            let (low, high) = bounds.project(normal);
            let across = self.across(self.start);
            if across < low - margin || across > high + margin {
                return overshoot;
            }

            let (low, high) = bounds.project(self.direction);
            let origin = self.along(self.start);
            first = f64::max(first, ((low - margin - origin - offset) / step).ceil());
            last = f64::min(last, ((high + margin - origin - offset) / step).floor());
        }

        if first <= last {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (first, last) = (first as u64, last as u64);
            for i in first..=last {
                place(self.at(offset + i as f64 * step));
            }
        }

        overshoot
    }
}

/// The four runs of a square's border, clockwise from the top-left corner,
/// inset by half a dot so the dots sit on the boundary.
pub fn border_runs(top_left: Coordinate, side: f64, pattern: &DotPattern) -> [Run; 4] {
    let inset = pattern.radius();
    let x = top_left.x + inset;
    let y = top_left.y + inset;
    let side = side - pattern.line_weight;

    [
        Run {
            start: Coordinate::new(x, y),
            direction: Coordinate::new(1.0, 0.0),
            length: side,
        },
        Run {
            start: Coordinate::new(x + side, y),
            direction: Coordinate::new(0.0, 1.0),
            length: side,
        },
        Run {
            start: Coordinate::new(x + side, y + side),
            direction: Coordinate::new(-1.0, 0.0),
            length: side,
        },
        Run {
            start: Coordinate::new(x, y + side),
            direction: Coordinate::new(0.0, -1.0),
            length: side,
        },
    ]
}

/// Walk the whole border and call `place` for every dot center, in order.
pub fn walk_border(
    top_left: Coordinate,
    side: f64,
    pattern: &DotPattern,
    mut place: impl FnMut(Coordinate),
) {
    let step = pattern.step();
    let mut offset = 0.0;

    for run in border_runs(top_left, side, pattern) {
        offset = run.walk(offset, step, &mut place);
    }
}

/// Walk the whole border but only place the dots that can touch `bounds`.
///
/// The spacing is identical to [`walk_border`]; the work done is bounded by
/// the visible part of the border, however large the square is.
pub fn walk_border_within(
    top_left: Coordinate,
    side: f64,
    pattern: &DotPattern,
    bounds: &Bounds,
    mut place: impl FnMut(Coordinate),
) {
    let step = pattern.step();
    let margin = pattern.radius();
    let mut offset = 0.0;

    for run in border_runs(top_left, side, pattern) {
        offset = run.walk_within(offset, step, bounds, margin, &mut place);
    }
}

/// Collect the dot centers of a dotted border.
pub fn border_dots(top_left: Coordinate, side: f64, pattern: &DotPattern) -> Vec<Coordinate> {
    let mut dots = Vec::new();
    walk_border(top_left, side, pattern, |dot| dots.push(dot));
    dots
}
