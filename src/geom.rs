/*
 * This file is part of pop.
 *
 * Pop is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Pop is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with pop.  If not, see <https://www.gnu.org/licenses/>.
*/

/**
 * Geometric primitives used by the sweep: points, the tolerance, the
 * circumcenter of three sites, and the parabola/parabola breakpoint.
 *
 * These two predicates (`circumcenter`, `par_inter`) are the only places
 * in the algorithmic code that compare floating point values against EPS.
 */

/**
 * The tolerance below which two coordinates are considered equal.
 */
pub const EPS: f64 = 1e-9;

/**
 * A point in the plane. Used both for sites and for the vertices the
 * sweep produces.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }

    pub fn midpoint(a: Point2, b: Point2) -> Point2 {
        Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    pub fn distance(a: Point2, b: Point2) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/**
 * True if the two coordinates differ by less than EPS.
 */
pub fn eps_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/**
 * The signed area of the triangle (a, b, c), twice over. Positive when
 * a, b, c turn counterclockwise.
 */
pub fn signed_area2(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/**
 * The center of the circle through three non-collinear points, or None
 * if they are collinear (within EPS).
 */
pub fn circumcenter(a: Point2, b: Point2, c: Point2) -> Option<Point2> {
    let ax = a.x - c.x;
    let ay = a.y - c.y;
    let bx = b.x - c.x;
    let by = b.y - c.y;
    let d = 2.0 * (ax * by - ay * bx);
    if d.abs() < EPS {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let ux = (by * a2 - ay * b2) / d + c.x;
    let uy = (ax * b2 - bx * a2) / d + c.y;
    Some(Point2::new(ux, uy))
}

/**
 * The y-coordinate at which the parabolas with foci p1, p2 and common
 * directrix x = sx intersect. Of the (up to) two roots, the one chosen
 * is the one that keeps the returned breakpoint moving monotonically as
 * sx decreases: y1 when p1.x < p2.x, else y2.
 */
pub fn par_inter(p1: Point2, p2: Point2, sx: f64) -> f64 {
    let d1 = 2.0 * (p1.x - sx);
    let d2 = 2.0 * (p2.x - sx);
    if d1.abs() < EPS {
        return p1.y;
    }
    if d2.abs() < EPS {
        return p2.y;
    }
    if eps_eq(p1.x, p2.x) {
        return (p1.y + p2.y) / 2.0;
    }
    let a = 1.0 / d1 - 1.0 / d2;
    let b = -2.0 * (p1.y / d1 - p2.y / d2);
    let c = (p1.y * p1.y + p1.x * p1.x - sx * sx) / d1 - (p2.y * p2.y + p2.x * p2.x - sx * sx) / d2;
    let disc = (b * b - 4.0 * a * c).max(0.0);
    let sq = disc.sqrt();
    let y1 = (-b + sq) / (2.0 * a);
    let y2 = (-b - sq) / (2.0 * a);
    if p1.x < p2.x {
        y1
    } else {
        y2
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_circumcenter_collinear() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(2.0, 2.0);
        let c = Point2::new(44.0, 44.0);
        assert_eq!(circumcenter(a, b, c), None);
    }

    #[test]
    fn test_circumcenter() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(100.0, 400.0);
        let c = Point2::new(400.0, -200.0);

        let center = circumcenter(a, b, c).expect("expected a circumcenter");
        let r1 = Point2::distance(center, a);
        let r2 = Point2::distance(center, b);
        let r3 = Point2::distance(center, c);

        assert_float_eq!(r1, r2, abs <= 0.000_1);
        assert_float_eq!(r1, r3, abs <= 0.000_1);
    }

    #[test]
    fn test_par_inter_symmetric() {
        let f1 = Point2::new(100.0, 130.0);
        let f2 = Point2::new(500.0, 340.0);
        let sx = 600.0;

        let y = par_inter(f1, f2, sx);
        // x such that (x, y) lies on the parabola with focus f1 and
        // directrix x = sx: dist to f1 equals dist to the directrix.
        let x = (sx * sx - f1.x * f1.x - (y - f1.y) * (y - f1.y)) / (2.0 * (sx - f1.x));
        let p = Point2::new(x, y);

        let d_f1 = Point2::distance(p, f1);
        let d_f2 = Point2::distance(p, f2);
        let d_dir = (sx - x).abs();

        assert_float_eq!(d_f1, d_dir, abs <= 0.000_1);
        assert_float_eq!(d_f1, d_f2, abs <= 0.000_1);
    }

    #[test]
    fn test_par_inter_degenerate_on_directrix() {
        let f1 = Point2::new(10.0, 5.0);
        let f2 = Point2::new(20.0, 9.0);
        assert_float_eq!(par_inter(f1, f2, 10.0), 5.0, abs <= EPS);
    }

    #[test]
    fn test_par_inter_equal_x() {
        let f1 = Point2::new(10.0, 5.0);
        let f2 = Point2::new(10.0, 9.0);
        assert_float_eq!(par_inter(f1, f2, 50.0), 7.0, abs <= EPS);
    }

    #[test]
    fn test_signed_area_orientation() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(signed_area2(a, b, c) > 0.0);
        assert!(signed_area2(a, c, b) < 0.0);
    }
}
