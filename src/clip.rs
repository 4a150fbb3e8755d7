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
 * Clips the diagram's edges against an axis-aligned viewport, turning
 * dangling half-edges into finite rays first, via Cohen-Sutherland
 * segment clipping.
 */

use crate::geom::{Point2, EPS};
use crate::mesh::{Diagram, HalfEdge};

const DEFAULT_FAR: f64 = 1e5;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/**
 * An axis-aligned clip rectangle.
 */
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Viewport {
        Viewport { xmin, xmax, ymin, ymax }
    }

    fn region_code(&self, p: Point2) -> u8 {
        let mut code = INSIDE;
        if p.x < self.xmin {
            code |= LEFT;
        } else if p.x > self.xmax {
            code |= RIGHT;
        }
        if p.y < self.ymin {
            code |= BOTTOM;
        } else if p.y > self.ymax {
            code |= TOP;
        }
        code
    }
}

/**
 * Clips the segment (p1, p2) against the viewport using Cohen-
 * Sutherland. Returns `None` if the segment lies entirely outside.
 */
pub fn clip_segment(p1: Point2, p2: Point2, viewport: &Viewport) -> Option<(Point2, Point2)> {
    let (mut x1, mut y1) = (p1.x, p1.y);
    let (mut x2, mut y2) = (p2.x, p2.y);

    for _ in 0..20 {
        let code1 = viewport.region_code(Point2::new(x1, y1));
        let code2 = viewport.region_code(Point2::new(x2, y2));

        if code1 | code2 == INSIDE {
            return Some((Point2::new(x1, y1), Point2::new(x2, y2)));
        }
        if code1 & code2 != 0 {
            return None;
        }

        let outside = if code1 != INSIDE { code1 } else { code2 };
        let (x, y);
        if outside & TOP != 0 {
            x = x1 + (x2 - x1) * (viewport.ymax - y1) / (y2 - y1 + EPS);
            y = viewport.ymax;
        } else if outside & BOTTOM != 0 {
            x = x1 + (x2 - x1) * (viewport.ymin - y1) / (y2 - y1 + EPS);
            y = viewport.ymin;
        } else if outside & RIGHT != 0 {
            y = y1 + (y2 - y1) * (viewport.xmax - x1) / (x2 - x1 + EPS);
            x = viewport.xmax;
        } else {
            y = y1 + (y2 - y1) * (viewport.xmin - x1) / (x2 - x1 + EPS);
            x = viewport.xmin;
        }

        if outside == code1 {
            x1 = x;
            y1 = y;
        } else {
            x2 = x;
            y2 = y;
        }
    }
    None
}

/**
 * The half-edge's known endpoint, whether it is a real Voronoi vertex
 * or the conventional anchor point the finalizer gave an unbounded
 * edge.
 */
fn endpoint(he: &HalfEdge, diagram: &Diagram) -> Option<Point2> {
    he.origin.map(|v| diagram.vertex(v)).or(he.anchor)
}

/**
 * Walks every edge pair of the diagram, materializes its endpoints
 * (turning unbounded rays into segments of length `far`), clips each
 * against the viewport, and returns the finite segments that remain.
 */
pub fn collect_segments(
    diagram: &Diagram,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    far: Option<f64>,
) -> Vec<((f64, f64), (f64, f64))> {
    let viewport = Viewport::new(xmin, xmax, ymin, ymax);
    let far = far.unwrap_or(DEFAULT_FAR);
    let mut segments = Vec::new();

    for &(he_id, het_id) in diagram.edges() {
        let he = diagram.half_edge(he_id);
        let het = diagram.half_edge(het_id);
        let p_he = endpoint(&he, diagram);
        let p_het = endpoint(&het, diagram);

        let (p1, p2) = match (p_he, p_het) {
            (None, None) => continue,
            (Some(a), Some(b)) => {
                if (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 {
                    continue;
                }
                (a, b)
            }
            _ => {
                let (origin, dangling) = if p_he.is_some() {
                    (p_he.unwrap(), het)
                } else {
                    (p_het.unwrap(), he)
                };
                let direction = dangling.direction.or(he.direction).or(het.direction);
                let direction = match direction {
                    Some(d) => d,
                    None => continue,
                };
                let length = direction.length();
                if length < EPS {
                    continue;
                }
                let far_point = Point2::new(
                    origin.x + direction.x / length * far,
                    origin.y + direction.y / length * far,
                );
                (origin, far_point)
            }
        };

        if let Some((a, b)) = clip_segment(p1, p2, &viewport) {
            if Point2::distance(a, b) > 1e-9 {
                segments.push(((a.x, a.y), (b.x, b.y)));
            }
        }
    }

    segments
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_segment_fully_inside_is_unchanged() {
        let vp = Viewport::new(0.0, 10.0, 0.0, 10.0);
        let r = clip_segment(Point2::new(1.0, 1.0), Point2::new(9.0, 9.0), &vp);
        assert_eq!(r, Some((Point2::new(1.0, 1.0), Point2::new(9.0, 9.0))));
    }

    #[test]
    fn test_segment_fully_outside_is_dropped() {
        let vp = Viewport::new(0.0, 10.0, 0.0, 10.0);
        let r = clip_segment(Point2::new(20.0, 20.0), Point2::new(30.0, 30.0), &vp);
        assert_eq!(r, None);
    }

    #[test]
    fn test_segment_crossing_boundary_is_clipped() {
        let vp = Viewport::new(0.0, 10.0, 0.0, 10.0);
        let r = clip_segment(Point2::new(-5.0, 5.0), Point2::new(5.0, 5.0), &vp)
            .expect("segment should intersect the viewport");
        assert!((r.0.x - 0.0).abs() < 1e-6);
        assert_eq!(r.1, Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_collect_segments_on_two_sites() {
        let diagram = crate::sweep::compute_voronoi(&[(0.0, 0.0), (10.0, 0.0)]);
        let segments = collect_segments(&diagram, -100.0, 100.0, -100.0, 100.0, None);
        // the bisector is split into an upward and a downward ray from (5, 0)
        assert_eq!(segments.len(), 2);
        for ((x1, _), (x2, _)) in segments {
            assert!((x1 - 5.0).abs() < 1e-6);
            assert!((x2 - 5.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shrinking_viewport_never_increases_segment_count() {
        let diagram = crate::sweep::compute_voronoi(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 8.0),
            (3.0, -4.0),
            (12.0, 5.0),
        ]);
        let wide = collect_segments(&diagram, -200.0, 200.0, -200.0, 200.0, None);
        let narrow = collect_segments(&diagram, -5.0, 15.0, -5.0, 15.0, None);
        assert!(narrow.len() <= wide.len());
    }

    #[test]
    fn test_empty_diagram_has_no_segments() {
        let diagram = crate::sweep::compute_voronoi(&[]);
        let segments = collect_segments(&diagram, 0.0, 10.0, 0.0, 10.0, None);
        assert!(segments.is_empty());
    }
}
