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
 * The sweep driver: consumes site and circle events, grows the beach
 * line and the half-edge mesh, and finalizes the unbounded edges once
 * the queue is drained.
 */

use crate::beachline::BeachLine;
use crate::event::EventQueue;
use crate::geom::{circumcenter, signed_area2, Point2};
use crate::mesh::Diagram;

use log::{debug, info, trace};

struct Sweep {
    diagram: Diagram,
    beach: BeachLine,
    events: EventQueue,
}

impl Sweep {
    fn new(sites: Vec<Point2>) -> Sweep {
        Sweep {
            diagram: Diagram::new(sites),
            beach: BeachLine::new(),
            events: EventQueue::new(),
        }
    }

    fn run(mut self) -> Diagram {
        let site_count = self.diagram.sites().len();
        debug!("seeding {} site event(s)", site_count);
        for site_id in 0..site_count {
            let site = self.diagram.site(site_id);
            self.events.push_site(site_id, site);
        }

        while let Some(event) = self.events.pop() {
            match event.arc {
                None => {
                    let site_id = event.site.expect("site event must carry a site id");
                    trace!("site event at x={} site={}", event.x, site_id);
                    self.handle_site(site_id, event.x);
                }
                Some(arc_id) => {
                    trace!("circle event at x={} arc={}", event.x, arc_id);
                    self.handle_circle(arc_id, event.point);
                }
            }
        }

        self.finalize();
        info!(
            "sweep complete: {} vertices, {} half-edges, {} faces",
            self.diagram.vertices().len(),
            self.diagram.half_edges().len(),
            self.diagram.faces().len()
        );
        self.diagram
    }

    fn handle_site(&mut self, site_id: usize, sx: f64) {
        if self.beach.is_empty() {
            self.beach.install_root(site_id);
            return;
        }

        let site = self.diagram.site(site_id);
        let a = self.beach.locate(self.diagram.sites(), site.y, sx);

        if let Some(stale) = self.beach.arc(a).event {
            self.events.invalidate(stale);
            self.beach.set_event(a, None);
        }

        let a_site = self.beach.arc(a).site;
        let (n, a_prime) = self.beach.split(a, site_id);

        let (he, het) = self.diagram.new_edge(a_site, site_id);
        self.beach.set_s1(a, he);
        self.beach.set_s0(n, het);

        let (he2, het2) = self.diagram.new_edge(site_id, a_site);
        self.beach.set_s1(n, he2);
        self.beach.set_s0(a_prime, het2);

        self.check(a);
        self.check(a_prime);
    }

    fn handle_circle(&mut self, arc_id: usize, center: Point2) {
        let vertex = self.diagram.push_vertex(center);
        let arc = self.beach.arc(arc_id);

        if let Some(prev) = arc.prev {
            if let Some(stale) = self.beach.arc(prev).event {
                self.events.invalidate(stale);
                self.beach.set_event(prev, None);
            }
        }
        if let Some(next) = arc.next {
            if let Some(stale) = self.beach.arc(next).event {
                self.events.invalidate(stale);
                self.beach.set_event(next, None);
            }
        }

        if let Some(s0) = arc.s0 {
            self.diagram.set_origin(s0, vertex);
        }
        if let Some(s1) = arc.s1 {
            self.diagram.set_origin(s1, vertex);
        }
        if let Some(prev) = arc.prev {
            if let Some(prev_s1) = self.beach.arc(prev).s1 {
                self.diagram.set_origin(prev_s1, vertex);
            }
        }
        if let Some(next) = arc.next {
            if let Some(next_s0) = self.beach.arc(next).s0 {
                self.diagram.set_origin(next_s0, vertex);
            }
        }

        if let (Some(prev), Some(next)) = (arc.prev, arc.next) {
            let prev_site = self.beach.arc(prev).site;
            let next_site = self.beach.arc(next).site;
            let (he, het) = self.diagram.new_edge(prev_site, next_site);
            self.diagram.half_edge_mut(he).origin = Some(vertex);
            self.diagram.half_edge_mut(het).origin = Some(vertex);
            self.beach.set_s1(prev, he);
            self.beach.set_s0(next, het);
        }

        self.beach.unlink(arc_id);

        if let Some(prev) = arc.prev {
            self.check(prev);
        }
        if let Some(next) = arc.next {
            self.check(next);
        }
    }

    fn check(&mut self, arc_id: usize) {
        let arc = self.beach.arc(arc_id);
        let (prev_id, next_id) = match (arc.prev, arc.next) {
            (Some(p), Some(n)) => (p, n),
            _ => return,
        };

        let a = self.diagram.site(self.beach.arc(prev_id).site);
        let b = self.diagram.site(arc.site);
        let c = self.diagram.site(self.beach.arc(next_id).site);

        if signed_area2(a, b, c) >= 0.0 {
            return;
        }

        let center = match circumcenter(a, b, c) {
            Some(c) => c,
            None => return,
        };
        let radius = Point2::distance(center, b);
        let x = center.x + radius;

        let event_id = self.events.push_circle(x, center, arc_id);
        self.beach.set_event(arc_id, Some(event_id));
    }

    fn finalize(&mut self) {
        let pairs: Vec<(usize, usize)> = self.beach.adjacent_pairs().collect();
        for (a_id, next_id) in pairs {
            let a = self.beach.arc(a_id);
            let s1 = match a.s1 {
                Some(s1) => s1,
                None => continue,
            };
            if self.diagram.half_edge(s1).origin.is_some() {
                continue;
            }

            let next_arc = self.beach.arc(next_id);
            let site_a = self.diagram.site(a.site);
            let site_b = self.diagram.site(next_arc.site);
            let mid = Point2::midpoint(site_a, site_b);
            let direction = Point2::new(-(site_b.y - site_a.y), site_b.x - site_a.x);

            let he = self.diagram.half_edge_mut(s1);
            he.anchor = Some(mid);
            he.direction = Some(direction);
        }
    }
}

/**
 * Computes the Voronoi diagram of the given sites by Fortune's sweep.
 */
pub fn compute_voronoi(sites: &[(f64, f64)]) -> Diagram {
    let points: Vec<Point2> = sites.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    Sweep::new(points).run()
}
