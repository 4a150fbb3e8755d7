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
 * The beach line: a doubly-linked sequence of parabolic arcs, held as
 * an arena addressed by index (arcs are retired, never freed, during a
 * sweep, so there is no need to reuse slots).
 */

use crate::geom::{par_inter, Point2, EPS};

/**
 * One arc of the beach line. `s0`/`s1` are the half-edges whose origin
 * this arc will set when it is retired by a circle event: `s0` borders
 * the arc on the `prev` side, `s1` on the `next` side.
 */
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub site: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub event: Option<usize>,
    pub s0: Option<usize>,
    pub s1: Option<usize>,
}

impl Arc {
    fn new(site: usize) -> Arc {
        Arc {
            site,
            prev: None,
            next: None,
            event: None,
            s0: None,
            s1: None,
        }
    }
}

pub struct BeachLine {
    arcs: Vec<Arc>,
    head: Option<usize>,
}

impl BeachLine {
    pub fn new() -> BeachLine {
        BeachLine {
            arcs: Vec::new(),
            head: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn arc(&self, id: usize) -> Arc {
        self.arcs[id]
    }

    pub fn set_event(&mut self, id: usize, event: Option<usize>) {
        self.arcs[id].event = event;
    }

    pub fn set_s0(&mut self, id: usize, half_edge: usize) {
        self.arcs[id].s0 = Some(half_edge);
    }

    pub fn set_s1(&mut self, id: usize, half_edge: usize) {
        self.arcs[id].s1 = Some(half_edge);
    }

    /**
     * Installs the sole arc of an empty beach line.
     */
    pub fn install_root(&mut self, site: usize) -> usize {
        let id = self.arcs.len();
        self.arcs.push(Arc::new(site));
        self.head = Some(id);
        id
    }

    /**
     * Finds the arc directly above `site_y` at sweep coordinate `sx`,
     * scanning from the head. If no breakpoint exceeds `site_y`, the
     * tail arc is returned.
     */
    pub fn locate(&self, sites: &[Point2], site_y: f64, sx: f64) -> usize {
        let mut current = self.head.expect("locate called on an empty beach line");
        loop {
            let arc = self.arcs[current];
            let next_id = match arc.next {
                Some(n) => n,
                None => break,
            };
            let next_arc = self.arcs[next_id];
            let break_y = par_inter(sites[arc.site], sites[next_arc.site], sx);
            if site_y < break_y - EPS {
                break;
            }
            current = next_id;
        }
        current
    }

    /**
     * Splits arc `a` by inserting a new arc for `new_site`, duplicating
     * `a`'s site on the far side, so the beach line order becomes
     * `... a - n - a' - (old a.next) ...`. Returns `(n, a')`.
     */
    pub fn split(&mut self, a: usize, new_site: usize) -> (usize, usize) {
        let old_next = self.arcs[a].next;

        let a_prime_id = self.arcs.len();
        self.arcs.push(Arc::new(self.arcs[a].site));
        let n_id = self.arcs.len();
        self.arcs.push(Arc::new(new_site));

        self.arcs[n_id].prev = Some(a);
        self.arcs[n_id].next = Some(a_prime_id);
        self.arcs[a_prime_id].prev = Some(n_id);
        self.arcs[a_prime_id].next = old_next;
        self.arcs[a].next = Some(n_id);
        if let Some(next) = old_next {
            self.arcs[next].prev = Some(a_prime_id);
        }

        (n_id, a_prime_id)
    }

    /**
     * Unlinks `arc` from the beach line, connecting its former
     * neighbors to each other. Returns `(prev, next)` as they were
     * before the unlink.
     */
    pub fn unlink(&mut self, arc: usize) -> (Option<usize>, Option<usize>) {
        let prev = self.arcs[arc].prev;
        let next = self.arcs[arc].next;
        if let Some(p) = prev {
            self.arcs[p].next = next;
        }
        if let Some(n) = next {
            self.arcs[n].prev = prev;
        }
        if self.head == Some(arc) {
            self.head = next;
        }
        (prev, next)
    }

    /**
     * Iterates the `(arc, arc.next)` pairs left after the sweep, in
     * beach-line order, for the finalizer.
     */
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let id = current?;
            let next_id = self.arcs[id].next?;
            current = Some(next_id);
            Some((id, next_id))
        })
    }
}
