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
 * The sweep's event queue: site events and circle events, ordered by
 * sweep coordinate with lazy invalidation of stale circle events.
 */

use crate::geom::{eps_eq, Point2};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/**
 * A queued event. A site event has `arc = None` and `point` equal to
 * the site itself; a circle event has `arc = Some(arc_id)` and `point`
 * equal to the predicted circumcenter.
 */
#[derive(Debug, Clone, Copy)]
pub struct EventRecord {
    pub x: f64,
    pub point: Point2,
    pub arc: Option<usize>,
    /// The input site index, set only on site events (`arc.is_none()`).
    pub site: Option<usize>,
    pub valid: bool,
}

/**
 * The key by which events are ordered: sweep coordinate first, then the
 * point's y as an EPS-tolerant tiebreak. `Ord` is inverted relative to
 * the natural numeric order so that `BinaryHeap`, which is a max-heap,
 * pops the smallest key first.
 */
struct HeapKey {
    id: usize,
    x: f64,
    y: f64,
}

impl PartialEq for HeapKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HeapKey {}

impl Ord for HeapKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = if eps_eq(self.x, other.x) {
            self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal)
        } else {
            self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal)
        };
        // reversed: BinaryHeap is a max-heap, we want the smallest key on top
        ordering.reverse()
    }
}

impl PartialOrd for HeapKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/**
 * The event queue proper: an arena of `EventRecord`s (so that an arc can
 * hold a stable reference to "its" circle event and invalidate it later)
 * plus a binary heap of keys ordering them.
 */
pub struct EventQueue {
    records: Vec<EventRecord>,
    heap: BinaryHeap<HeapKey>,
}

impl EventQueue {
    pub fn new() -> EventQueue {
        EventQueue {
            records: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    /**
     * Pushes a site event for the given site and returns its id.
     */
    pub fn push_site(&mut self, site_id: usize, site: Point2) -> usize {
        self.push(EventRecord {
            x: site.x,
            point: site,
            arc: None,
            site: Some(site_id),
            valid: true,
        })
    }

    /**
     * Pushes a circle event predicted to close on `arc` and returns its
     * id. Callers are responsible for storing this id on the arc.
     */
    pub fn push_circle(&mut self, x: f64, center: Point2, arc: usize) -> usize {
        self.push(EventRecord {
            x,
            point: center,
            arc: Some(arc),
            site: None,
            valid: true,
        })
    }

    fn push(&mut self, record: EventRecord) -> usize {
        let id = self.records.len();
        self.heap.push(HeapKey {
            id,
            x: record.x,
            y: record.point.y,
        });
        self.records.push(record);
        id
    }

    /**
     * Marks the event invalid; it will be silently discarded the next
     * time it reaches the top of the heap.
     */
    pub fn invalidate(&mut self, id: usize) {
        self.records[id].valid = false;
    }

    /**
     * Pops and returns the next valid event, discarding any stale
     * (invalidated) events found along the way.
     */
    pub fn pop(&mut self) -> Option<EventRecord> {
        while let Some(key) = self.heap.pop() {
            let record = self.records[key.id];
            if record.valid {
                return Some(record);
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_pops_in_sweep_order() {
        let mut queue = EventQueue::new();
        queue.push_site(0, Point2::new(5.0, 0.0));
        queue.push_site(1, Point2::new(1.0, 0.0));
        queue.push_site(2, Point2::new(3.0, 0.0));

        let xs: Vec<f64> = std::iter::from_fn(|| queue.pop()).map(|e| e.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_ties_break_on_y() {
        let mut queue = EventQueue::new();
        queue.push_site(0, Point2::new(1.0, 9.0));
        queue.push_site(1, Point2::new(1.0, 2.0));

        let ys: Vec<f64> = std::iter::from_fn(|| queue.pop()).map(|e| e.point.y).collect();
        assert_eq!(ys, vec![2.0, 9.0]);
    }

    #[test]
    fn test_invalidated_event_is_skipped() {
        let mut queue = EventQueue::new();
        let stale = queue.push_circle(1.0, Point2::new(0.0, 0.0), 0);
        queue.push_site(0, Point2::new(2.0, 0.0));
        queue.invalidate(stale);

        let next = queue.pop().expect("one valid event remains");
        assert_eq!(next.x, 2.0);
        assert!(queue.pop().is_none());
    }
}
