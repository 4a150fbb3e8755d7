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
 * The half-edge mesh the sweep builds the diagram into, and the
 * `Diagram` it is finally handed to the caller as.
 */

use crate::geom::Point2;

/**
 * A directed edge of the planar subdivision. `origin` is unset until the
 * breakpoint it traces collapses at a circle event. A half-edge whose
 * breakpoint never collapses is instead given an `anchor` (a point on
 * its bisector, not a Voronoi vertex) and a `direction` by the
 * finalizer; `anchor` and `origin` are never both set.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    pub origin: Option<usize>,
    pub anchor: Option<Point2>,
    pub twin: usize,
    pub face: usize,
    pub direction: Option<Point2>,
}

/**
 * One Voronoi cell, identified with the site that generates it.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    site_id: usize,
    pub site: Point2,
}

impl Face {
    /**
     * The index of this face's site in the input slice passed to
     * `compute_voronoi`. Used only to tell faces apart when two input
     * sites share coordinates.
     */
    pub fn site_id(&self) -> usize {
        self.site_id
    }
}

/**
 * The diagram produced by a sweep: vertices, half-edge pairs, and
 * faces. Returned by value from `compute_voronoi`; every accessor below
 * is read-only, there is no way to mutate a `Diagram` once it is handed
 * back to the caller.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    sites: Vec<Point2>,
    vertices: Vec<Point2>,
    half_edges: Vec<HalfEdge>,
    edges: Vec<(usize, usize)>,
    faces: Vec<Face>,
}

impl Diagram {
    pub(crate) fn new(sites: Vec<Point2>) -> Diagram {
        Diagram {
            sites,
            vertices: Vec::new(),
            half_edges: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /**
     * Returns the face for the given site, creating and appending it if
     * this is the first time this site has produced an edge.
     */
    pub(crate) fn face_of(&mut self, site_id: usize) -> usize {
        if let Some(id) = self.faces.iter().position(|f| f.site_id == site_id) {
            return id;
        }
        let id = self.faces.len();
        self.faces.push(Face {
            site_id,
            site: self.sites[site_id],
        });
        id
    }

    /**
     * Allocates a twinned pair of half-edges between the faces of
     * `left_site` and `right_site`, with undefined origins, and appends
     * the pair to the diagram's edge list.
     */
    pub(crate) fn new_edge(&mut self, left_site: usize, right_site: usize) -> (usize, usize) {
        let left_face = self.face_of(left_site);
        let right_face = self.face_of(right_site);

        let he_id = self.half_edges.len();
        let twin_id = he_id + 1;
        self.half_edges.push(HalfEdge {
            origin: None,
            anchor: None,
            twin: twin_id,
            face: left_face,
            direction: None,
        });
        self.half_edges.push(HalfEdge {
            origin: None,
            anchor: None,
            twin: he_id,
            face: right_face,
            direction: None,
        });
        self.edges.push((he_id, twin_id));
        (he_id, twin_id)
    }

    pub(crate) fn push_vertex(&mut self, p: Point2) -> usize {
        let id = self.vertices.len();
        self.vertices.push(p);
        id
    }

    pub(crate) fn site(&self, site_id: usize) -> Point2 {
        self.sites[site_id]
    }

    pub(crate) fn half_edge_mut(&mut self, id: usize) -> &mut HalfEdge {
        &mut self.half_edges[id]
    }

    /**
     * Sets the origin of the half-edge to `vertex`, unconditionally.
     * A half-edge created at one circle event is routinely given its
     * final origin by a later one, as the bisector it traces is
     * pinned down from both ends over the course of the sweep.
     */
    pub(crate) fn set_origin(&mut self, id: usize, vertex: usize) {
        self.half_edges[id].origin = Some(vertex);
    }

    pub fn sites(&self) -> &[Point2] {
        &self.sites
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    /**
     * The ordered sequence of undirected edges, as pairs of half-edge
     * indices into `half_edges()`.
     */
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn half_edge(&self, id: usize) -> HalfEdge {
        self.half_edges[id]
    }

    pub fn vertex(&self, id: usize) -> Point2 {
        self.vertices[id]
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_face_of_is_lazy_and_deduplicates() {
        let mut diagram = Diagram::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(diagram.faces().is_empty());
        let f0 = diagram.face_of(0);
        let f0_again = diagram.face_of(0);
        let f1 = diagram.face_of(1);
        assert_eq!(f0, f0_again);
        assert_ne!(f0, f1);
        assert_eq!(diagram.faces().len(), 2);
    }

    #[test]
    fn test_new_edge_twins_and_faces() {
        let mut diagram = Diagram::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let (he, het) = diagram.new_edge(0, 1);
        assert_eq!(diagram.half_edge(he).twin, het);
        assert_eq!(diagram.half_edge(het).twin, he);
        assert_ne!(diagram.half_edge(he).face, diagram.half_edge(het).face);
        assert_eq!(diagram.half_edge(he).origin, None);
        assert_eq!(diagram.edges(), &[(he, het)]);
    }

    #[test]
    fn test_distinct_sites_same_coordinates_get_distinct_faces() {
        let mut diagram = Diagram::new(vec![Point2::new(5.0, 5.0), Point2::new(5.0, 5.0)]);
        let f0 = diagram.face_of(0);
        let f1 = diagram.face_of(1);
        assert_ne!(f0, f1);
    }
}
