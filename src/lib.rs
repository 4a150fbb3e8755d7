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
 * A Voronoi diagram by Fortune's sweep: site/circle events driving a
 * beach line of parabolic arcs into a half-edge mesh, plus a clipper
 * and a point-file loader to use it from the command line.
 */

mod beachline;
mod clip;
mod event;
mod geom;
mod loader;
mod mesh;
mod sweep;

pub use clip::{clip_segment, collect_segments, Viewport};
pub use geom::{circumcenter, par_inter, Point2, EPS};
pub use loader::{load_sites, parse_sites};
pub use mesh::{Diagram, Face, HalfEdge};
pub use sweep::compute_voronoi;
