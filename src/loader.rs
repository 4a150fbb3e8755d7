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
 * Reads a site list from a text file: one site per line, coordinates
 * separated by a comma or semicolon. Blank lines and lines starting
 * with `#` are ignored; a line whose fields don't parse as numbers is
 * silently skipped rather than failing the whole load.
 */

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/**
 * Loads the sites found in the file at `path`.
 */
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read site file {}", path.display()))?;
    Ok(parse_sites(&contents))
}

/**
 * Parses sites out of the given text, applying the same tolerant rules
 * as `load_sites`. Exposed separately so the CLI and its tests don't
 * need a file on disk to exercise the parsing rules.
 */
pub fn parse_sites(contents: &str) -> Vec<(f64, f64)> {
    let mut sites = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(|c| c == ',' || c == ';').collect();
        if fields.len() < 2 {
            warn!("loader: skipping malformed line {}: {:?}", lineno + 1, line);
            continue;
        }
        let x = fields[0].trim().parse::<f64>();
        let y = fields[1].trim().parse::<f64>();
        match (x, y) {
            (Ok(x), Ok(y)) => sites.push((x, y)),
            _ => warn!("loader: skipping malformed line {}: {:?}", lineno + 1, line),
        }
    }
    sites
}
