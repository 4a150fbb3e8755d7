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
 * Application entry point: loads sites, computes the diagram, clips
 * it to a viewport, and prints the resulting segments.
 */

use anyhow::{Context, Result};
use log::info;
use voronoi_sweep::{collect_segments, compute_voronoi, load_sites};

/**
 * The demo set used when no `--input` is given.
 */
const DEMO_SITES: &[(f64, f64)] = &[
    (0.0, 0.0),
    (10.0, 0.0),
    (5.0, 8.0),
    (3.0, -4.0),
    (12.0, 5.0),
];

/**
 * Resolved application settings: where the sites come from and what
 * viewport to clip against. Logged once at startup, same as the
 * application settings this binary is modeled on.
 */
#[derive(Debug)]
struct Settings {
    input: Option<String>,
    xmin: Option<f64>,
    xmax: Option<f64>,
    ymin: Option<f64>,
    ymax: Option<f64>,
    far: Option<f64>,
}

impl Settings {
    fn from_args() -> Result<Settings> {
        let mut settings = Settings {
            input: None,
            xmin: None,
            xmax: None,
            ymin: None,
            ymax: None,
            far: None,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("missing value for {}", arg))
            };
            match arg.as_str() {
                "--input" => settings.input = Some(value()?),
                "--xmin" => settings.xmin = Some(value()?.parse().context("--xmin")?),
                "--xmax" => settings.xmax = Some(value()?.parse().context("--xmax")?),
                "--ymin" => settings.ymin = Some(value()?.parse().context("--ymin")?),
                "--ymax" => settings.ymax = Some(value()?.parse().context("--ymax")?),
                "--far" => settings.far = Some(value()?.parse().context("--far")?),
                other => anyhow::bail!("unrecognized argument: {}", other),
            }
        }
        Ok(settings)
    }

    fn log(&self) {
        info!("settings:");
        info!("input: {:?}", self.input.as_deref().unwrap_or("<demo set>"));
        info!(
            "viewport override: xmin={:?} xmax={:?} ymin={:?} ymax={:?} far={:?}",
            self.xmin, self.xmax, self.ymin, self.ymax, self.far
        );
    }
}

/**
 * The bounding box of `sites`, padded by 10% of the larger span on
 * each side (or a unit pad, if the sites are a single point).
 */
fn padded_bounds(sites: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    if sites.is_empty() {
        return (-1.0, 1.0, -1.0, 1.0);
    }
    let mut xmin = sites[0].0;
    let mut xmax = sites[0].0;
    let mut ymin = sites[0].1;
    let mut ymax = sites[0].1;
    for &(x, y) in sites {
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }

    let span = (xmax - xmin).max(ymax - ymin);
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    (xmin - pad, xmax + pad, ymin - pad, ymax + pad)
}

fn run() -> Result<()> {
    env_logger::init();
    let settings = Settings::from_args()?;
    info!("application started...");
    settings.log();

    let sites = match &settings.input {
        Some(path) => load_sites(path)?,
        None => DEMO_SITES.to_vec(),
    };
    info!("loaded {} site(s)", sites.len());

    let (bx_min, bx_max, by_min, by_max) = padded_bounds(&sites);
    let xmin = settings.xmin.unwrap_or(bx_min);
    let xmax = settings.xmax.unwrap_or(bx_max);
    let ymin = settings.ymin.unwrap_or(by_min);
    let ymax = settings.ymax.unwrap_or(by_max);

    info!("generating voronoi diagram");
    let diagram = compute_voronoi(&sites);
    let segments = collect_segments(&diagram, xmin, xmax, ymin, ymax, settings.far);
    info!(
        "diagram complete: {} face(s), {} vertex(es), {} segment(s)",
        diagram.faces().len(),
        diagram.vertices().len(),
        segments.len()
    );

    for ((x1, y1), (x2, y2)) in segments {
        println!("{},{},{},{}", x1, y1, x2, y2);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:?}", err);
        std::process::exit(1);
    }
}
