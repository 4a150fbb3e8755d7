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
 * End-to-end smoke test: runs the CLI binary against a fixture file
 * and checks the shape of its stdout, not exact coordinates.
 */

use std::fs;
use std::process::Command;

#[test]
fn test_cli_prints_two_rays_for_two_sites() {
    let dir = std::env::temp_dir();
    let path = dir.join("voronoi_sweep_cli_test_two_sites.txt");
    fs::write(&path, "0,0\n10,0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_voronoi-cli"))
        .arg("--input")
        .arg(&path)
        .arg("--xmin")
        .arg("-100")
        .arg("--xmax")
        .arg("100")
        .arg("--ymin")
        .arg("-100")
        .arg("--ymax")
        .arg("100")
        .output()
        .expect("failed to run voronoi-cli");

    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    // the bisector between the two sites is split into an upward and a
    // downward ray from (5, 0)
    assert_eq!(lines.len(), 2);

    for line in lines {
        let fields: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 4);
        assert!((fields[0] - 5.0).abs() < 1e-6);
        assert!((fields[2] - 5.0).abs() < 1e-6);
    }
}

#[test]
fn test_cli_missing_input_file_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_voronoi-cli"))
        .arg("--input")
        .arg("/nonexistent/path/does-not-exist.txt")
        .output()
        .expect("failed to run voronoi-cli");

    assert!(!output.status.success());
}

#[test]
fn test_cli_runs_demo_set_without_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_voronoi-cli"))
        .output()
        .expect("failed to run voronoi-cli");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().count() > 0);
}
