use std::path::Path;

use anyhow::Result;
use ndarray::Zip;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{grid::Grid, io::param_parser::GridParamParser};

/// Truncated value of pi used by the legacy Fortran/C++ initializer.
pub const LEGACY_PI: f64 = 3.14159;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiPrecision {
    #[default]
    Full,
    /// Reproduces fields written by the legacy initializer bit for bit.
    Legacy,
}
impl PiPrecision {
    pub fn value(&self) -> f64 {
        match self {
            PiPrecision::Full => std::f64::consts::PI,
            PiPrecision::Legacy => LEGACY_PI,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InitParameters {
    pub pi_precision: PiPrecision,
    pub parallel: bool,
}

pub fn initialize_params_by_file<P: AsRef<Path>>(file_path: P) -> Result<(Grid, InitParameters)> {
    let param_parser = GridParamParser::parse(file_path)?;
    debug!(?param_parser, "grid parameters loaded");
    let grid = Grid::new(param_parser.nx, param_parser.ny);
    let init_params = InitParameters {
        pi_precision: param_parser.pi_precision,
        parallel: param_parser.parallel,
    };
    Ok((grid, init_params))
}

/// Seeds `phi(i, j) = sin(2πi/nx) sin(2πj/ny)` and `rhs = 0` over every node.
pub fn initialize(grid: &mut Grid) {
    initialize_with(grid, &InitParameters::default());
}

pub fn initialize_with(grid: &mut Grid, params: &InitParameters) {
    let two_pi = 2.0 * params.pi_precision.value();
    let (nx, ny) = grid.dims();
    let (nx_f, ny_f) = (nx as f64, ny as f64);
    let (phi, rhs) = grid.fields_mut();
    // storage is 0-based, the formula uses 1-based node numbers
    let fill = |(i, j): (usize, usize), phi: &mut f64, rhs: &mut f64| {
        let i = (i + 1) as f64;
        let j = (j + 1) as f64;
        *phi = (two_pi * i / nx_f).sin() * (two_pi * j / ny_f).sin();
        *rhs = 0.0;
    };
    let zip = Zip::indexed(phi).and(rhs);
    if params.parallel {
        zip.par_for_each(fill);
    } else {
        zip.for_each(fill);
    }
    info!(nx, ny, "grid initialized");
}
