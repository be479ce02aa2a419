use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fd_grid::grid::Field;
use fd_grid::initialization;

const DEFAULT_PARAM_FILE: &str = "inputs/gridparam.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PARAM_FILE.to_string());
    let (mut grid, init_params) = initialization::initialize_params_by_file(&param_file)?;
    initialization::initialize_with(&mut grid, &init_params);

    let phi = grid.field(Field::Phi);
    let phi_min = phi.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let phi_max = phi.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    info!(
        field = Field::Phi.name(),
        min = phi_min,
        max = phi_max,
        dx = grid.dx(),
        dy = grid.dy(),
        "field summary"
    );
    Ok(())
}
