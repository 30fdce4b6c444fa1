//! Minimal host-language binding surface: exercises [`marching_front::discretize`]
//! from the command line and reports a triangle count and total area.
//!
//! This binary is a demonstration, not a specified component — the real
//! host/CLI binding is explicitly out of scope; this just gives the
//! library something to be driven by.

use clap::Parser;

/// Tessellate an implicit equipotential surface into a triangle mesh.
#[derive(Parser, Debug)]
#[command(name = "tessellate-front")]
struct Cli {
    /// Target edge length of emitted triangles.
    delta: f64,
    /// Upper bound on marching-loop steps; <= 0 means unbounded.
    max_triangles: i32,
    /// Potential name (Sphere, BinaryRoche, MisalignedBinaryRoche,
    /// RotateRoche, Torus, Heart).
    potential: String,
    /// Potential parameters (arity depends on the chosen potential).
    params: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mesh = marching_front::discretize(cli.delta, cli.max_triangles, &cli.potential, &cli.params)?;
    let total_area: f64 = mesh.rows.iter().map(|row| row[3]).sum();

    println!(
        "{} triangles, total area {:.6}, {} non-convergent projections",
        mesh.triangles.len(),
        total_area,
        mesh.non_convergent_projections
    );
    Ok(())
}
