//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates sample arrays
//! - runs the batch evaluation
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, PlotArgs, SampleArgs};
use crate::domain::{EvalConfig, SampleMode};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `relicpol` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Sample(args) => handle_sample(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args);
    let run = pipeline::run_eval(&config)?;

    // Print terminal output.
    println!(
        "{}",
        crate::report::format_run_summary(&config.params(), &run.stats, &run.output)
    );
    print!(
        "{}",
        crate::report::format_diagnostics(&run.output.diagnostics)
    );

    let points: Vec<(f64, f64)> = run
        .inclination_deg
        .iter()
        .copied()
        .zip(run.output.likelihood.iter().copied())
        .collect();

    if config.plot {
        let plot = crate::plot::render_scatter(&points, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_results_csv(path, &run.samples, &run.output)?;
    }
    if let Some(path) = &config.export_results {
        let results =
            crate::io::build_results(&config.params(), run.inclination_deg.clone(), &run.output);
        crate::io::write_results_json(path, &results)?;
    }
    if let Some(path) = &config.export_svg {
        crate::plot::write_scatter_svg(path, &points, 800, 600)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let set = match args.mode {
        SampleMode::Grid => crate::data::generate_grid(args.step)?,
        SampleMode::Triangular => crate::data::generate_triangular(args.count, args.guide, args.seed)?,
    };

    crate::io::write_array(&args.priors_out, &set.priors)?;
    crate::io::write_array(&args.angles_out, &set.angles_deg)?;

    println!(
        "Wrote {} samples ({} mode): priors -> '{}', angles -> '{}'",
        set.len(),
        args.mode.display_name(),
        args.priors_out.display(),
        args.angles_out.display()
    );
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let results = crate::io::read_results_json(&args.results)?;

    let points: Vec<(f64, f64)> = results
        .inclination_deg
        .iter()
        .copied()
        .zip(results.likelihood.iter().copied())
        .collect();

    let plot = crate::plot::render_scatter(&points, args.width, args.height);
    println!("{plot}");
    print!("{}", crate::report::format_diagnostics(&results.diagnostics));

    if let Some(path) = &args.export_svg {
        crate::plot::write_scatter_svg(path, &points, 800, 600)?;
    }

    Ok(())
}

pub fn eval_config_from_args(args: &EvalArgs) -> EvalConfig {
    EvalConfig {
        priors_path: args.priors.clone(),
        angles_path: args.angles.clone(),
        alpha: args.alpha,
        pfrac_obs: args.pfrac,
        sigma: args.sigma,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_results: args.export_results.clone(),
        export_svg: args.export_svg.clone(),
    }
}
