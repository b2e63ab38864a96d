use clap::{Args, Parser, Subcommand};
use hc_app::{
    AppResult, BatchSummary, SweepDefinition, case_service, evaluate_raw, format_breakdown,
    format_result, format_scientific, run_sweep,
};
use hc_input::{CaseFile, InputField, RawInputs, reference_case, save_case_file};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "Hsu-Chen binary liquid diffusion coefficient calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute D_AB and its deviation from the experimental value
    Compute {
        #[command(flatten)]
        inputs: InputArgs,
        /// Also print the inputs and intermediate terms
        #[arg(long)]
        breakdown: bool,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every case in a YAML/JSON case file
    Cases {
        /// Path to the case file (.yaml, .yml or .json)
        path: PathBuf,
        /// Print the runs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tabulate D_AB across a range of solute mole fractions (CSV)
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,
        /// First mole fraction of the sweep
        #[arg(long, default_value_t = 0.05)]
        from: f64,
        /// Last mole fraction of the sweep
        #[arg(long, default_value_t = 0.95)]
        to: f64,
        /// Number of points (at most 100000)
        #[arg(long, default_value_t = 19)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a case file holding the reference scenario
    Template {
        /// Destination path (.yaml, .yml or .json)
        path: PathBuf,
    },
    /// List the input fields with their units and reference values
    Fields,
}

/// The eleven inputs as raw text; `.` and `,` are both accepted as decimal separator.
/// Defaults come from the field catalog.
#[derive(Args)]
struct InputArgs {
    /// Mole fraction of solute A
    #[arg(long = "x_A", default_value = InputField::MoleFractionA.default_text(), allow_hyphen_values = true)]
    x_a: String,
    /// Infinite-dilution diffusivity of A in B [cm²/s]
    #[arg(long = "D_AB0", default_value = InputField::DiffusivityAB0.default_text(), allow_hyphen_values = true)]
    d_ab0: String,
    /// Infinite-dilution diffusivity of B in A [cm²/s]
    #[arg(long = "D_BA0", default_value = InputField::DiffusivityBA0.default_text(), allow_hyphen_values = true)]
    d_ba0: String,
    /// UNIFAC volume parameter of A
    #[arg(long = "rA", default_value = InputField::VolumeA.default_text(), allow_hyphen_values = true)]
    r_a: String,
    /// UNIFAC volume parameter of B
    #[arg(long = "rB", default_value = InputField::VolumeB.default_text(), allow_hyphen_values = true)]
    r_b: String,
    /// Experimental D_AB [cm²/s]
    #[arg(long = "DAB_exp", default_value = InputField::ExperimentalDiffusivity.default_text(), allow_hyphen_values = true)]
    d_exp: String,
    /// Temperature [K]
    #[arg(long = "T", default_value = InputField::Temperature.default_text(), allow_hyphen_values = true)]
    t: String,
    /// Interaction parameter a_AB [K]
    #[arg(long = "a_AB", default_value = InputField::InteractionAB.default_text(), allow_hyphen_values = true)]
    a_ab: String,
    /// Interaction parameter a_BA [K]
    #[arg(long = "a_BA", default_value = InputField::InteractionBA.default_text(), allow_hyphen_values = true)]
    a_ba: String,
    /// UNIFAC surface-area parameter of A
    #[arg(long = "q_A", default_value = InputField::SurfaceAreaA.default_text(), allow_hyphen_values = true)]
    q_a: String,
    /// UNIFAC surface-area parameter of B
    #[arg(long = "q_B", default_value = InputField::SurfaceAreaB.default_text(), allow_hyphen_values = true)]
    q_b: String,
}

impl InputArgs {
    fn to_raw(&self) -> RawInputs {
        let mut raw = RawInputs::new();
        raw.set(InputField::MoleFractionA, &*self.x_a);
        raw.set(InputField::DiffusivityAB0, &*self.d_ab0);
        raw.set(InputField::DiffusivityBA0, &*self.d_ba0);
        raw.set(InputField::VolumeA, &*self.r_a);
        raw.set(InputField::VolumeB, &*self.r_b);
        raw.set(InputField::ExperimentalDiffusivity, &*self.d_exp);
        raw.set(InputField::Temperature, &*self.t);
        raw.set(InputField::InteractionAB, &*self.a_ab);
        raw.set(InputField::InteractionBA, &*self.a_ba);
        raw.set(InputField::SurfaceAreaA, &*self.q_a);
        raw.set(InputField::SurfaceAreaB, &*self.q_b);
        raw
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so CSV/JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Compute {
            inputs,
            breakdown,
            json,
        } => cmd_compute(&inputs, breakdown, json),
        Commands::Cases { path, json } => cmd_cases(&path, json),
        Commands::Sweep {
            inputs,
            from,
            to,
            points,
            output,
        } => cmd_sweep(&inputs, from, to, points, output.as_deref()),
        Commands::Template { path } => cmd_template(&path),
        Commands::Fields => {
            cmd_fields();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{}", err.hint());
            ExitCode::FAILURE
        }
    }
}

fn cmd_compute(inputs: &InputArgs, breakdown: bool, json: bool) -> AppResult<()> {
    let eval = evaluate_raw(&inputs.to_raw())?;

    if json {
        let text = serde_json::to_string_pretty(&eval)?;
        println!("{text}");
    } else if breakdown {
        println!("{}", format_breakdown(&eval));
    } else {
        println!("{}", format_result(&eval));
    }
    Ok(())
}

fn cmd_cases(path: &Path, json: bool) -> AppResult<()> {
    tracing::debug!(path = %path.display(), "running case file");
    let (file, runs) = case_service::run_case_file(path)?;
    let summary = BatchSummary::from_runs(&runs);

    if json {
        let text = serde_json::to_string_pretty(&serde_json::json!({
            "name": file.name,
            "runs": runs,
            "summary": summary,
        }))?;
        println!("{text}");
        return Ok(());
    }

    println!("Case file: {} ({} cases)", file.name, runs.len());
    for run in &runs {
        match (&run.evaluation, &run.error) {
            (Some(eval), _) => println!(
                "  {:<16} D_AB = {} cm²/s  error = {:.2} %",
                run.id,
                format_scientific(eval.result.d_ab, 3),
                eval.result.relative_error_percent
            ),
            (None, Some(err)) => println!("  {:<16} FAILED: {}", run.id, err),
            (None, None) => println!("  {:<16} FAILED", run.id),
        }
    }

    println!("\n{}/{} succeeded", summary.succeeded, summary.total);
    if let (Some(mean), Some(max)) = (summary.mean_error_percent, summary.max_error_percent) {
        println!("  Mean error: {:.2} %", mean);
        println!("  Max error:  {:.2} %", max);
    }
    Ok(())
}

fn cmd_sweep(
    inputs: &InputArgs,
    from: f64,
    to: f64,
    points: usize,
    output: Option<&Path>,
) -> AppResult<()> {
    let base = inputs.to_raw().parse()?;
    let sweep = SweepDefinition::new(from, to, points)?;
    let csv = run_sweep(&base, &sweep)?.to_csv();

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} sweep points to {}", points, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_template(path: &Path) -> AppResult<()> {
    let mut file = CaseFile::new("Diffusivity cases");
    file.cases.push(reference_case());
    save_case_file(path, &file)?;
    println!("✓ Wrote case file template to {}", path.display());
    Ok(())
}

fn cmd_fields() {
    println!("{:<8} {:<40} {:<6} default", "key", "description", "unit");
    for field in InputField::ALL {
        println!(
            "{:<8} {:<40} {:<6} {}",
            field.key(),
            field.label(),
            field.unit(),
            field.default_text()
        );
    }
}
