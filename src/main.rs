use std::path::{
    Path,
    PathBuf
};

use anyhow::{
    Context,
    Result
};
use clap::{
    Parser,
    ValueEnum
};
use tracing_subscriber::EnvFilter;

use quadbound::configuration::{
    Configuration,
    IntegrationJob,
    JobReport
};
use quadbound::integration::precisionintegrator::PrecisionIntegrator;
use quadbound::math::function::polynomial::Polynomial;
use quadbound::math::function::univariatefunction::ValueOf;
use quadbound::math::interval::Interval;
use quadbound::math::optimize::boundedmaximizer::{
    BoundedMaximizer,
    MaximizerSettings
};
use quadbound::math::optimize::brentmaximizer::BrentMaximizer;
use quadbound::math::optimize::gridsearchmaximizer::GridSearchMaximizer;
use quadbound::reference::simpsonintegrator::SimpsonIntegrator;
use quadbound::IntegrationInputBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MaximizerKind {
    Brent,
    Grid
}

/// Integrate a function to a requested absolute precision with the
/// right-endpoint rectangle rule.
#[derive(Debug, Parser)]
#[command(name = "quadbound", version)]
struct Cli {
    /// JSON file describing integrands and jobs
    #[arg(long, env = "QUADBOUND_CONFIG", conflicts_with = "coefficients")]
    config: Option<PathBuf>,

    /// Run only this job from the configuration (0-based)
    #[arg(long, requires = "config")]
    job: Option<usize>,

    /// Polynomial coefficients in ascending powers, e.g. `0,0,1` for x²
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    coefficients: Vec<f64>,

    /// Lower bound of the interval
    #[arg(long, allow_hyphen_values = true)]
    lo: Option<f64>,

    /// Upper bound of the interval
    #[arg(long, allow_hyphen_values = true)]
    hi: Option<f64>,

    /// Maximum acceptable absolute error
    #[arg(long)]
    precision: Option<f64>,

    #[arg(long, value_enum, default_value_t = MaximizerKind::Brent)]
    maximizer: MaximizerKind
}

fn make_maximizer(kind: MaximizerKind) -> Box<dyn BoundedMaximizer> {
    match kind {
        MaximizerKind::Brent => Box::new(BrentMaximizer::new()),
        MaximizerKind::Grid => Box::new(GridSearchMaximizer::new())
    }
}

fn print_report(report: &JobReport) {
    println!("Steps: {}", report.result.partitions);
    println!("My integral = {:.6}", report.result.estimate);
    match report.deviation() {
        Some(deviation) => println!("My integral - actual integral = {:.6}", deviation),
        None => {
            if let Err(error) = &report.reference {
                tracing::warn!("reference integral unavailable: {}", error);
            }
        }
    }
    if report.result.partition_estimate.is_saturated() {
        println!(
            "note: partition count capped at {}; requested precision may not be met",
            report.result.partitions
        );
    }
}

fn run_config(path: &Path, job_index: Option<usize>, kind: MaximizerKind) -> Result<()> {
    let config = Configuration::from_file(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    let integrator = PrecisionIntegrator::with_settings(make_maximizer(kind), *config.maximizer_settings());

    let jobs: Vec<&IntegrationJob> = match job_index {
        Some(index) => vec![config.job(index)?],
        None => config.jobs().iter().collect()
    };
    for (i, job) in jobs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "[{}] over [{}, {}], precision {}",
            job.integrand(),
            job.interval().lo(),
            job.interval().hi(),
            job.precision()
        );
        let report = config.run_job(job, &integrator)
            .with_context(|| format!("job '{}' failed", job.integrand()))?;
        print_report(&report);
    }
    Ok(())
}

fn run_polynomial(cli: &Cli) -> Result<()> {
    let polynomial = Polynomial::new(cli.coefficients.clone());
    let interval = match (cli.lo, cli.hi) {
        (Some(lo), Some(hi)) => Some(Interval::new(lo, hi)?),
        _ => None
    };
    let function_given = !cli.coefficients.is_empty();

    let mut builder = IntegrationInputBuilder::new()
        .interval_opt(interval)
        .precision_opt(cli.precision);
    if function_given {
        builder = builder.differentiable(&polynomial);
    }
    let input = builder.build()?;

    let integrator = PrecisionIntegrator::with_settings(make_maximizer(cli.maximizer), MaximizerSettings::default());
    let result = integrator.compute(&input)?;
    let reference = SimpsonIntegrator::default().integrate(&ValueOf::new(&polynomial), input.interval());

    let job = IntegrationJob::new(
        format!("{:?}", polynomial.coefs()),
        *input.interval(),
        input.precision()
    );
    print_report(&JobReport { job, result, reference });
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.config {
        Some(path) => run_config(path, cli.job, cli.maximizer),
        None => run_polynomial(&cli)
    }
}
