use clap::{Parser, Subcommand, ValueEnum};

use riskviz::chart::Outcome;
use riskviz::mode::{self, ArtifactPaths};
use riskviz::output::print_error;

#[derive(Parser)]
#[command(
    name = "riskviz",
    version,
    about = "Credit risk dashboard chart spec builder (risk radar and amortization donut)",
    after_help = "Examples:
  riskviz radar --metrics 82,64,91,38,75 --outcome approved
  riskviz radar --metrics 82,64,91,38,75 --outcome rejected --image risk.png
  riskviz amortization --principal 15000 --interest 3240 --outcome approved --spec loan.json
  riskviz dashboard --metrics 70,55,85,45,60 --principal 24000 --interest 5160 \\
      --outcome rejected --spec page.json
  riskviz --no-color radar --metrics 10,20,30,40,50 --outcome rejected"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build the five-axis risk profile radar spec
    Radar(RadarArgs),
    /// Build the principal/interest amortization donut spec
    Amortization(AmortizationArgs),
    /// Build both dashboard charts in one pass
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
struct RadarArgs {
    /// Metric scores for LIQUIDITY, TENURE, HISTORY, DTI, STABILITY (comma separated)
    #[arg(long, value_delimiter = ',', required = true, value_name = "SCORES")]
    metrics: Vec<f64>,

    /// Credit decision driving the accent color
    #[arg(long, value_enum)]
    outcome: OutcomeArg,

    /// Target chart container on the dashboard page
    #[arg(long, default_value = mode::RADAR_ELEMENT)]
    element: String,

    /// Write the chart spec as JSON
    #[arg(long, value_name = "PATH")]
    spec: Option<String>,

    /// Render a PNG preview of the chart
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Render a standalone HTML preview page
    #[arg(long, value_name = "PATH")]
    html: Option<String>,
}

#[derive(Parser)]
struct AmortizationArgs {
    /// Principal amount (first segment)
    #[arg(long)]
    principal: f64,

    /// Estimated interest amount (second segment)
    #[arg(long)]
    interest: f64,

    /// Credit decision driving the accent color
    #[arg(long, value_enum)]
    outcome: OutcomeArg,

    /// Target chart container on the dashboard page
    #[arg(long, default_value = mode::DONUT_ELEMENT)]
    element: String,

    /// Write the chart spec as JSON
    #[arg(long, value_name = "PATH")]
    spec: Option<String>,

    /// Render a PNG preview of the chart
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Render a standalone HTML preview page
    #[arg(long, value_name = "PATH")]
    html: Option<String>,
}

#[derive(Parser)]
struct DashboardArgs {
    /// Metric scores for LIQUIDITY, TENURE, HISTORY, DTI, STABILITY (comma separated)
    #[arg(long, value_delimiter = ',', required = true, value_name = "SCORES")]
    metrics: Vec<f64>,

    /// Principal amount (first donut segment)
    #[arg(long)]
    principal: f64,

    /// Estimated interest amount (second donut segment)
    #[arg(long)]
    interest: f64,

    /// Credit decision driving the accent color
    #[arg(long, value_enum)]
    outcome: OutcomeArg,

    /// Write both chart specs as one JSON bundle keyed by element id
    #[arg(long, value_name = "PATH")]
    spec: Option<String>,
}

/// Credit decision as a CLI value.
#[derive(Clone, Copy, ValueEnum)]
enum OutcomeArg {
    Approved,
    Rejected,
}

impl From<OutcomeArg> for Outcome {
    fn from(arg: OutcomeArg) -> Outcome {
        match arg {
            OutcomeArg::Approved => Outcome::Approved,
            OutcomeArg::Rejected => Outcome::Rejected,
        }
    }
}

/// Reject artifact paths pointing into directories that do not exist.
fn check_artifact_path(path: Option<&str>) {
    use std::path::Path;

    if let Some(path) = path
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    match &args.command {
        Command::Radar(radar) => {
            check_artifact_path(radar.spec.as_deref());
            check_artifact_path(radar.image.as_deref());
            check_artifact_path(radar.html.as_deref());

            mode::run_radar(
                &radar.element,
                &radar.metrics,
                radar.outcome.into(),
                args.quiet,
                &ArtifactPaths {
                    spec: radar.spec.as_deref(),
                    image: radar.image.as_deref(),
                    html: radar.html.as_deref(),
                },
            );
        }
        Command::Amortization(loan) => {
            check_artifact_path(loan.spec.as_deref());
            check_artifact_path(loan.image.as_deref());
            check_artifact_path(loan.html.as_deref());

            mode::run_amortization(
                &loan.element,
                loan.principal,
                loan.interest,
                loan.outcome.into(),
                args.quiet,
                &ArtifactPaths {
                    spec: loan.spec.as_deref(),
                    image: loan.image.as_deref(),
                    html: loan.html.as_deref(),
                },
            );
        }
        Command::Dashboard(dash) => {
            check_artifact_path(dash.spec.as_deref());

            mode::run_dashboard(
                &dash.metrics,
                dash.principal,
                dash.interest,
                dash.outcome.into(),
                args.quiet,
                dash.spec.as_deref(),
            );
        }
    }
}
