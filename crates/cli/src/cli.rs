use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use lineview_chart::chart::ChartOptions;
use lineview_chart::chart::Surface;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the data sets from a JSON file into an interactive chart page.
    Render(RenderArgs),

    /// Render a few synthetic data sets into an interactive chart page.
    Demo(DemoArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the path of the JSON file holding the data sets: an array
    /// of objects with a `label` and a `data` array of `x`/`y` samples,
    /// where `x` is seconds since the Unix epoch.
    #[arg(short, long, value_parser(parse_file_path))]
    pub(crate) path: PathBuf,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir_path))]
    pub(crate) output_path: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) chart: ChartArgs,
}

#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// The number of synthetic data sets to generate.
    #[arg(short, long, default_value_t = 3)]
    pub(crate) sets: usize,

    #[command(flatten)]
    pub(crate) chart: ChartArgs,
}

#[derive(Args)]
pub(crate) struct ChartArgs {
    /// The width of the drawing surface, in pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub(crate) width: f64,

    /// The height of the drawing surface, in pixels.
    #[arg(long, default_value_t = 720.0)]
    pub(crate) height: f64,

    /// Draw every series over the full surface height instead of giving
    /// each one its own horizontal band.
    #[arg(long)]
    pub(crate) stack: bool,

    /// Hide the per-series labels.
    #[arg(long)]
    pub(crate) hide_labels: bool,

    /// Scale every series against the global y range instead of its own.
    #[arg(long)]
    pub(crate) global_scale: bool,
}

impl ChartArgs {
    pub(crate) fn surface(&self) -> Surface {
        Surface::new(self.width, self.height)
    }

    pub(crate) fn options(&self) -> ChartOptions {
        ChartOptions {
            stack_charts: self.stack,
            show_labels: !self.hide_labels,
            normalize: !self.global_scale,
        }
    }
}

fn parse_file_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to a file.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_dir_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
