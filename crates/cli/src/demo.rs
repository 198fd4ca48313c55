use lineview_chart::chart::Chart;
use lineview_chart::data::DataPoint;
use lineview_chart::data::DataSet;
use lineview_chart::html::VisLayout;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::DemoArgs;
use crate::cli::PathExt;
use crate::error::CliError;

const NAMES: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];

const DAY_SECONDS: f64 = 86_400.0;
const START_EPOCH: f64 = 1_704_067_200.0; // 2024-01-01T00:00:00Z
const DAYS: usize = 120;

pub(crate) fn demo(args: DemoArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let sets = synthetic_sets(args.sets);

    println!(
        "lineview renders {count} synthetic data sets into: `{output}`",
        count = sets.len(),
        output = output_path.display()
    );

    let mut chart = Chart::new(args.chart.surface());
    let frame = chart.draw(&sets, &args.chart.options());

    let vis = VisLayout::init(&output_path)?;
    vis.write_page(&frame)?;

    Ok(())
}

/// Random-walk series resembling daily closing prices.
fn synthetic_sets(count: usize) -> Vec<DataSet> {
    let mut rng = StdRng::from_os_rng();

    (0..count)
        .map(|index| {
            let label = if index < NAMES.len() {
                String::from(NAMES[index])
            } else {
                format!("series-{index}")
            };

            let mut value: f64 = rng.random_range(50.0..250.0);
            let data = (0..DAYS)
                .map(|day| {
                    value += rng.random_range(-5.0..5.0);
                    DataPoint::new(START_EPOCH + day as f64 * DAY_SECONDS, value)
                })
                .collect();

            DataSet::new(label, data)
        })
        .collect()
}
