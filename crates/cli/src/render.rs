use std::fs;

use lineview_chart::chart::Chart;
use lineview_chart::data::DataSet;
use lineview_chart::html::VisLayout;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    let text = fs::read_to_string(&args.path)?;
    let sets: Vec<DataSet> = serde_json::from_str(&text)?;

    println!(
        "lineview renders {count} data sets from: `{input}` into: `{output}`",
        count = sets.len(),
        input = args.path.display(),
        output = output_path.display()
    );

    let mut chart = Chart::new(args.chart.surface());
    let frame = chart.draw(&sets, &args.chart.options());

    let vis = VisLayout::init(&output_path)?;
    vis.write_page(&frame)?;

    Ok(())
}
