//! Charts for the aggregated batch results.

use anyhow::Result;
use hearth_core::aggregate::{
    AggregateBreakdown, CohortAverage, ElectricityAggregate, TotalEnergyAggregate,
};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Display;

const PALETTE: [RGBColor; 16] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
    RGBColor(174, 199, 232),
    RGBColor(255, 187, 120),
    RGBColor(152, 223, 138),
    RGBColor(255, 152, 150),
    RGBColor(197, 176, 213),
    RGBColor(196, 156, 148),
];

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const LINE_COLOR: RGBColor = RGBColor(214, 39, 40);

/// Draws both charts into `output_dir`.
pub fn generate_all_plots(
    output_dir: &str,
    electricity: &ElectricityAggregate,
    total_energy: &TotalEnergyAggregate,
    cohorts: &[CohortAverage],
) -> Result<()> {
    println!("[Plotting] Generating charts from aggregated results...");

    plot_energy_breakdowns(output_dir, electricity, total_energy)?;

    if cohorts.is_empty() {
        println!(
            "[Plotting] Warning: no household has both a year bucket and square footage; \
             skipping year-built chart."
        );
    } else {
        plot_energy_by_year_built(output_dir, cohorts)?;
    }

    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

/// Two pie charts side by side: electricity by category and total energy by
/// category and fuel.
fn plot_energy_breakdowns(
    output_dir: &str,
    electricity: &ElectricityAggregate,
    total_energy: &TotalEnergyAggregate,
) -> Result<()> {
    let path = format!("{}/energy_breakdowns.png", output_dir);
    let root = BitMapBackend::new(&path, (1800, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally(900);
    draw_pie(&left, "Annual Electricity Consumption Breakdown (kWh)", electricity)?;
    draw_pie(&right, "Annual Total Energy Consumption Breakdown (BTU)", total_energy)?;

    root.present()?;
    Ok(())
}

fn draw_pie<K: Ord + Copy + Display>(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    aggregate: &AggregateBreakdown<K>,
) -> Result<()> {
    let area = area.titled(title, ("sans-serif", 28).into_font())?;
    let (width, height) = area.dim_in_pixel();
    let entries = aggregate.positive_entries();

    if entries.is_empty() {
        area.draw(&Text::new(
            "No data available",
            (width as i32 / 2 - 90, height as i32 / 2),
            ("sans-serif", 24).into_font(),
        ))?;
        return Ok(());
    }

    let sizes: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
    let labels: Vec<String> = entries.iter().map(|(key, _)| key.to_string()).collect();
    let colors: Vec<RGBColor> = (0..entries.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

    // Leave the bottom strip for the legend.
    let legend_height = 22 * entries.len() as i32;
    let center = (width as i32 / 2, (height as i32 - legend_height) / 2 + 10);
    let radius = f64::from((height as i32 - legend_height).min(width as i32)) * 0.32;

    let mut pie = Pie::new(&center, &radius, &sizes[..], &colors[..], &labels[..]);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
    area.draw(&pie)?;

    let legend_top = height as i32 - legend_height - 10;
    for (i, (label, color)) in labels.iter().zip(&colors).enumerate() {
        let y = legend_top + 22 * i as i32;
        area.draw(&Rectangle::new([(30, y), (48, y + 16)], color.filled()))?;
        area.draw(&Text::new(label.as_str(), (56, y), ("sans-serif", 16).into_font()))?;
    }
    Ok(())
}

/// Bars of average square footage per year bucket on the left axis and a
/// line of average energy use on the right axis.
fn plot_energy_by_year_built(output_dir: &str, cohorts: &[CohortAverage]) -> Result<()> {
    let path = format!("{}/energy_by_year_built.png", output_dir);
    let root = BitMapBackend::new(&path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let buckets = cohorts.len() as u32;
    let max_sq_ft = cohorts.iter().map(|c| c.average_sq_ft).fold(0.0, f64::max);
    let max_btu = cohorts.iter().map(|c| c.average_btu_millions).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Home Size and Energy Use by Year Built / Moved In",
            ("sans-serif", 32).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .right_y_label_area_size(70)
        .build_cartesian_2d((0u32..buckets).into_segmented(), 0f64..max_sq_ft * 1.15 + 1.0)?
        .set_secondary_coord((0u32..buckets).into_segmented(), 0f64..max_btu * 1.15 + 0.1);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(cohorts.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => cohorts
                .get(*i as usize)
                .map(|c| c.bucket.label().to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_desc("Year built (owners) / moved in (renters)")
        .y_desc("Average square footage")
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Average energy use (million BTU/year)")
        .draw()?;

    chart
        .draw_series(cohorts.iter().enumerate().map(|(i, cohort)| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), cohort.average_sq_ft),
                ],
                BAR_COLOR.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?
        .label("Average square footage")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BAR_COLOR.filled()));

    chart
        .draw_secondary_series(LineSeries::new(
            cohorts
                .iter()
                .enumerate()
                .map(|(i, c)| (SegmentValue::CenterOf(i as u32), c.average_btu_millions)),
            LINE_COLOR.stroke_width(3),
        ))?
        .label("Average energy use (million BTU)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.filled()));

    chart.draw_secondary_series(cohorts.iter().enumerate().map(|(i, c)| {
        Circle::new(
            (SegmentValue::CenterOf(i as u32), c.average_btu_millions),
            5,
            LINE_COLOR.filled(),
        )
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
