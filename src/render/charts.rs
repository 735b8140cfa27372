use crate::model::Comparison;
use plotters::prelude::*;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

/// Matplotlib default cycle: parallel, sequential, speedup.
const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
];

/// 10in x 6in at 100 dpi.
const CHART_SIZE: (u32, u32) = (1000, 600);

const MARKER_SIZE: i32 = 3;

/// Render both time series as a line-and-marker chart.
pub fn render_time_chart(cmp: &Comparison, path: &str) -> anyhow::Result<()> {
    let parallel: Vec<(u64, f64)> = cmp
        .iterations
        .iter()
        .copied()
        .zip(cmp.parallel_secs.iter().copied())
        .collect();
    let sequential: Vec<(u64, f64)> = cmp
        .iterations
        .iter()
        .copied()
        .zip(cmp.sequential_secs.iter().copied())
        .collect();

    let x_end = cmp.max_iterations() + cmp.max_iterations() / 20 + 1;
    let y_end = cmp.max_seconds() * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Execution Time: Parallel vs Sequential", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_end, 0.0..y_end)?;

    chart
        .configure_mesh()
        .x_desc("Number of Iterations")
        .y_desc("Execution Time (seconds)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            parallel.iter().copied(),
            COLOURS[0].stroke_width(2),
        ))?
        .label("Parallel")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &COLOURS[0]));
    chart.draw_series(
        parallel
            .iter()
            .map(|&(n, t)| Circle::new((n, t), MARKER_SIZE, COLOURS[0].filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            sequential.iter().copied(),
            COLOURS[1].stroke_width(2),
        ))?
        .label("Sequential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &COLOURS[1]));
    chart.draw_series(
        sequential
            .iter()
            .map(|&(n, t)| Circle::new((n, t), MARKER_SIZE, COLOURS[1].filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the speedup series against the same x-axis.
pub fn render_speedup_chart(cmp: &Comparison, path: &str) -> anyhow::Result<()> {
    let speedup: Vec<(u64, f64)> = cmp
        .iterations
        .iter()
        .copied()
        .zip(cmp.speedup.iter().copied())
        .collect();

    let x_end = cmp.max_iterations() + cmp.max_iterations() / 20 + 1;
    let y_end = cmp.max_speedup() * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Parallel Speedup over Sequential", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_end, 0.0..y_end)?;

    chart
        .configure_mesh()
        .x_desc("Number of Iterations")
        .y_desc("Speedup")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            speedup.iter().copied(),
            COLOURS[2].stroke_width(2),
        ))?
        .label("Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &COLOURS[2]));
    chart.draw_series(
        speedup
            .iter()
            .map(|&(n, s)| Circle::new((n, s), MARKER_SIZE, COLOURS[2].filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
