// Bar chart rendering for emotion counts.
use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::nlp::sentiment::Polarity;

const GRAY: RGBColor = RGBColor(128, 128, 128);

pub fn color_for(polarity: Polarity) -> RGBColor {
    match polarity {
        Polarity::Positive => GREEN,
        Polarity::Negative => RED,
        Polarity::Neutral => GRAY,
    }
}

/// Renders one bar per emotion, in encounter order, colored by polarity.
/// Non-empty counts also get a horizontal line at the mean count with a
/// legend entry. Empty counts produce an empty axes frame; the caller is
/// responsible for telling the user nothing was found.
pub fn render(counts: &[(String, usize)], polarities: &[Polarity], output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let x_max = counts.len().max(1) as i32;
    let y_max = (max_count.max(1) as f64) * 1.2;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Emotion Frequency", ("sans-serif", 40))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 100)
        .build_cartesian_2d(0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Count")
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_label_formatter(&|x| {
            let idx = *x as usize;
            if idx < counts.len() {
                counts[idx].0.clone()
            } else {
                String::new()
            }
        })
        .x_labels(counts.len().max(1))
        .label_style(("sans-serif", 14))
        .x_label_style(
            ("sans-serif", 16)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
        Rectangle::new(
            [(i as i32, 0.0), (i as i32 + 1, *count as f64)],
            color_for(polarities[i]).mix(0.85).filled(),
        )
    }))?;

    if !counts.is_empty() {
        let average =
            counts.iter().map(|(_, c)| *c as f64).sum::<f64>() / counts.len() as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0, average), (x_max, average)],
                BLUE.stroke_width(2),
            )))?
            .label(format!("Average: {:.2}", average))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.filled())
            .border_style(BLACK)
            .draw()?;
    }

    root.present()
        .with_context(|| format!("failed to write chart to {}", output_path.display()))?;
    Ok(())
}
