use crate::Sample;
use plotters::prelude::*;
use plotters::style::full_palette::*;
use plotters::style::{BLACK, WHITE};
use std::path::Path;

const PALETTE: [RGBColor; 6] = [GREEN_500, BLACK, RED_A400, AMBER_800, BLUE_A700, PURPLE_A400];
const OTHER: RGBColor = GREY_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
  Solid,
  Dashed,
}

pub struct Curve {
  pub data: Vec<Sample>,
  pub label: String,
  pub style: LineStyle,
  pub color: Option<RGBColor>,
}

impl Curve {
  pub fn new(data: Vec<Sample>, label: &str) -> Self {
    Self {
      data,
      label: label.to_string(),
      style: LineStyle::Solid,
      color: None,
    }
  }

  pub fn dashed(mut self) -> Self {
    self.style = LineStyle::Dashed;
    self
  }

  pub fn color(mut self, color: RGBColor) -> Self {
    self.color = Some(color);
    self
  }
}

pub struct Plot;

impl Plot {
  /// Min and max of x and y over every curve, widened when a range is degenerate.
  pub fn bounds(curves: &[Curve]) -> Option<((f64, f64), (f64, f64))> {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for datum in curves.iter().flat_map(|c| &c.data) {
      if !datum.x.is_finite() || !datum.y.is_finite() {
        continue;
      }
      min_x = min_x.min(datum.x);
      max_x = max_x.max(datum.x);
      min_y = min_y.min(datum.y);
      max_y = max_y.max(datum.y);
    }
    if min_x > max_x || min_y > max_y {
      return None;
    }
    if min_x == max_x {
      min_x -= 0.5;
      max_x += 0.5;
    }
    if min_y == max_y {
      min_y -= 0.5;
      max_y += 0.5;
    }
    Some(((min_x, max_x), (min_y, max_y)))
  }

  pub fn plot(curves: &[Curve], out_file: &Path, title: &str, x_label: &str, y_label: &str) -> anyhow::Result<()> {
    let ((min_x, max_x), (min_y, max_y)) =
      Self::bounds(curves).ok_or(anyhow::anyhow!("No finite data to plot"))?;
    let pad = (max_y - min_y) * 0.05;

    let root = BitMapBackend::new(out_file, (2048, 1024)).into_drawing_area();
    root
      .fill(&WHITE)
      .map_err(|e| anyhow::anyhow!("Failed to fill drawing area with white: {}", e))?;
    let mut chart = ChartBuilder::on(&root)
      .set_all_label_area_size(150)
      .margin(20)
      .caption(title, ("sans-serif", 40.0).into_font())
      .build_cartesian_2d(min_x..max_x, (min_y - pad)..(max_y + pad))
      .map_err(|e| anyhow::anyhow!("Failed to build cartesian 2d: {}", e))?;

    chart
      .configure_mesh()
      .light_line_style(WHITE)
      .label_style(("sans-serif", 30, &BLACK).into_text_style(&root))
      .x_desc(x_label)
      .y_desc(y_label)
      .y_labels(10)
      .y_label_formatter(&|y| format!("{:.2}", y))
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to draw mesh: {}", e))?;

    for (i, curve) in curves.iter().enumerate() {
      let color = curve
        .color
        .unwrap_or_else(|| PALETTE.get(i).copied().unwrap_or(OTHER));
      let style = ShapeStyle {
        color: RGBAColor::from(color),
        filled: true,
        stroke_width: 2,
      };
      let points = curve.data.iter().map(|s| (s.x, s.y));
      let drawn = match curve.style {
        LineStyle::Solid => chart.draw_series(LineSeries::new(points, style)),
        LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 12, 8, style)),
      }
      .map_err(|e| anyhow::anyhow!("Failed to draw series: {}", e))?;
      drawn.label(curve.label.as_str()).legend(move |(x, y)| {
        PathElement::new(
          [(x, y), (x + 20, y)],
          ShapeStyle {
            color: RGBAColor::from(color),
            filled: true,
            stroke_width: 4,
          },
        )
      });
    }

    chart
      .configure_series_labels()
      .position(SeriesLabelPosition::UpperRight)
      .label_font(("sans-serif", 30).into_font())
      .background_style(WHITE.mix(0.8))
      .border_style(BLACK)
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to draw legend: {}", e))?;

    root
      .present()
      .map_err(|e| anyhow::anyhow!("Failed to present root: {}", e))?;

    Ok(())
  }
}
