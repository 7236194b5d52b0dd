//! Equity curve plotting
//!
//! Plotting is a side-effect sink: the shell hands a finished curve to a
//! [`CurvePlotter`] and only reports whether it succeeded.

use super::config::PlotTarget;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub trait CurvePlotter {
    /// Render `curve` (one value per time step). Confirmation messages go to `out`.
    fn plot(&self, title: &str, curve: &[f64], out: &mut dyn Write) -> Result<()>;
}

/// Build the plotter for a configured target
pub fn plotter_for(target: &PlotTarget) -> Box<dyn CurvePlotter> {
    match target {
        PlotTarget::Terminal => Box::new(TerminalPlotter::default()),
        PlotTarget::Svg(path) => Box::new(SvgPlotter::new(path.clone())),
    }
}

fn check_curve(curve: &[f64]) -> Result<(f64, f64)> {
    if curve.is_empty() {
        bail!("nothing to plot");
    }
    if curve.iter().any(|v| !v.is_finite()) {
        bail!("curve contains non-finite values");
    }

    let min = curve.iter().copied().fold(f64::INFINITY, f64::min);
    let max = curve.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

/// Position of `value` in [0, 1] within [min, max]; flat curves sit in the middle
fn scale(value: f64, min: f64, max: f64) -> f64 {
    if max - min < 1e-12 {
        0.5
    } else {
        (value - min) / (max - min)
    }
}

/// Fixed-size ASCII chart
#[derive(Debug, Clone)]
pub struct TerminalPlotter {
    pub width: usize,
    pub height: usize,
}

impl Default for TerminalPlotter {
    fn default() -> Self {
        Self { width: 60, height: 12 }
    }
}

impl TerminalPlotter {
    fn render(&self, curve: &[f64], min: f64, max: f64) -> Vec<String> {
        let height = self.height.max(2);
        let columns = curve.len().min(self.width.max(1));
        let mut grid = vec![vec![' '; columns]; height];

        for col in 0..columns {
            // Sample evenly so the last column always shows the last value
            let idx = if columns > 1 {
                col * (curve.len() - 1) / (columns - 1)
            } else {
                0
            };
            let level = (scale(curve[idx], min, max) * (height - 1) as f64).round() as usize;
            grid[height - 1 - level][col] = '*';
        }

        grid.into_iter()
            .enumerate()
            .map(|(row, cells)| {
                let label = if row == 0 {
                    format!("{:>10.4}", max)
                } else if row == height - 1 {
                    format!("{:>10.4}", min)
                } else {
                    " ".repeat(10)
                };
                format!("{} |{}", label, cells.into_iter().collect::<String>())
            })
            .collect()
    }
}

impl CurvePlotter for TerminalPlotter {
    fn plot(&self, title: &str, curve: &[f64], out: &mut dyn Write) -> Result<()> {
        let (min, max) = check_curve(curve)?;

        writeln!(out, "{}", title)?;
        for line in self.render(curve, min, max) {
            writeln!(out, "{}", line)?;
        }
        let columns = curve.len().min(self.width.max(1));
        writeln!(out, "{} +{}", " ".repeat(10), "-".repeat(columns))?;
        writeln!(out, "{}  Time: 0..{} | Value", " ".repeat(10), curve.len() - 1)?;
        Ok(())
    }
}

const SVG_WIDTH: f64 = 576.0;
const SVG_HEIGHT: f64 = 288.0;
const SVG_PADDING: f64 = 36.0;
const LINE_COLOR: &str = "#348dc1";
const AXIS_COLOR: &str = "#8c8c8c";

/// Writes the curve as a single-polyline SVG file
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    path: PathBuf,
}

impl SvgPlotter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn render(&self, title: &str, curve: &[f64], min: f64, max: f64) -> String {
        let plot_width = SVG_WIDTH - 2.0 * SVG_PADDING;
        let plot_height = SVG_HEIGHT - 2.0 * SVG_PADDING;
        let step = if curve.len() > 1 {
            plot_width / (curve.len() - 1) as f64
        } else {
            0.0
        };

        let points: Vec<String> = curve
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = SVG_PADDING + i as f64 * step;
                let y = SVG_PADDING + (1.0 - scale(v, min, max)) * plot_height;
                format!("{:.2},{:.2}", x, y)
            })
            .collect();

        let bottom = SVG_HEIGHT - SVG_PADDING;
        let right = SVG_WIDTH - SVG_PADDING;

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = SVG_WIDTH,
            h = SVG_HEIGHT
        );
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"14\" text-anchor=\"middle\">{}</text>\n",
            SVG_WIDTH / 2.0,
            SVG_PADDING / 2.0,
            escape_xml(title)
        ));
        svg.push_str(&format!(
            "<line x1=\"{p}\" y1=\"{b}\" x2=\"{r}\" y2=\"{b}\" stroke=\"{c}\"/>\n<line x1=\"{p}\" y1=\"{p}\" x2=\"{p}\" y2=\"{b}\" stroke=\"{c}\"/>\n",
            p = SVG_PADDING,
            b = bottom,
            r = right,
            c = AXIS_COLOR
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"10\" text-anchor=\"end\">{:.4}</text>\n",
            SVG_PADDING - 4.0,
            SVG_PADDING + 4.0,
            max
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"10\" text-anchor=\"end\">{:.4}</text>\n",
            SVG_PADDING - 4.0,
            bottom,
            min
        ));
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" points=\"{}\"/>\n",
            LINE_COLOR,
            points.join(" ")
        ));
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl CurvePlotter for SvgPlotter {
    fn plot(&self, title: &str, curve: &[f64], out: &mut dyn Write) -> Result<()> {
        let (min, max) = check_curve(curve)?;
        let svg = self.render(title, curve, min, max);

        std::fs::write(&self.path, svg)
            .with_context(|| format!("writing {}", self.path.display()))?;
        writeln!(out, "Equity curve written to {}", self.path.display())?;
        Ok(())
    }
}
