//! Interactive line-plot viewer for sampled traces.
//!
//! Build a [`PlotApp`] from one or more named series, describe how the window
//! should look with a [`ShowConfig`], and call [`PlotApp::show`] to open a
//! native window. The window stays open until the user closes it or a
//! configured close signal arrives.

use std::{sync::mpsc::Receiver, time::Duration};

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

pub use eframe::egui::Color32;

/// A runnable egui application for plotting data.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

/// Configuration for how a [`PlotApp`] window is rendered.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_bounds: Option<(f64, f64)>,
    line_color: Option<Color32>,
    close_on: Option<Receiver<()>>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend,
    /// auto-fitted axes, per-series default colors, no close signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            x_bounds: None,
            line_color: None,
            close_on: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Pins the horizontal axis to `[lo, hi]` when the window opens.
    ///
    /// The vertical axis is fitted to the data. Only the initial view is
    /// pinned; the user can still pan and zoom afterwards.
    #[must_use]
    pub fn x_bounds(mut self, lo: f64, hi: f64) -> Self {
        self.x_bounds = Some((lo, hi));
        self
    }

    /// Draws every series in the given color instead of the theme defaults.
    #[must_use]
    pub fn line_color(mut self, color: Color32) -> Self {
        self.line_color = Some(color);
        self
    }

    /// Closes the window when a message arrives on `rx`.
    #[must_use]
    pub fn close_on(mut self, rx: Receiver<()>) -> Self {
        self.close_on = Some(rx);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named series of `[x, y]` points to the plot.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.to_vec(),
        });

        self
    }

    /// Opens a native window displaying all series as lines.
    ///
    /// Blocks until the window is closed, either by the user or by the
    /// configured close signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(ViewerApp {
                    series: self.series,
                    config,
                    bounds_applied: false,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders the series.
struct ViewerApp {
    series: Vec<Series>,
    config: ShowConfig,
    bounds_applied: bool,
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rx) = &self.config.close_on {
            if rx.try_recv().is_ok() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            // Keep polling the signal even while the window is idle.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let pin_bounds = if self.bounds_applied {
            None
        } else {
            self.bounds_applied = true;
            self.config.x_bounds
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("graphmon-plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                if let Some((lo, hi)) = pin_bounds {
                    let (y_lo, y_hi) = vertical_extent(&self.series);
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([lo, y_lo], [hi, y_hi]));
                }

                for series in &self.series {
                    let points: PlotPoints = series.points.iter().copied().collect();
                    let mut line = Line::new(points).name(&series.name);
                    if let Some(color) = self.config.line_color {
                        line = line.color(color);
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}

/// Returns a vertical range that fits every point, padded by 5% of the span.
///
/// Falls back to `(0, 1)` when there are no points, and pads a flat trace by
/// one unit so it does not collapse to a zero-height view.
fn vertical_extent(series: &[Series]) -> (f64, f64) {
    let ys = series.iter().flat_map(|s| s.points.iter().map(|p| p[1]));

    let (lo, hi) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });

    if lo > hi {
        return (0.0, 1.0);
    }

    let margin = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - margin, hi + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn series(points: &[[f64; 2]]) -> Series {
        Series {
            name: "test".to_string(),
            points: points.to_vec(),
        }
    }

    #[test]
    fn add_series_stores_points_in_order() {
        let app = PlotApp::new()
            .add_series("a", &[[0.0, 1.0], [1.0, 2.0]])
            .add_series("b", &[[0.0, 3.0]]);

        assert_eq!(app.series.len(), 2);
        assert_eq!(app.series[0].name, "a");
        assert_eq!(app.series[0].points, [[0.0, 1.0], [1.0, 2.0]]);
        assert_eq!(app.series[1].name, "b");
        assert_eq!(app.series[1].points, [[0.0, 3.0]]);
    }

    #[test]
    fn config_defaults_are_unset() {
        let config = ShowConfig::new();

        assert!(config.title.is_none());
        assert!(!config.legend);
        assert!(config.x_bounds.is_none());
        assert!(config.line_color.is_none());
        assert!(config.close_on.is_none());
    }

    #[test]
    fn config_builders_set_each_field() {
        let (_tx, rx) = std::sync::mpsc::channel();
        let config = ShowConfig::new()
            .title("Trace")
            .legend()
            .x_bounds(52.0, 152.0)
            .line_color(Color32::BLUE)
            .close_on(rx);

        assert_eq!(config.title.as_deref(), Some("Trace"));
        assert!(config.legend);
        assert_eq!(config.x_bounds, Some((52.0, 152.0)));
        assert_eq!(config.line_color, Some(Color32::BLUE));
        assert!(config.close_on.is_some());
    }

    #[test]
    fn vertical_extent_pads_by_five_percent_of_span() {
        let all = [series(&[[0.0, 10.0], [1.0, 110.0]])];
        let (lo, hi) = vertical_extent(&all);

        assert_relative_eq!(lo, 5.0);
        assert_relative_eq!(hi, 115.0);
    }

    #[test]
    fn vertical_extent_spans_all_series() {
        let all = [series(&[[0.0, 0.0]]), series(&[[0.0, 100.0]])];
        let (lo, hi) = vertical_extent(&all);

        assert_relative_eq!(lo, -5.0);
        assert_relative_eq!(hi, 105.0);
    }

    #[test]
    fn vertical_extent_of_a_flat_trace_keeps_some_height() {
        let all = [series(&[[0.0, 7.0], [1.0, 7.0]])];
        let (lo, hi) = vertical_extent(&all);

        assert_relative_eq!(lo, 6.0);
        assert_relative_eq!(hi, 8.0);
    }

    #[test]
    fn vertical_extent_without_points_falls_back_to_unit_range() {
        assert_eq!(vertical_extent(&[]), (0.0, 1.0));
    }
}
