//! The graph monitor: sample a simulated ramp, then display it.
//!
//! [`run`] drives the whole session. It first runs the tick-driven sampling
//! loop to completion on the wall clock (about 10.2 seconds with the default
//! tick), then opens an interactive plot window showing the trace as a single
//! blue line, with the horizontal axis centered on the final counter value.
//! The window stays open until the operator either closes it or acknowledges
//! on standard input.

use std::{io, sync::mpsc, thread};

use graphmon_core::{RampSampler, RampTrace, SystemClock};
use graphmon_plot::{Color32, PlotApp, ShowConfig};

/// Half-width of the horizontal viewing window, in counter units.
const AXIS_HALF_WIDTH: f64 = 50.0;

/// Returns the horizontal axis range centered on the final counter value,
/// clamped at zero on the left.
///
/// The center is the counter value at loop exit, which sits one past the last
/// sampled value. The monitor has always centered its view there, so the
/// window is kept half a step right of the trace end rather than recentered.
#[must_use]
pub fn axis_window(final_count: u32) -> (f64, f64) {
    let center = f64::from(final_count);
    ((center - AXIS_HALF_WIDTH).max(0.0), center + AXIS_HALF_WIDTH)
}

/// Samples the ramp on the wall clock and displays the resulting trace.
///
/// Blocks for the full sampling run, then again while the plot window is
/// open. A line on standard input (content discarded) closes the window and
/// ends the session.
///
/// # Errors
///
/// Returns an error if the native plot window cannot be created.
pub fn run() -> Result<(), eframe::Error> {
    let mut clock = SystemClock;
    let trace = RampSampler::default().sample(&mut clock);

    show_trace(&trace)
}

fn show_trace(trace: &RampTrace) -> Result<(), eframe::Error> {
    let (lo, hi) = axis_window(trace.final_count());

    let (ack_tx, ack_rx) = mpsc::channel();
    thread::spawn(move || {
        println!("Press Enter to close the monitor");
        let mut ack = String::new();
        // Content is discarded; any line (or EOF) acknowledges.
        let _ = io::stdin().read_line(&mut ack);
        let _ = ack_tx.send(());
    });

    PlotApp::new()
        .add_series("ramp", &trace.series().points())
        .show(
            ShowConfig::new()
                .title("Graph monitor")
                .x_bounds(lo, hi)
                .line_color(Color32::BLUE)
                .close_on(ack_rx),
        )
}
