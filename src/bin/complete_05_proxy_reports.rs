use colored::Colorize;
use std::cell::{Cell, OnceCell};
use std::thread;
use std::time::{Duration, Instant};

// Stand-in for a slow disk or network fetch.
const LOAD_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Milestone 1: The report capability and the real, expensive report
// =============================================================================

pub trait Report {
    fn name(&self) -> &str;
    fn view(&self) -> String;
}

pub struct RealReport {
    name: String,
}

impl RealReport {
    /// Loading is the expensive part; constructing a `RealReport` always
    /// pays for it up front.
    pub fn load(name: impl Into<String>, delay: Duration) -> Self {
        let name = name.into();
        println!("Loading report: {name}");
        thread::sleep(delay);
        Self { name }
    }
}

impl Report for RealReport {
    fn name(&self) -> &str {
        &self.name
    }

    fn view(&self) -> String {
        format!("Displaying report: {}", self.name)
    }
}

// =============================================================================
// Milestone 2: The lazy proxy
// =============================================================================

/// Fronts a `RealReport` that does not exist until the first view.
/// Later views reuse the already-loaded report.
pub struct ReportProxy {
    name: String,
    load_delay: Duration,
    real: OnceCell<RealReport>,
    loads: Cell<u32>,
}

impl ReportProxy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_load_delay(name, LOAD_DELAY)
    }

    pub fn with_load_delay(name: impl Into<String>, load_delay: Duration) -> Self {
        Self {
            name: name.into(),
            load_delay,
            real: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }

    /// How many times the real report was actually loaded.
    pub fn load_count(&self) -> u32 {
        self.loads.get()
    }
}

impl Report for ReportProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn view(&self) -> String {
        self.real
            .get_or_init(|| {
                self.loads.set(self.loads.get() + 1);
                RealReport::load(self.name.clone(), self.load_delay)
            })
            .view()
    }
}

// =============================================================================
// Milestone 3: Viewing through the proxy
// =============================================================================

fn timed_view(report: &dyn Report) {
    let started = Instant::now();
    let output = report.view();
    println!("{output}");
    println!("{}", format!("(took {} ms)", started.elapsed().as_millis()).yellow());
}

fn main() {
    let report = ReportProxy::new("Annual_Report_2024.pdf");
    println!("{}", "Report created, but not loaded yet...".green());

    println!("\n{}", "=== First View ===".bold().cyan());
    timed_view(&report);

    println!("\n{}", "=== Second View (already loaded) ===".bold().cyan());
    timed_view(&report);

    println!(
        "\nThe report was loaded {} time(s) across both views",
        report.load_count()
    );
}
