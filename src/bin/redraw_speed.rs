use std::hint::black_box;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use fast_axis::core::{AxisScale, BoundingBox, LinearLocator, NullFormatter, NullLocator, Point};
use fast_axis::render::{NullRenderer, Renderer};
use fast_axis::{AxesArtist, FastAxes, StyleSheet};
use serde::Serialize;

const DEFAULT_FRAMES: usize = 200;
const FIGURE_WIDTH: f64 = 640.0;
const FIGURE_HEIGHT: f64 = 480.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scenario {
    Vanilla,
    ManyTicks,
    Tickless,
    Log,
    Tight,
}

impl Scenario {
    const ALL: [Self; 5] = [
        Self::Vanilla,
        Self::ManyTicks,
        Self::Tickless,
        Self::Log,
        Self::Tight,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::ManyTicks => "manyticks",
            Self::Tickless => "tickless",
            Self::Log => "log",
            Self::Tight => "tight",
        }
    }

    fn parse(raw: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == raw)
            .ok_or_else(|| format!("unknown scenario `{raw}`"))
    }
}

#[derive(Debug)]
struct CliArgs {
    frames: usize,
    scenarios: Vec<Scenario>,
    png_dir: Option<PathBuf>,
    json: bool,
    log_filter: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScenarioReport {
    scenario: &'static str,
    frames: usize,
    cached_ms: f64,
    rebuilt_ms: f64,
    speedup: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    images_identical: Option<bool>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    if let Some(filter) = &args.log_filter {
        if !fast_axis::telemetry::init_tracing(filter) {
            eprintln!("warning: tracing not initialized (build with feature `telemetry`)");
        }
    }
    let mut reports = Vec::with_capacity(args.scenarios.len());
    for scenario in &args.scenarios {
        let cached = time_frames(*scenario, args.frames, false)?;
        let rebuilt = time_frames(*scenario, args.frames, true)?;
        let images_identical = match &args.png_dir {
            Some(dir) => Some(compare_images(*scenario, dir)?),
            None => None,
        };
        let cached_ms = cached.as_secs_f64() * 1000.0;
        let rebuilt_ms = rebuilt.as_secs_f64() * 1000.0;
        reports.push(ScenarioReport {
            scenario: scenario.name(),
            frames: args.frames,
            cached_ms,
            rebuilt_ms,
            speedup: if cached_ms > 0.0 {
                rebuilt_ms / cached_ms
            } else {
                0.0
            },
            images_identical,
        });
    }

    if args.json {
        let raw = serde_json::to_string_pretty(&reports)
            .map_err(|err| format!("failed to serialize report: {err}"))?;
        println!("{raw}");
    } else {
        for report in &reports {
            println!(
                "{:<10} frames={:<5} cached={:>9.3}ms rebuilt={:>9.3}ms speedup={:.2}x{}",
                report.scenario,
                report.frames,
                report.cached_ms,
                report.rebuilt_ms,
                report.speedup,
                match report.images_identical {
                    Some(true) => " images=identical",
                    Some(false) => " images=DIFFERENT",
                    None => "",
                }
            );
        }
    }

    if reports
        .iter()
        .any(|report| report.images_identical == Some(false))
    {
        return Err("cached and rebuilt renders differ".to_owned());
    }
    Ok(())
}

fn build_axes(scenario: Scenario) -> Result<FastAxes, String> {
    let bounds = BoundingBox::from_corners(
        Point::new(80.0, 48.0),
        Point::new(FIGURE_WIDTH - 64.0, FIGURE_HEIGHT - 53.0),
    );
    let mut axes = FastAxes::new(bounds, Arc::new(StyleSheet::default()))
        .map_err(|err| format!("failed to build axes: {err}"))?;

    axes.xaxis_mut()
        .set_view_interval(0.0, 100.0)
        .map_err(|err| err.to_string())?;
    axes.yaxis_mut()
        .set_view_interval(0.0, 1.0)
        .map_err(|err| err.to_string())?;

    match scenario {
        Scenario::Vanilla | Scenario::Tight => {}
        Scenario::ManyTicks => {
            axes.xaxis_mut().set_minor_locator(LinearLocator::new(40));
            axes.yaxis_mut().set_minor_locator(LinearLocator::new(40));
        }
        Scenario::Tickless => {
            axes.xaxis_mut().set_major_locator(NullLocator);
            axes.xaxis_mut()
                .set_major_formatter(Some(Box::new(NullFormatter)));
            axes.yaxis_mut().set_major_locator(NullLocator);
            axes.yaxis_mut()
                .set_major_formatter(Some(Box::new(NullFormatter)));
        }
        Scenario::Log => {
            let yaxis = axes.yaxis_mut();
            yaxis
                .set_view_interval(1.0, 1.0e6)
                .map_err(|err| err.to_string())?;
            yaxis
                .set_scale(AxisScale::Log10)
                .map_err(|err| err.to_string())?;
        }
    }
    axes.xaxis_mut().set_label_text("time [s]");
    axes.yaxis_mut().set_label_text("signal");
    Ok(axes)
}

/// Pans the x view one unit per frame, as an interactive drag would.
fn pan(axes: &mut FastAxes, frame: usize) -> Result<(), String> {
    let start = (frame % 100) as f64;
    axes.xaxis_mut()
        .set_view_interval(start, start + 100.0)
        .map_err(|err| err.to_string())
}

fn render_frame(
    scenario: Scenario,
    axes: &mut FastAxes,
    renderer: &mut dyn Renderer,
    rebuild: bool,
) -> Result<(), String> {
    if rebuild {
        axes.reset_ticks();
    }
    if scenario == Scenario::Tight {
        black_box(axes.tight_bbox(renderer).map_err(|err| err.to_string())?);
    }
    axes.draw(renderer).map_err(|err| err.to_string())
}

fn time_frames(scenario: Scenario, frames: usize, rebuild: bool) -> Result<Duration, String> {
    let mut axes = build_axes(scenario)?;
    let mut renderer = NullRenderer::default();
    let started = Instant::now();
    for frame in 0..frames {
        pan(&mut axes, frame)?;
        render_frame(scenario, &mut axes, &mut renderer, rebuild)?;
    }
    Ok(started.elapsed())
}

#[cfg(feature = "cairo-backend")]
fn compare_images(scenario: Scenario, dir: &std::path::Path) -> Result<bool, String> {
    use fast_axis::render::{CairoRenderer, pixels_identical};

    std::fs::create_dir_all(dir)
        .map_err(|err| format!("failed to create `{}`: {err}", dir.display()))?;

    let mut rendered = Vec::with_capacity(2);
    for (suffix, rebuild) in [("cached", false), ("rebuilt", true)] {
        let mut axes = build_axes(scenario)?;
        let mut renderer = CairoRenderer::new(FIGURE_WIDTH as i32, FIGURE_HEIGHT as i32)
            .map_err(|err| err.to_string())?;
        // several frames so the cached run draws with reused artists
        for frame in 0..3 {
            renderer.clear().map_err(|err| err.to_string())?;
            pan(&mut axes, frame)?;
            render_frame(scenario, &mut axes, &mut renderer, rebuild)?;
        }
        let path = dir.join(format!("{}_{suffix}.png", scenario.name()));
        renderer.write_png(&path).map_err(|err| err.to_string())?;
        rendered.push(renderer);
    }

    match rendered.as_slice() {
        [cached, rebuilt] => pixels_identical(cached, rebuilt).map_err(|err| err.to_string()),
        _ => Err("expected two renders".to_owned()),
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn compare_images(_scenario: Scenario, _dir: &std::path::Path) -> Result<bool, String> {
    Err("--png-dir requires feature `cairo-backend`".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut frames = DEFAULT_FRAMES;
    let mut scenarios = Vec::new();
    let mut png_dir = None;
    let mut json = false;
    let mut log_filter = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --frames".to_owned())?;
                frames = value
                    .parse()
                    .map_err(|err| format!("invalid --frames `{value}`: {err}"))?;
            }
            "--scenario" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scenario".to_owned())?;
                scenarios.push(Scenario::parse(&value)?);
            }
            "--png-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png-dir".to_owned())?;
                png_dir = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            "--log" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --log".to_owned())?;
                log_filter = Some(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    if scenarios.is_empty() {
        scenarios.extend(Scenario::ALL);
    }
    Ok(CliArgs {
        frames,
        scenarios,
        png_dir,
        json,
        log_filter,
    })
}

fn usage_message() -> String {
    let names: Vec<&str> = Scenario::ALL.iter().map(|scenario| scenario.name()).collect();
    format!(
        "Usage: cargo run --release --bin redraw_speed -- [options]\n\nOptions:\n  --frames <n>         Frames per run (default: {DEFAULT_FRAMES})\n  --scenario <name>    One of: {} (repeatable; default: all)\n  --png-dir <path>     Write cached/rebuilt PNGs and compare pixels (feature `cairo-backend`)\n  --json               Print the report as JSON\n  --log <filter>       Enable tracing with this filter (feature `telemetry`)\n  -h, --help           Show this message",
        names.join(", ")
    )
}
