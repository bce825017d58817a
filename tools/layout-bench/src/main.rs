//! Layout Benchmark CLI for Snipbar.
//!
//! Replays a diagonal selection drag across a simulated screen and runs
//! the button layout on every pointer step, the way the capture screen does.
//!
//! Usage:
//!   cargo run -- [--screen 1920x1080] [--steps 200]    Drag with the default buttons
//!   cargo run -- --config buttons.json                 Drag with a config file's buttons
//!   cargo run -- --csv                                 Per-step CSV output

use snipbar_lib::{ButtonConfig, CaptureSession, Point, Rect, Side};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

fn main() {
    snipbar_lib::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let csv = args.contains(&"--csv".to_string());

    let screen = flag_value(&args, "--screen")
        .map(|s| parse_screen(&s))
        .unwrap_or(Rect::new(0, 0, 1920, 1080));
    let steps: i32 = flag_value(&args, "--steps")
        .map(|s| {
            s.parse::<i32>().unwrap_or_else(|_| {
                eprintln!("--steps expects a number, got {}", s);
                std::process::exit(1);
            })
        })
        .unwrap_or(200)
        .max(1);

    let config = match flag_value(&args, "--config") {
        Some(path) => ButtonConfig::load(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        }),
        None => ButtonConfig::default(),
    };

    run_drag(&config, screen, steps, csv);
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    match args.get(pos + 1) {
        Some(v) => Some(v.clone()),
        None => {
            eprintln!("{} requires a value", flag);
            std::process::exit(1);
        }
    }
}

/// Parses `WIDTHxHEIGHT`.
fn parse_screen(spec: &str) -> Rect {
    let parsed = spec
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<i32>().ok()?, h.parse::<i32>().ok()?)));
    match parsed {
        Some((w, h)) if w > 0 && h > 0 => Rect::new(0, 0, w, h),
        _ => {
            eprintln!("--screen expects WIDTHxHEIGHT, got {}", spec);
            std::process::exit(1);
        }
    }
}

/// Drags from the screen center to the bottom-right corner, laying out
/// the buttons on every step.
fn run_drag(config: &ButtonConfig, screen: Rect, steps: i32, csv: bool) {
    let mut session = CaptureSession::new(config, screen);
    let anchor = screen.center();
    session.begin_selection(anchor);

    if csv {
        println!("step,x,y,width,height,top,bottom,right,left,inside,latency_us");
    }

    let mut latencies: Vec<f64> = Vec::new();
    let mut overflow_steps = 0;

    for step in 1..=steps {
        let cursor = Point::new(
            anchor.x + (screen.right() - 1 - anchor.x) * step / steps,
            anchor.y + (screen.bottom() - 1 - anchor.y) * step / steps,
        );

        let start = Instant::now();
        let selection = match session.drag_selection_to(cursor) {
            Ok(sel) => sel,
            Err(e) => {
                eprintln!("  WARNING: step {} skipped: {}", step, e);
                continue;
            }
        };
        let latency_us = start.elapsed().as_secs_f64() * 1_000_000.0;
        latencies.push(latency_us);

        let buttons = session.buttons();
        if buttons.is_overflowed_inside() {
            overflow_steps += 1;
        }

        if csv {
            let sizes: Vec<String> = Side::ALL
                .iter()
                .map(|s| buttons.group(*s).len().to_string())
                .collect();
            println!(
                "{},{},{},{},{},{},{:.1}",
                step,
                selection.x,
                selection.y,
                selection.width,
                selection.height,
                sizes.join(","),
                latency_us
            );
            std::io::stdout().flush().ok();
        }
    }
    session.finish_selection();

    if latencies.is_empty() {
        eprintln!("No layout steps ran");
        std::process::exit(1);
    }

    latencies.sort_by(|a, b| a.total_cmp(b));
    let median = latencies[latencies.len() / 2];
    let p99_idx = ((latencies.len() as f64 * 0.99).ceil() as usize).min(latencies.len() - 1);
    let p99 = latencies[p99_idx];
    let avg: f64 = latencies.iter().sum::<f64>() / latencies.len() as f64;

    eprintln!("\n--- Layout Benchmark Summary ---");
    eprintln!("  Screen:           {}x{}", screen.width, screen.height);
    eprintln!("  Buttons:          {}", session.buttons().count());
    eprintln!("  Layout steps:     {}", latencies.len());
    eprintln!("  Overflow steps:   {}", overflow_steps);
    eprintln!("  Median latency:   {:.1}us", median);
    eprintln!("  Average latency:  {:.1}us", avg);
    eprintln!("  P99 latency:      {:.1}us", p99);
    log::debug!("Final selection: {:?}", session.selection());
}
