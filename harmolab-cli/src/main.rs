//! Harmolab CLI — terminal host for the harmonic/noise/filter explorer.
//!
//! Two modes:
//! - one-shot (default): apply the startup flags, print a render summary,
//!   optionally dump the series as CSV
//! - `--interactive`: a line-command loop where each command maps to one
//!   controller event and every cycle prints a fresh summary + sparkline
//!
//! The widget and plotting layers live elsewhere; this host stands in for
//! them with stdin commands and terminal output.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};

use harmolab_core::dsp;
use harmolab_core::grid::TimeGrid;
use harmolab_engine::{ControlEvent, Controller, FilterKind, Parameters, RenderPayload};

#[derive(Debug, Default)]
struct Args {
    help: bool,
    interactive: bool,
    duration_secs: Option<f64>,
    sample_rate: Option<f64>,
    amplitude: Option<f64>,
    frequency: Option<f64>,
    phase: Option<f64>,
    noise_mean: Option<f64>,
    noise_var: Option<f64>,
    cutoff: Option<f64>,
    order: Option<u32>,
    filter: Option<String>,
    no_noise: bool,
    seed: Option<u64>,
    csv: Option<String>,
}

fn parse_args() -> Args {
    let mut a = Args::default();
    for s in std::env::args().skip(1) {
        if s == "--help" || s == "-h"  { a.help = true; continue; }
        if s == "--interactive"        { a.interactive = true; continue; }
        if s == "--no-noise"           { a.no_noise = true; continue; }
        if let Some(rest) = s.strip_prefix("--duration=")    { a.duration_secs = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--sample-rate=") { a.sample_rate   = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--amplitude=")   { a.amplitude    = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--frequency=")   { a.frequency    = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--phase=")       { a.phase        = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--noise-mean=")  { a.noise_mean   = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--noise-var=")   { a.noise_var    = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--cutoff=")      { a.cutoff       = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--order=")       { a.order        = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--filter=")      { a.filter       = Some(rest.to_string()); continue; }
        if let Some(rest) = s.strip_prefix("--seed=")        { a.seed         = rest.parse().ok(); continue; }
        if let Some(rest) = s.strip_prefix("--csv=")         { a.csv          = Some(rest.to_string()); continue; }
        eprintln!("[warn] unknown arg: {s}");
    }
    a
}

fn print_usage() {
    println!("harmolab — harmonic signal / noise / low-pass explorer\n");
    println!("  --duration=SECS      grid duration (default 10.0)");
    println!("  --sample-rate=HZ     grid sampling rate (default 100.0)");
    println!("  --amplitude=A        startup amplitude   (0.1, 10]");
    println!("  --frequency=HZ       startup frequency   (0.1, 10]");
    println!("  --phase=RAD          startup phase       [0, 2π]");
    println!("  --noise-mean=M       startup noise mean  [-1, 1]");
    println!("  --noise-var=V        startup noise var   [0, 1]");
    println!("  --cutoff=HZ          low-pass cutoff     (0.1, 5]");
    println!("  --order=N            filter order / MA window [1, 15]");
    println!("  --filter=KIND        butterworth | ma");
    println!("  --no-noise           hide the noise overlay");
    println!("  --seed=N             fix the noise seed");
    println!("  --csv=PATH           write t,clean,displayed,filtered");
    println!("  --interactive        start the command loop (try `help`)");
}

fn parse_filter_kind(name: &str) -> Option<FilterKind> {
    match name.to_ascii_lowercase().as_str() {
        "butterworth" | "butter" | "lowpass" | "lp" => Some(FilterKind::LowPassIir),
        "ma" | "moving-average" | "movingaverage" => Some(FilterKind::MovingAverage),
        _ => None,
    }
}

/// Startup flags become ordinary events so reset still returns to the
/// documented defaults, not to the command line.
fn startup_events(a: &Args) -> Vec<ControlEvent> {
    let mut evs = Vec::new();
    if let Some(v) = a.amplitude  { evs.push(ControlEvent::Amplitude(v)); }
    if let Some(v) = a.frequency  { evs.push(ControlEvent::Frequency(v)); }
    if let Some(v) = a.phase      { evs.push(ControlEvent::Phase(v)); }
    if let Some(v) = a.noise_mean { evs.push(ControlEvent::NoiseMean(v)); }
    if let Some(v) = a.noise_var  { evs.push(ControlEvent::NoiseVariance(v)); }
    if let Some(v) = a.cutoff     { evs.push(ControlEvent::Cutoff(v)); }
    if let Some(v) = a.order      { evs.push(ControlEvent::FilterOrder(v)); }
    if let Some(name) = &a.filter {
        match parse_filter_kind(name) {
            Some(kind) => evs.push(ControlEvent::Filter(kind)),
            None => eprintln!("[warn] unknown filter kind: {name}"),
        }
    }
    if a.no_noise {
        evs.push(ControlEvent::ShowNoise(false));
    }
    evs
}

// --------------------------------- Rendering --------------------------------------

/// Compress a series into a fixed-width unicode sparkline (chunk means,
/// min..max scaled onto eight block heights).
fn sparkline(series: &[f64], width: usize) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if series.is_empty() || width == 0 {
        return String::new();
    }
    let chunk = (series.len() + width - 1) / width;
    let means: Vec<f64> = series.chunks(chunk).map(dsp::mean).collect();
    let lo = means.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };
    means
        .iter()
        .map(|m| {
            let level = (((m - lo) / span) * 7.0).round() as usize;
            BLOCKS[level.min(7)]
        })
        .collect()
}

fn line_stats(name: &str, xs: &[f64]) -> String {
    let lo = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    format!("{name:>9}: min {lo:+.3}  max {hi:+.3}  rms {:.3}", dsp::rms(xs))
}

fn print_render(payload: &RenderPayload) {
    println!("[render] filter: {}", payload.filter_kind);
    println!("  {}", line_stats("clean", &payload.clean));
    println!("  {}", line_stats("displayed", &payload.displayed));
    println!("  {}", line_stats("filtered", &payload.filtered));
    println!("  filtered  {}", sparkline(&payload.filtered, 64));
}

fn write_csv(path: &str, grid: &TimeGrid, payload: &RenderPayload) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "t,clean,displayed,filtered")?;
    for (i, t) in grid.iter().enumerate() {
        writeln!(
            w,
            "{t:.6},{:.6},{:.6},{:.6}",
            payload.clean[i], payload.displayed[i], payload.filtered[i]
        )?;
    }
    w.flush()
}

// ------------------------------- Interactive loop ---------------------------------

fn print_repl_help() {
    println!("commands:");
    println!("  amp V | freq V | phase V | mean V | var V | cutoff V | order N");
    println!("  filter butterworth|ma    select the filter kind");
    println!("  noise on|off             toggle the noise overlay");
    println!("  reset                    restore the documented defaults");
    println!("  csv PATH                 dump the current render as CSV");
    println!("  show                     reprint the current render");
    println!("  quit");
}

/// Parse one REPL line into a controller event, or a host action handled
/// locally (`csv`, `show`, `help`, `quit` return via the other arms).
fn parse_event(cmd: &str, val: &str) -> Option<ControlEvent> {
    let num = || val.parse::<f64>().ok();
    match cmd {
        "amp" | "amplitude" => num().map(ControlEvent::Amplitude),
        "freq" | "frequency" => num().map(ControlEvent::Frequency),
        "phase" => num().map(ControlEvent::Phase),
        "mean" => num().map(ControlEvent::NoiseMean),
        "var" | "variance" => num().map(ControlEvent::NoiseVariance),
        "cutoff" => num().map(ControlEvent::Cutoff),
        "order" => val.parse::<u32>().ok().map(ControlEvent::FilterOrder),
        "filter" => parse_filter_kind(val).map(ControlEvent::Filter),
        "noise" => match val {
            "on" => Some(ControlEvent::ShowNoise(true)),
            "off" => Some(ControlEvent::ShowNoise(false)),
            _ => None,
        },
        "reset" => Some(ControlEvent::Reset),
        _ => None,
    }
}

fn run_repl(controller: &mut Controller) -> Result<(), Box<dyn Error>> {
    println!("harmolab interactive — `help` lists commands, `quit` exits\n");
    print_render(controller.last_render());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(c) => c,
            None => continue,
        };
        let val = parts.next().unwrap_or("");

        match cmd {
            "quit" | "exit" | "q" => break,
            "help" | "?" => print_repl_help(),
            "show" => print_render(controller.last_render()),
            "csv" if !val.is_empty() => {
                write_csv(val, controller.grid(), controller.last_render())?;
                println!("[csv] wrote {} rows to {val}", controller.grid().len());
            }
            _ => match parse_event(cmd, val) {
                Some(ev) => match controller.handle_event(ev) {
                    Ok(payload) => print_render(payload),
                    // Last good render stays on screen; the write stands.
                    Err(e) => eprintln!("[error] {e}"),
                },
                None => eprintln!("[warn] unknown command: {line} (try `help`)"),
            },
        }
    }
    Ok(())
}

// ------------------------------------ Main ----------------------------------------

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args();
    if args.help {
        print_usage();
        return Ok(());
    }

    let grid = TimeGrid::new(
        args.duration_secs.unwrap_or(harmolab_engine::params::GRID_DURATION_SECS),
        args.sample_rate.unwrap_or(harmolab_engine::params::GRID_SAMPLE_RATE_HZ),
    );
    if grid.is_empty() {
        return Err("grid is empty: check --duration/--sample-rate".into());
    }

    let defaults = Parameters::default();
    let mut controller = match args.seed {
        Some(seed) => Controller::seeded(grid, defaults, seed)?,
        None => Controller::new(grid, defaults)?,
    };

    println!(
        "harmolab — {} samples at {} Hz over {} s",
        grid.len(),
        grid.sample_rate_hz(),
        grid.duration_secs()
    );

    for ev in startup_events(&args) {
        controller.handle_event(ev)?;
    }

    if args.interactive {
        return run_repl(&mut controller);
    }

    print_render(controller.last_render());
    if let Some(path) = &args.csv {
        write_csv(path, controller.grid(), controller.last_render())?;
        println!("[csv] wrote {} rows to {path}", controller.grid().len());
    }
    Ok(())
}

// ------------------------------------ Tests --------------------------------------
