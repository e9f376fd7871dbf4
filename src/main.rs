//! penplot CLI
//!
//! Usage:
//!   penplot [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --profile <FILE>   Surface profile (TOML format)
//!   --precision <STEP>     Sampling precision (parameter step)
//!   -o, --output <FILE>    Write the plot script to a file (default stdout)
//!   -h, --help             Print help

use std::fs::{self, File};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use penplot::{style, Painter, PlotConfig, Profile, ScriptSurface, SvgDocument};

#[derive(Parser)]
#[command(name = "penplot")]
#[command(about = "Replay SVG paths as pen-plotter instructions")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Surface profile (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Sampling precision (parameter step, clamped to at least 0.001)
    #[arg(long)]
    precision: Option<f64>,

    /// Write the plot script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load profile
    let profile = match &cli.profile {
        Some(path) => match Profile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Profile::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut config = PlotConfig::new().with_profile(profile);
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }

    // The stages run individually here (rather than through
    // penplot::plot_with_config) so paint errors can be reported with
    // source context against the document's style text.
    let doc = match SvgDocument::parse(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let traced = doc.sample(config.precision);
    let sheet = style::parse(doc.style_text());

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error creating output file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    let mut surface = ScriptSurface::with_profile(out, &config.profile);
    let mut painter = Painter::new(&mut surface, doc.canvas(), &sheet);
    if let Err(e) = painter.paint_all(&traced) {
        eprintln!("{}", e.format(doc.style_text(), "<style>"));
        std::process::exit(1);
    }

    if let Err(e) = surface.finish() {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

fn print_intro() {
    println!(
        r#"penplot - Replay SVG paths as pen-plotter instructions

USAGE:
    penplot [OPTIONS] [FILE]
    cat drawing.svg | penplot

OPTIONS:
    -p, --profile <FILE>   Surface profile (TOML: title, background, speed,
                           sampling precision)
    --precision <STEP>     Sampling parameter step (coarser than 0.001 only)
    -o, --output <FILE>    Write the plot script to a file (default stdout)
    -h, --help             Print help

QUICK START:
    penplot drawing.svg > drawing.plot

The input document needs a viewBox, a <style> block with class rules, and
<path> elements carrying class attributes."#
    );
}
