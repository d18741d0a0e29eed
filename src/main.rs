use anyhow::{Context, Result};
use bus_tbcfg::{cli, suite, TestBench};
use clap::Parser;
use clap_verbosity_flag::Verbosity;

// Bus verification-component test configuration generator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    styles = cli::get_styles(),
)]
struct Args {
    /// Only list configurations of this test bench
    #[arg(short, long)]
    bench: Option<String>,

    /// Emit the configuration list as JSON
    #[arg(long)]
    json: bool,

    /// Output filename (default is stdout)
    #[arg(short = 'o', long)]
    output: Option<String>,

    // / Print logs during generation
    #[command(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose.log_level() {
        Some(clap_verbosity_flag::Level::Error) => &tracing::Level::WARN,
        Some(clap_verbosity_flag::Level::Warn) => &tracing::Level::INFO,
        Some(clap_verbosity_flag::Level::Info) => &tracing::Level::DEBUG,
        Some(clap_verbosity_flag::Level::Debug) => &tracing::Level::TRACE,
        Some(clap_verbosity_flag::Level::Trace) => &tracing::Level::TRACE,
        None => &tracing::Level::ERROR,
    };
    cli::logging_setup(log_level, None::<&std::fs::File>);

    let lib = suite::build_library().context("failed to generate test configurations")?;

    let benches: Vec<&TestBench> = match &args.bench {
        Some(name) => vec![lib
            .test_bench(name)
            .with_context(|| format!("unknown test bench `{}`", name))?],
        None => lib.benches().iter().collect(),
    };

    let rendered = if args.json {
        let mut s = serde_json::to_string_pretty(&benches)
            .context("failed to serialize configurations")?;
        s.push('\n');
        s
    } else {
        render_text(&benches, args.output.is_none())
    };

    match args.output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("could not write file `{}`", &path))?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn render_text(benches: &[&TestBench], tty_out: bool) -> String {
    use std::fmt::Write;

    let paint_bench = |name: &str| {
        if tty_out {
            ansi_term::Colour::Green.bold().paint(name.to_string()).to_string()
        } else {
            name.to_string()
        }
    };
    let paint_test = |name: &str| {
        if tty_out {
            ansi_term::Colour::Blue.bold().paint(name.to_string()).to_string()
        } else {
            name.to_string()
        }
    };

    let mut out = String::new();
    for bench in benches {
        writeln!(
            out,
            "{} ({} configurations)",
            paint_bench(bench.name()),
            bench.config_count()
        )
        .unwrap();
        for cfg in bench.configs() {
            writeln!(out, "  {}", cfg.name).unwrap();
        }
        for test in bench.tests() {
            writeln!(out, "  {}", paint_test(test.name())).unwrap();
            for cfg in test.configs() {
                writeln!(out, "    {}", cfg.name).unwrap();
            }
        }
    }
    out
}
