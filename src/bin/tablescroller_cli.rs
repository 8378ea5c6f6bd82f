//! CLI tool for tablescroller - splits a table from an XHTML file and
//! prints the resulting pane layout as JSON
//!
//! Usage:
//!   tablescroller_cli <table.xhtml>                        # JSON to stdout
//!   tablescroller_cli <table.xhtml> --rows 2 --cols 1      # pin 2 rows, 1 column
//!   tablescroller_cli <table.xhtml> --width 400 --height 300 -o out.json
//!
//! Set `RUST_LOG=tablescroller=debug` to trace pane creation and sizing.

#![allow(clippy::exit)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::str::FromStr;

use tablescroller::{attach, HostDocument, MemoryDocument, ScrollerError, ScrollerOptions};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tablescroller_cli <table.xhtml> [--rows N] [--cols N] \
                     [--width W] [--height H] [--table ID] [-o output.json]";

struct Args {
    input: String,
    output: Option<String>,
    table_id: Option<String>,
    options: ScrollerOptions,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn value<T: FromStr>(flag: &str, raw: Option<&String>) -> T {
    match raw.map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => fail(&format!("{flag} expects a number\n{USAGE}")),
    }
}

fn parse_args(args: &[String]) -> Args {
    if args.len() < 2 {
        fail(USAGE);
    }

    let mut parsed = Args {
        input: args[1].clone(),
        output: None,
        table_id: None,
        options: ScrollerOptions::new(),
    };

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let next = args.get(i + 1);
        match flag {
            "--rows" => parsed.options.pinned_rows = Some(value(flag, next)),
            "--cols" => parsed.options.pinned_cols = Some(value(flag, next)),
            "--width" => parsed.options.width = Some(value(flag, next)),
            "--height" => parsed.options.height = Some(value(flag, next)),
            "--table" => match next {
                Some(id) => parsed.table_id = Some(id.clone()),
                None => fail(&format!("--table expects an id\n{USAGE}")),
            },
            "-o" => match next {
                Some(path) => parsed.output = Some(path.clone()),
                None => fail(&format!("-o expects a path\n{USAGE}")),
            },
            _ => fail(&format!("Unknown argument: {flag}\n{USAGE}")),
        }
        i += 2;
    }
    parsed
}

fn run(args: &Args) -> tablescroller::Result<()> {
    let markup = fs::read_to_string(&args.input)?;
    let doc = MemoryDocument::from_markup(&markup)?;

    let table = match &args.table_id {
        Some(id) => doc.element_by_id(id),
        None => doc
            .body()
            .ok()
            .and_then(|body| doc.elements_by_tag(&body, "table").into_iter().next()),
    };

    let scroller = attach(&doc, table.as_ref(), Some(&args.options))?;
    let json = serde_json::to_string_pretty(&scroller.layout_report(&doc))
        .map_err(|e| ScrollerError::Io(e.into()))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args);

    if let Err(e) = run(&args) {
        fail(&format!("{}: {e}", args.input));
    }
}
