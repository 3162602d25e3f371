use std::io::{self, Read, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use linkseg::{parser, translator, Segmented};
use structopt::StructOpt;

fn read() -> Result<String> {
    let mut content = String::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    handle
        .read_to_string(&mut content)
        .context("failed to read UTF-8 text from stdin")?;
    Ok(content)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Html,
    Source,
    Debug,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "source" => Ok(Format::Source),
            "debug" => Ok(Format::Debug),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "linkseg", about = "Render [text](href) links in plain text fields")]
struct Opt {
    /// Treat every input line as a separate text field
    #[structopt(long = "lines")]
    pub lines: bool,

    #[structopt(
        long = "format",
        default_value = "html",
        possible_values = &["html", "source", "debug"]
    )]
    pub format: Format,

    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,
}

fn emit(segmented: &Segmented, format: Format) -> String {
    match format {
        Format::Html => translator::translate(segmented),
        Format::Source => segmented.to_string(),
        Format::Debug => format!("{:?}", segmented),
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let level = if opt.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::debug!("opt = {:?}", &opt);

    let content = read()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opt.lines {
        for (number, line) in content.lines().enumerate() {
            let segmented = parser::segment(line);
            log::debug!("line {}: {} links", number + 1, segmented.links().count());
            writeln!(out, "{}", emit(&segmented, opt.format)).context("failed to write to stdout")?;
        }
    } else {
        let segmented = parser::segment(&content);
        log::debug!("{} links", segmented.links().count());
        write!(out, "{}", emit(&segmented, opt.format)).context("failed to write to stdout")?;
    }
    out.flush().context("failed to write to stdout")?;
    Ok(())
}
