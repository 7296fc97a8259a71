//! mdsection: update a generated section of a markdown file in place.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdsection::config::Config;
use mdsection::edit_plan::EditPlan;
use mdsection::report::Report;
use mdsection::update::{parse_after_line, UpdateRequest};
use mdsection::{input, Error, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdsection")]
#[command(about = "Keep generated sections of markdown files in sync", long_about = None)]
struct Args {
    /// Section identifier used in the START_SECTION/END_SECTION markers
    #[arg(value_name = "SECTION_ID")]
    section_id: Option<String>,

    /// Place the section after this 1-based line (empty keeps its position)
    #[arg(value_name = "AFTER_LINE")]
    after_line: Option<String>,

    /// Section body
    #[arg(value_name = "CONTENT")]
    content: Option<String>,

    /// Target file (defaults to the configured readme file)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Working directory for relative paths and mdsection.toml
    #[arg(long, short = 'C', value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Read the section body from a file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    content_file: Option<PathBuf>,

    /// Place the section after the markdown heading with this title
    #[arg(long, value_name = "TEXT")]
    after_heading: Option<String>,

    /// Apply a JSON edit plan instead of a single update
    #[arg(long, value_name = "PATH", conflicts_with_all = ["section_id", "content_file", "after_heading"])]
    plan: Option<PathBuf>,

    /// Report what would change without writing; exit 1 if anything would
    #[arg(long)]
    check: bool,

    /// Print outcome records as JSON
    #[arg(long)]
    json: bool,

    /// Log debug details to stderr
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors and suppress status lines
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::load(&args.dir);

    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        config.as_ref().map_or("warn", |c| c.log_level.as_str())
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let result = config.and_then(|cfg| run(&args, &cfg));
    match result {
        Ok(reports) => {
            if let Err(e) = print_reports(&args, &reports) {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
            if args.check && reports.iter().any(|r| r.outcome.changed()) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args, cfg: &Config) -> Result<Vec<Report>> {
    let default_file = Path::new(&cfg.readme_file);

    if let Some(plan_path) = &args.plan {
        let plan = EditPlan::load(&input::resolve_path(&args.dir, plan_path))?;
        return plan.apply(&args.dir, default_file, args.check);
    }

    let section_id = args.section_id.as_deref().unwrap_or_default();
    let content = read_content(args)?;
    let target = match &args.file {
        Some(file) if !file.as_os_str().is_empty() => file.as_path(),
        _ => default_file,
    };

    let mut request = UpdateRequest::new(section_id, content)?.with_target_file(target);
    request = match &args.after_heading {
        Some(title) => request.with_after_heading(title.clone()),
        None => request.with_after_line(args.after_line.as_deref().and_then(parse_after_line)),
    };

    let report = input::update_file(&args.dir, &request, args.check)?;
    Ok(vec![report])
}

fn read_content(args: &Args) -> Result<String> {
    let inline = args.content.clone().unwrap_or_default();
    let Some(path) = &args.content_file else {
        return Ok(inline);
    };
    if !inline.is_empty() {
        return Err(Error::InvalidRequest(
            "content given both inline and with --content-file".to_string(),
        ));
    }

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Io {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        return Ok(buf);
    }

    let path = input::resolve_path(&args.dir, path);
    std::fs::read_to_string(&path).map_err(|e| Error::Io { path, source: e })
}

fn print_reports(args: &Args, reports: &[Report]) -> io::Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
        println!("{json}");
    } else if !args.quiet {
        for report in reports {
            println!("{}", report.status_line());
        }
    }
    Ok(())
}
