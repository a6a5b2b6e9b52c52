// npavc: interpreter and C++ generator for the npavc language

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use npavc::codegen;
use npavc::terminal::Terminal;
use tracing::{info, Level};

/// Interpret an npavc program, or translate it to C++ with `-c`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run
    file: PathBuf,

    /// Generate C++ instead of interpreting
    #[arg(short, long)]
    compile: bool,

    /// Where to write the generated C++ (defaults to FILE with a .cpp extension)
    #[arg(short, long, requires = "compile")]
    output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .with_target(false)
        .without_time()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), npavc::Error> {
    if args.compile {
        let source = npavc::read_source(&args.file)?;
        let output = codegen::emit_file(&args.file, &source, args.output.as_deref())?;
        print!("{}", codegen::confirmation(&args.file, &output));
        return Ok(());
    }

    info!("running {}", args.file.display());
    npavc::run_file(&args.file, Terminal::Stdout)?;
    Ok(())
}
