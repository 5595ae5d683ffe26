use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use mdwi::config::{self, ConfigError};
use mdwi::convert::{ConvertError, Pandoc};
use mdwi::types::BuildError;
use mdwi::{output, standalone, wiki};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "mdwi")]
#[command(about = "Markdown wiki generator built on pandoc")]
#[command(long_about = "\
Markdown wiki generator built on pandoc

Run without options in a directory of markdown files to build a wiki:

  notes/
  ├── index.md          # Home page (linked as \"Home\", left out of the list)
  ├── another.md        # {{index}} becomes <a href=\"index.html\">index</a>
  ├── diagram.png       # Images (.png, .jpg) are copied
  ├── mdwi.toml         # Optional config (run 'mdwi --gen-config')
  ├── _list.md          # Generated page list source
  └── _site/            # Output, recreated on every run
      ├── index.html
      ├── another.html
      ├── list.html
      ├── style.css
      ├── favicon.svg
      └── diagram.png

With --standalone, a single file is converted next to its source with the
stylesheet and favicon inlined.")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version information and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Create a standalone HTML file
    #[arg(short = 's', long, value_name = "FILE", num_args = 0..=1)]
    standalone: Option<Option<PathBuf>>,

    /// Print a stock mdwi.toml with all options documented
    #[arg(long)]
    gen_config: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Error: no input file specified for standalone mode.")]
    MissingStandaloneInput,
    #[error("Error (working dir): {0}")]
    WorkingDir(std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        // Unknown options show usage rather than failing.
        Err(_) => {
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.version {
        println!("{}", output::version_line(&program_name()));
        return Ok(());
    }
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }
    if let Some(None) = cli.standalone {
        return Err(CliError::MissingStandaloneInput);
    }

    let root = std::env::current_dir().map_err(CliError::WorkingDir)?;
    let site_config = config::load_config(&root)?;
    // Checked before anything is written, so a missing converter leaves no output.
    let pandoc = Pandoc::locate(&site_config.converter)?;

    match cli.standalone {
        Some(Some(input)) => {
            standalone::build(&input, &pandoc, &mut output::print_event)?;
        }
        _ => {
            wiki::build(&root, &site_config, &pandoc, &mut output::print_event)?;
        }
    }
    Ok(())
}

/// Name the binary was invoked as, for the version line.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
