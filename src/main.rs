mod commands;
mod core;
mod utils;

use clap::Parser;
use crate::core::error::{print_error, ReleaseError};

/// Build an Unreal plugin in batch against multiple engine versions.
#[derive(Parser)]
#[command(name = "uplugin-release")]
#[command(version, about)]
#[command(styles = get_styles())]
#[command(long_about = "Build an Unreal plugin in batch against multiple engine versions.

REQUIRES a config.json file next to the executable, which must contain:
  - engineBaseDirectory: the folder that contains the UE_5.1, UE_5.2 etc folders
  - buildScriptPath: the path to the RunUAT file within the engine dir
  - outputBaseDirectory: the path to the folder that will contain the built content
  - pluginPath: full path to the .uplugin file
  - docsPath: (optional) full path to a documentation file to include

If documentation is enabled, a FilterPlugin.ini file must also exist next to
the executable. Its second line holds the packaged documentation path:

  [FilterPlugin]
  /Documentation/My_Documentation.pdf")]
struct Cli {
  /// Comma-separated list of Unreal engine versions (e.g. "5.4,5.5")
  #[arg(long)]
  engine_versions: String,

  /// Skip adding documentation (FilterPlugin.ini and docsPath are needed otherwise)
  #[arg(long)]
  skip_docs: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = commands::run_build(cli.engine_versions, cli.skip_docs) {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
