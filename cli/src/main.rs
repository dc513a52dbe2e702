use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "hl")]
#[command(about = "Line-oriented syntax highlighter for documentation snippets (script, JSON, HTML).")]
#[command(version = crate::core::version::app_version())]
#[command(long_version = crate::core::version::long_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);
    crate::core::logger::Logger::debug(&format!("hl {}", crate::core::version::app_version()));

    match args.command {
        Commands::Tokenize(tokenize_args) => commands::tokenize::execute(&tokenize_args),
        Commands::Render(render_args) => commands::render::execute(&render_args),
        Commands::Languages(languages_args) => commands::languages::execute(&languages_args),
    }
}
