use clap::Parser;
use colored::Colorize;
use titlegraph_core::cli::{self, Cli};
use titlegraph_core::exit::TitleGraphExit;

fn main() -> TitleGraphExit {
    let cli = Cli::parse();
    cli::dispatch::init_logging(cli.verbose);

    let result = if let Some(cmd) = &cli.command {
        cli::dispatch::execute(&cli, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(TitleGraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            cli::dispatch::exit_for(&e)
        }
    }
}
