use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = zoo_lib::Cli::parse();
    match zoo_lib::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Exiting");
            ExitCode::FAILURE
        }
    }
}
