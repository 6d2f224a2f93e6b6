use std::io;
use std::process::ExitCode;

use log::error;

mod cli;
mod modify;

use cli::Invocation;

fn main() -> ExitCode {
    env_logger::init();
    let result = cli::scan(std::env::args_os()).and_then(|invocation| match invocation {
        Invocation::Print(text) => Ok(text.trim_end().to_string()),
        Invocation::Run(options) => modify::command(options, io::stdin().lock()),
    });

    match result {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
