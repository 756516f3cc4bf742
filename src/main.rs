//! Binary entrypoint for the `modeldoc` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; MODELDOC_* variables may come from the shell.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match modeldoc::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
