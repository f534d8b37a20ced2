use clap::Parser;
use log::error;
use std::process::ExitCode;
use stsp_cli::logging::init_logger;
use stsp_cli::options::Options;

fn main() -> ExitCode {
    let options = Options::parse();

    if let Err(e) = init_logger(&options) {
        eprintln!("logger init failed: {e}");
        return ExitCode::FAILURE;
    }

    let report = match stsp_cli::run(&options) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to render report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }
    ExitCode::SUCCESS
}
