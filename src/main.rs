use std::env;
use std::process;

use log::debug;
use witsshell::config::load_config;
use witsshell::error::report_error;

mod io_helpers;
mod repl;

use io_helpers::{BatchSource, InteractiveSource};

fn main() {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 1 {
        debug!("startup event=usage args={}", args.len());
        report_error();
        process::exit(1);
    }

    let config = load_config();
    let mut search_path = config.search_path();
    debug!("startup event=config path={:?}", search_path.entries());

    let result = match args.first() {
        Some(batch_file) => {
            let mut source = match BatchSource::open(batch_file) {
                Ok(source) => source,
                Err(err) => {
                    debug!("startup event=batch-open-failed file={batch_file} err={err}");
                    report_error();
                    process::exit(1);
                }
            };
            repl::run(&mut source, &mut search_path)
        }
        None => InteractiveSource::new(&config)
            .and_then(|mut source| repl::run(&mut source, &mut search_path)),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
    process::exit(0);
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("WITSSHELL_LOG", "info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
