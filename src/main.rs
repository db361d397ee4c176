use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use footprintkit::commands::{CommandFactory, FootprintCommandFactory};
use footprintkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("FootprintKit")
        .version("0.1")
        .about("Inspect building-footprint datasets and export their regions")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Dataset manifest (TOML with a [dataset] table)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("img-dir")
                .long("img-dir")
                .help("Directory holding {id}.jpg footprint images")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("ann-dir")
                .long("ann-dir")
                .help("Directory holding {id}.npy graph annotations")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("id-file")
                .long("id-file")
                .help("File listing one sample identifier per line")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("split")
                .long("split")
                .help("Split tag; a value containing 'train' enables augmentation")
                .value_name("SPLIT")
                .default_value("train")
                .required(false),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export region masks and boxes instead of inspecting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for exported artifacts")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("index")
                .short('i')
                .long("index")
                .help("Sample index to inspect or export (export defaults to all)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the augmentation draw, for repeatable runs")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write the run log to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    // The run trace always lands in footprintkit.log; the log macros go to
    // an explicit --log-file when given, to env_logger (RUST_LOG) otherwise
    let logger = match Logger::new("footprintkit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => env_logger::init(),
    }

    let factory = FootprintCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
