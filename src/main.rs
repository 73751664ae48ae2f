use std::process;
use log::{error, LevelFilter};

// Import from your library
use qinfra::utils::logger::Logger;
use qinfra::commands::{build_cli, CommandFactory, QInfraCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            // Audit trail lives next to the log file
            match Logger::new(&format!("{}.audit", log_file)) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
                .init();
            Logger::console()
        }
    };

    let factory = QInfraCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
