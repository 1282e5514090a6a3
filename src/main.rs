use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use heickit::commands::{CommandFactory, HeickitCommandFactory};
use heickit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("heickit")
        .version("0.1.0")
        .about("Convert HEIC/HEIF images to JPEG or PNG")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input HEIC file, - for stdin")
                .value_name("FILE")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, - for stdout; %s in the name is replaced with the image index")
                .value_name("FILE")
                .default_value("-"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format: jpg or png (jpeg is accepted as an alias)")
                .value_name("FORMAT")
                .default_value("jpg"),
        )
        .arg(
            Arg::new("quality")
                .short('q')
                .long("quality")
                .help("Compression quality, greater than 0 and at most 1")
                .value_name("QUALITY")
                .value_parser(clap::value_parser!(f32))
                .default_value("1"),
        )
        .arg(
            Arg::new("images")
                .short('m')
                .long("images")
                .help("Image indices to convert, -1 for all")
                .value_name("INDEX")
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("info")
                .about("Report image count and dimensions without converting")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Input HEIC file, - for stdin")
                        .value_name("FILE")
                        .default_value("-"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .help("Print only the number of images")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    if let Err(e) = Logger::init_global_logger("heickit.log", verbose) {
        eprintln!("Error setting up logger: {}", e);
        process::exit(1);
    }

    // Command log file only appears on verbose runs
    let logger = if verbose {
        match Logger::new("heickit-command.log") {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        }
    } else {
        Logger::disabled()
    };
    let factory = HeickitCommandFactory::new();

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
