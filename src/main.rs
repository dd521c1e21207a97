use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use travelanim::utils::logger::init_logging;
use travelanim::commands::{CommandFactory, TravelanimCommandFactory};
use travelanim::TravelAnimator;

fn main() {
    let matches = ClapCommand::new("travelanim")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Build curved travel routes between waypoints and animate a marker along them")
        .arg(
            Arg::new("input")
                .help("Waypoint file (TOML)")
                .required_unless_present("from")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Settings file (defaults to ./travelanim.toml if present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Start coordinate in 'lng,lat' format")
                .value_name("LNG,LAT")
                .requires("to")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("End coordinate in 'lng,lat' format")
                .value_name("LNG,LAT")
                .requires("from")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("samples")
                .short('n')
                .long("samples")
                .help("Number of curve samples per segment (overrides the settings file)")
                .value_name("COUNT")
                .required(false),
        )
        .arg(
            Arg::new("geojson")
                .short('o')
                .long("geojson")
                .help("Write the route as GeoJSON to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("animate")
                .short('a')
                .long("animate")
                .help("Run the marker animation to completion")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("realtime")
                .long("realtime")
                .help("Animate against the wall clock instead of a simulated one")
                .requires("animate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .help("Frame rate of the realtime loop")
                .value_name("FPS")
                .default_value("60")
                .required(false),
        )
        .arg(
            Arg::new("velocity")
                .long("velocity")
                .help("Marker speed in degrees per second; derives the duration from the route length")
                .value_name("DEG_PER_S")
                .requires("animate")
                .conflicts_with("export-length")
                .required(false),
        )
        .arg(
            Arg::new("export-length")
                .long("export-length")
                .help("Use the [export] clip length as the animation duration")
                .requires("animate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .help("Write every rendered frame as JSON lines to this file")
                .value_name("FILE")
                .requires("animate")
                .required(false),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file").map(|s| s.as_str());
    if let Err(e) = init_logging(matches.get_flag("verbose"), log_file) {
        eprintln!("Error initializing logger: {}", e);
        process::exit(1);
    }

    let config = matches.get_one::<String>("config").map(|s| s.as_str());
    let animator = match TravelAnimator::from_config(config) {
        Ok(animator) => animator,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = TravelanimCommandFactory::new();

    let command_result = factory.create_command(&matches, &animator);
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
