use clap::{crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use graph2dot::{convert, convert_to};
use log::info;
use std::{error::Error, path::PathBuf};

fn handle_convert(matches: &ArgMatches) -> graph2dot::Result<PathBuf> {
    let source = matches.value_of("SOURCE").unwrap();
    match matches.value_of("output") {
        Some(target) => {
            convert_to(source, target)?;
            Ok(PathBuf::from(target))
        }
        None => convert(source),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("SOURCE")
                .help("Graph text file to convert")
                .default_value("graph.txt"),
        )
        .arg(
            Arg::with_name("output")
                .help("Writes to this file instead of SOURCE's name with a .dot extension")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .get_matches();
    let target = handle_convert(&matches)?;
    info!("output written to {}", target.display());
    println!("Conversion done with success");
    Ok(())
}
