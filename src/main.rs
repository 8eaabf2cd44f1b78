use clap::Parser;
use classc_subnet_calc::cli::{Args, OutputFormat};
use classc_subnet_calc::config::Settings;
use classc_subnet_calc::output::{print_csv, print_json, print_table};
use colored::Colorize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main() thin, it can't carry tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args = Args::parse();
    let settings = Settings::from_env();
    if settings.no_color {
        colored::control::set_override(false);
    }

    let plan = match classc_subnet_calc::plan(&args.address, args.borrowed_bits) {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };

    match args.format.unwrap_or(settings.format) {
        OutputFormat::Table => print_table(&plan),
        OutputFormat::Csv => print_csv(&plan),
        OutputFormat::Json => print_json(&plan)?,
    }

    Ok(())
}
