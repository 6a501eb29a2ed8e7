use garmentcut::cli::{CliCommand, USAGE};
use garmentcut::{init_logging, run, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match CliCommand::parse(&args) {
        Ok(CliCommand::Process(options)) => options,
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("garmentcut {} (built {})", VERSION, BUILD_DATE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Initialize logging
    init_logging()?;

    let result = run(&options)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.message());
    }

    if result.is_error() {
        std::process::exit(1);
    }

    Ok(())
}
