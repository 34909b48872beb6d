use colored::Colorize;
use std::error::Error;
use subnet_math::config::{Config, ENV_SUBNET};
use subnet_math::output::print_summary;
use subnet_math::Subnet;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
        format!(
            "Error initializing log4rs from {}: {e}",
            config.log_config.display()
        )
    })?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args.as_slice() {
        [cidr] => Subnet::parse_cidr(cidr),
        [addr, mask] => Subnet::parse(addr, mask),
        [] => match &config.default_subnet {
            Some(cidr) => Subnet::parse_cidr(cidr),
            None => {
                return Err(format!(
                    "usage: subnet-math <address>/<bits|mask> | <address> <mask> (or set {ENV_SUBNET})"
                )
                .into())
            }
        },
        _ => return Err(format!("expected 1 or 2 arguments, got {}", args.len()).into()),
    };

    let subnet = match parsed {
        Ok(subnet) => subnet,
        Err(e) => {
            log::warn!("{failed} to parse {args:?}", failed = "failed".on_red());
            eprintln!("{}", e.to_string().red());
            return Err(e.into());
        }
    };

    print_summary(&subnet, config.sibling_limit)?;
    Ok(())
}
