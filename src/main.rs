use shaderbatch::{Args, Config};

use clap::Parser;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_filter())
        .parse_default_env()
        .init();

    let code = match Config::resolve(&args).and_then(|config| shaderbatch::run(&config)) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            1
        }
    };
    std::process::exit(code);
}
