use std::io;

use anyhow::Error;
use clap::Parser;
use log::info;

use regions::{
    config::{ConfigBuilder, Shape},
    number::NumberFormat,
    session::Session,
};

/// Build a rectangle or parallelepiped from typed bounds and test whether a point lies inside.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Skip the menu and build this shape.
    #[arg(long, value_enum)]
    shape: Option<Shape>,

    /// Only accept `1,234.5` style numbers. By default `1.234,5` is tried when that fails.
    #[arg(long)]
    decimal_point: bool,

    /// Exit on non-finite bounds instead of asking again.
    #[arg(long)]
    no_retry: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let opts = Opts::parse();

    let mut builder = ConfigBuilder::default().set_retry_invalid(!opts.no_retry);
    if let Some(shape) = opts.shape {
        builder = builder.set_shape(shape);
    }
    if opts.decimal_point {
        builder = builder.set_fallback(NumberFormat::invariant());
    }
    let config = builder.build();
    info!("{:?}", config);

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    let region = session.run()?;
    info!("finished with {}", region.name());

    Ok(())
}
