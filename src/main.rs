use parametric_circle::Config;
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_args();
    log::debug!("{:?}", config);

    let figure = config.figure()?;
    figure.save(&config.filename)?;

    Ok(())
}
