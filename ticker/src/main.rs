use anyhow::Result;
use ticker::{AppDisplay, Stock};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> Result<()> {
    let builder = tracing_subscriber::fmt();
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        builder.with_env_filter(filter).init();
    } else {
        builder.with_max_level(LevelFilter::INFO).init();
    }

    let mut tesla = Stock::new("Tesla");
    tesla.set_threshold(670.0);

    // A mobile screen, a web screen and a third-party API feed, all
    // watching the same stock.
    AppDisplay::subscribe(&mut tesla);
    AppDisplay::subscribe(&mut tesla);
    AppDisplay::subscribe(&mut tesla);

    tesla.set_price(660.08);
    tesla.set_price(678.10);

    Ok(())
}
