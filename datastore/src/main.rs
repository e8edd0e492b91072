use anyhow::Result;
use datastore::{sample_payload, Client};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> Result<()> {
    let builder = tracing_subscriber::fmt();
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        builder.with_env_filter(filter).init();
    } else {
        builder.with_max_level(LevelFilter::INFO).init();
    }

    let data = sample_payload();
    let mut client = Client::new("MySQL")?;
    let response = client.insert(&data);
    println!("{response}");

    Ok(())
}
