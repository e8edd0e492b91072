use anyhow::Result;
use toppings::{Cheese, Domino, Olive, Paneer, Pizza};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> Result<()> {
    let builder = tracing_subscriber::fmt();
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        builder.with_env_filter(filter).init();
    } else {
        builder.with_max_level(LevelFilter::INFO).init();
    }

    let pizza = Cheese(Olive(Paneer(Domino)));
    println!("Description: {}", pizza.description());
    println!("Total price: ${}", pizza.price());

    Ok(())
}
