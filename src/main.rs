use anyhow::Context;
use shopping_cart::cart::helpers::{format_dollars, format_item_summary};
use shopping_cart::config::{DemoConfig, OutputFormat};
use shopping_cart::{CartSessions, Product, ShoppingCart};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let sessions = CartSessions::new();
    let apple = Product::new("Apple", 495);
    let orange = Product::new("Orange", 399);

    let scenarios: [(&str, fn(&Product, &Product, &mut ShoppingCart)); 4] = [
        ("two apples and an orange", |apple, orange, cart| {
            apple.add_to_cart(cart, 2);
            orange.add_one_to_cart(cart);
        }),
        ("three apples, one put back", |apple, _, cart| {
            apple.add_to_cart(cart, 3).remove_one_from_cart(cart);
        }),
        ("too many apples put back", |apple, orange, cart| {
            apple.add_to_cart(cart, 3);
            orange.add_to_cart(cart, 3);
            apple.remove_from_cart(cart, 5);
        }),
        ("everything put back", |apple, orange, cart| {
            orange.add_to_cart(cart, 3);
            apple.remove_from_cart(cart, 5);
            orange.remove_from_cart(cart, 3);
        }),
    ];

    for (label, fill) in scenarios {
        let session_id = sessions.open(None);
        sessions.with_cart(&session_id, |cart| fill(&apple, &orange, cart))?;

        let cart = sessions.close(&session_id)?;
        println!("== {}", label);
        match config.output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&cart.snapshot())
                    .context("failed to serialize cart snapshot")?;
                println!("{}", json);
            }
            OutputFormat::Summary => println!("{}", format_item_summary(&cart)),
        }
        println!("{} ({})", cart.total_price(), format_dollars(cart.total_price()));
    }

    Ok(())
}
