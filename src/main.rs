use clap::Parser;
use product_nav::config::toml_config::TomlConfig;
use product_nav::domain::ports::ProductSource;
use product_nav::utils::{logger, validation::Validate};
use product_nav::{CliConfig, Direction, HttpCatalog, Navigator};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting product-nav CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut in_same_category = !config.all_categories;
    let mut timeout = None;

    // A config file overrides the command-line values it covers.
    let file_config = match &config.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let mut templates = (
        config.next_format.clone(),
        config.link.clone(),
        config.previous_format.clone(),
        config.link.clone(),
    );
    if let Some(file) = &file_config {
        if let Err(e) = file.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
        config.api_endpoint = file.endpoint()?.to_string();
        config.item_type = file.item_type().to_string();
        config.date_format = file.date_format().to_string();
        in_same_category = file.in_same_category();
        timeout = file.source.as_ref().and_then(|s| s.timeout_seconds);
        templates = (
            file.format_for(Direction::Next).to_string(),
            file.link_for(Direction::Next).to_string(),
            file.format_for(Direction::Previous).to_string(),
            file.link_for(Direction::Previous).to_string(),
        );
    }
    let (next_format, next_link, previous_format, previous_link) = templates;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let catalog = match timeout {
        Some(seconds) => {
            HttpCatalog::with_timeout(&config.api_endpoint, Duration::from_secs(seconds))?
        }
        None => HttpCatalog::new(&config.api_endpoint),
    };

    let current = match config.current {
        Some(id) => {
            let products = catalog.fetch_products(&config.item_type, None).await?;
            let found = products.into_iter().find(|p| p.id == id);
            if found.is_none() {
                tracing::warn!("product {} is not present in the listing", id);
            }
            found
        }
        None => {
            tracing::warn!("no current product given; nothing to render");
            None
        }
    };

    let navigator = Navigator::new(catalog.clone(), catalog, config.clone());

    for (direction, format, link) in [
        (Direction::Previous, &previous_format, &previous_link),
        (Direction::Next, &next_format, &next_link),
    ] {
        if let Some(rendered) = navigator
            .render(current.as_ref(), format, link, in_same_category, direction)
            .await?
        {
            println!("{}", rendered);
        }
    }

    Ok(())
}
