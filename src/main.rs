use clap::Parser;
use storefront_cart::adapters::{
    ConsoleNavigator, CsvCatalogSource, FileSessionStore, HttpCartClient, HttpCatalogSource,
    JsonCartSource,
};
use storefront_cart::app::header::Header;
use storefront_cart::app::quantity::ItemQuantity;
use storefront_cart::domain::model::{CartSummary, HeaderState};
use storefront_cart::domain::ports::{CartSource, CatalogSource, ConfigProvider};
use storefront_cart::utils::error::{ErrorSeverity, StorefrontError};
use storefront_cart::utils::{logger, validation::Validate};
use storefront_cart::{CartEngine, CliConfig, Result, StorefrontPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting storefront-cart CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&cli).await {
        Ok((summary, session_file)) => {
            let header = Header::new(FileSessionStore::new(&session_file), ConsoleNavigator);
            match header.state() {
                HeaderState::Authenticated { username } => {
                    println!("👤 Signed in as {username}");
                }
                HeaderState::Anonymous => println!("👤 Browsing anonymously"),
            }

            render_cart(&summary);
            println!("✅ Cart ready");
        }
        Err(e) => {
            tracing::error!(
                "❌ Cart computation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(CartSummary, String)> {
    if let Some(path) = &cli.config {
        let config = TomlConfig::from_file(path)?;
        config.validate()?;
        let session_file = config.session.file.clone();
        let summary = run_from_toml(config).await?;
        Ok((summary, session_file))
    } else {
        let summary = run_from_cli(cli).await?;
        Ok((summary, cli.session_file.clone()))
    }
}

async fn run_from_cli(cli: &CliConfig) -> Result<CartSummary> {
    let cart = JsonCartSource::new(&cli.cart_file);

    if let Some(endpoint) = &cli.catalog_endpoint {
        run_engine(HttpCatalogSource::new(endpoint.clone()), cart, cli.clone()).await
    } else {
        let file = cli
            .catalog_file
            .clone()
            .ok_or_else(|| StorefrontError::MissingConfigError {
                field: "catalog-file".to_string(),
            })?;
        run_engine(CsvCatalogSource::new(file), cart, cli.clone()).await
    }
}

async fn run_from_toml(config: TomlConfig) -> Result<CartSummary> {
    let catalog_kind = config.catalog.source.clone();
    let cart_kind = config.cart.source.clone();

    match (catalog_kind.as_str(), cart_kind.as_str()) {
        ("api", "api") => {
            let catalog = HttpCatalogSource::new(required(
                "catalog.endpoint",
                &config.catalog.endpoint,
            )?);
            let cart = HttpCartClient::new(required("cart.endpoint", &config.cart.endpoint)?);
            run_engine(catalog, cart, config).await
        }
        ("api", _) => {
            let catalog = HttpCatalogSource::new(required(
                "catalog.endpoint",
                &config.catalog.endpoint,
            )?);
            let cart = JsonCartSource::new(required("cart.file", &config.cart.file)?);
            run_engine(catalog, cart, config).await
        }
        (_, "api") => {
            let catalog = CsvCatalogSource::new(required("catalog.file", &config.catalog.file)?);
            let cart = HttpCartClient::new(required("cart.endpoint", &config.cart.endpoint)?);
            run_engine(catalog, cart, config).await
        }
        _ => {
            let catalog = CsvCatalogSource::new(required("catalog.file", &config.catalog.file)?);
            let cart = JsonCartSource::new(required("cart.file", &config.cart.file)?);
            run_engine(catalog, cart, config).await
        }
    }
}

async fn run_engine<C, K, G>(catalog: C, cart: K, config: G) -> Result<CartSummary>
where
    C: CatalogSource,
    K: CartSource,
    G: ConfigProvider,
{
    if config.notifications_enabled() {
        tracing::debug!("Notifications are enabled; shells will surface user messages");
    }

    let pipeline = StorefrontPipeline::new(catalog, cart, config);
    let engine = CartEngine::new(pipeline);
    engine.run().await
}

fn required(field: &str, value: &Option<String>) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| StorefrontError::MissingConfigError {
            field: field.to_string(),
        })
}

fn render_cart(summary: &CartSummary) {
    if summary.items.is_empty() {
        println!("🛒 Your cart is empty");
        return;
    }

    println!("🛒 Cart contents:");
    for line in &summary.items {
        println!(
            "   {:<28} {:>8.2}  x {}",
            line.name,
            line.cost,
            ItemQuantity::read_only(line.quantity).label()
        );
    }
    println!(
        "📦 {} item(s), total {:.2}",
        summary.total_count, summary.total_value
    );
}
