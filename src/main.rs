use clap::Parser;
use stock_costing::core::SettingsProvider;
use stock_costing::utils::{logger, validation::Validate};
use stock_costing::{CheckoutSession, CliConfig, Inventory, Settings};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load settings: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let inventory = match Inventory::load_or_report(settings.inventory_path(), &mut output) {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::error!("❌ Inventory load failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    CheckoutSession::new(&inventory, &settings).run(&mut input, &mut output)?;
    Ok(())
}
