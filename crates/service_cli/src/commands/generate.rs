//! Generate command: the full dataset pipeline.
//!
//! Universe → internal dataset → discrepancy injection → persistence.

use crate::config::SimConfig;
use crate::Result;
use adapter_feeds::{builtin_symbols, QuoteFeed, ReferenceDataSource, StaticFeed, SymbolUniverse};
use infra_store::DatasetStore;
use recon_core::SimRng;
use recon_engine::{DiscrepancyInjector, TradeGenerator};
use tracing::info;

/// Run the generate command.
pub fn run(config: &SimConfig) -> Result<()> {
    info!(
        seed = config.seed,
        trades = config.trade_count,
        error_rate = config.error_rate,
        shuffle = config.shuffle,
        offline = config.offline,
        "starting dataset generation"
    );

    // The injector's rate check runs before any network or rng activity.
    let injector = DiscrepancyInjector::new(config.error_rate, config.shuffle)?;
    let mut rng = SimRng::from_seed(config.seed);

    if config.offline {
        let generator = TradeGenerator::new(builtin_symbols(), StaticFeed::new())?;
        run_pipeline(config, &generator, &injector, &mut rng)
    } else {
        let universe = match &config.universe_url {
            Some(url) => SymbolUniverse::with_url(url),
            None => SymbolUniverse::new(),
        };
        let loaded = universe.load();
        info!(
            symbols = loaded.value().len(),
            fallback = loaded.is_fallback(),
            "symbol universe loaded"
        );

        let feed = match &config.quote_url {
            Some(url) => QuoteFeed::with_url(url),
            None => QuoteFeed::new(),
        };
        let generator = TradeGenerator::new(loaded.into_value(), feed)?;
        run_pipeline(config, &generator, &injector, &mut rng)
    }
}

fn run_pipeline<F: ReferenceDataSource>(
    config: &SimConfig,
    generator: &TradeGenerator<F>,
    injector: &DiscrepancyInjector,
    rng: &mut SimRng,
) -> Result<()> {
    let internal = generator.generate(config.trade_count, rng);
    let external = injector.inject(&internal, rng);

    let store = DatasetStore::new(&config.data_dir);
    let internal_path = store.write_internal(&internal)?;
    let external_path = store.write_external(&external)?;

    info!(
        internal = %internal_path.display(),
        external = %external_path.display(),
        "datasets saved"
    );
    Ok(())
}
