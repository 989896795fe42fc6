//! Offline end-to-end flow: generate, inject, persist, read back, confirm.

use adapter_feeds::{builtin_symbols, StaticFeed};
use chrono::{TimeZone, Utc};
use infra_store::DatasetStore;
use recon_core::SimRng;
use recon_engine::{DiscrepancyInjector, TradeGenerator};
use service_confirm::{ConfirmationRenderer, ConfirmationWriter};

#[test]
fn full_offline_run_produces_datasets_and_confirmations() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();

    let generator = TradeGenerator::new(builtin_symbols(), StaticFeed::new()).unwrap();
    let injector = DiscrepancyInjector::new(0.20, true).unwrap();
    let mut rng = SimRng::from_seed(42);

    let internal = generator.generate_at(now, 100, &mut rng);
    let external = injector.inject(&internal, &mut rng);

    let store = DatasetStore::new(dir.path().join("data"));
    store.write_internal(&internal).unwrap();
    store.write_external(&external).unwrap();

    // Read back and diff against the in-memory datasets.
    assert_eq!(store.read_internal().unwrap(), internal);
    assert_eq!(store.read_external().unwrap(), external);

    // Exactly 20 corrupted records, recoverable through the id alone.
    let reloaded = store.read_external().unwrap();
    let mismatches = reloaded
        .iter()
        .filter(|ext| ext.trade != internal.records()[ext.id.0 as usize].trade)
        .count();
    assert_eq!(mismatches, 20);

    // One confirmation per external record.
    let renderer = ConfirmationRenderer::new("External");
    let writer = ConfirmationWriter::new(dir.path().join("confirmations"));
    let written = writer.write_all(&renderer, &reloaded).unwrap();
    assert_eq!(written, 100);
}

#[test]
fn fixed_seed_runs_write_byte_identical_files() {
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();

    let run = |dir: &std::path::Path| {
        let generator = TradeGenerator::new(builtin_symbols(), StaticFeed::new()).unwrap();
        let injector = DiscrepancyInjector::new(0.20, true).unwrap();
        let mut rng = SimRng::from_seed(42);

        let internal = generator.generate_at(now, 50, &mut rng);
        let external = injector.inject(&internal, &mut rng);

        let store = DatasetStore::new(dir);
        store.write_internal(&internal).unwrap();
        store.write_external(&external).unwrap();
        (
            std::fs::read_to_string(store.internal_path()).unwrap(),
            std::fs::read_to_string(store.external_path()).unwrap(),
        )
    };

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let (int_a, ext_a) = run(dir_a.path());
    let (int_b, ext_b) = run(dir_b.path());

    assert_eq!(int_a, int_b);
    assert_eq!(ext_a, ext_b);
}

#[test]
fn zero_count_run_works_end_to_end() {
    let dir = tempfile::tempdir().unwrap();

    let generator = TradeGenerator::new(builtin_symbols(), StaticFeed::new()).unwrap();
    let injector = DiscrepancyInjector::new(0.20, true).unwrap();
    let mut rng = SimRng::from_seed(42);

    let internal = generator.generate(0, &mut rng);
    let external = injector.inject(&internal, &mut rng);

    let store = DatasetStore::new(dir.path());
    store.write_internal(&internal).unwrap();
    store.write_external(&external).unwrap();

    assert!(store.read_internal().unwrap().is_empty());
    assert!(store.read_external().unwrap().is_empty());

    let writer = ConfirmationWriter::new(dir.path().join("confs"));
    let renderer = ConfirmationRenderer::new("External");
    assert_eq!(writer.write_all(&renderer, &external).unwrap(), 0);
}
