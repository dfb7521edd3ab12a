use chrono::Duration;
use gassplit::cache::CacheStore;
use gassplit::price::AverageGasPrice;

fn temp_store() -> (tempfile::TempDir, CacheStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = CacheStore::at(dir.path().to_path_buf()).expect("cache store");
    (dir, store)
}

#[test]
fn test_average_price_roundtrips_through_cache() {
    let (_dir, store) = temp_store();
    let prices = AverageGasPrice {
        finland: Some(1.85),
        helsinki: Some(1.95),
    };

    store.store("average_gas_price", &prices).unwrap();
    let loaded: Option<AverageGasPrice> = store.load("average_gas_price", Duration::hours(8));

    assert_eq!(loaded, Some(prices));
}

#[test]
fn test_partial_price_roundtrips() {
    let (_dir, store) = temp_store();
    let prices = AverageGasPrice {
        finland: None,
        helsinki: Some(1.95),
    };

    store.store("average_gas_price", &prices).unwrap();
    let loaded: Option<AverageGasPrice> = store.load("average_gas_price", Duration::hours(8));

    assert_eq!(loaded, Some(prices));
}

#[test]
fn test_expired_entry_forces_refetch() {
    let (_dir, store) = temp_store();
    let prices = AverageGasPrice {
        finland: Some(1.85),
        helsinki: None,
    };

    store.store("average_gas_price", &prices).unwrap();
    let loaded: Option<AverageGasPrice> =
        store.load("average_gas_price", Duration::seconds(-1));

    assert_eq!(loaded, None);
}

#[test]
fn test_clear_empties_the_store() {
    let (_dir, store) = temp_store();

    store.store("a", &1u32).unwrap();
    store.store("b", &2u32).unwrap();
    store.clear().unwrap();

    assert_eq!(store.load::<u32>("a", Duration::hours(1)), None);
    assert_eq!(store.load::<u32>("b", Duration::hours(1)), None);
}

#[test]
fn test_stores_are_isolated_by_directory() {
    let (_dir_a, store_a) = temp_store();
    let (_dir_b, store_b) = temp_store();

    store_a.store("entry", &1u32).unwrap();

    assert_eq!(store_b.load::<u32>("entry", Duration::hours(1)), None);
}
