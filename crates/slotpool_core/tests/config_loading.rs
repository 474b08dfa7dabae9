//! Integration test for loading pool configuration from disk.

use slotpool_core::{PoolConfig, PoolError, SlotPool};

fn temp_config_path(tag: &str) -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("test_slotpool_{tag}_{id}.toml"))
}

#[test]
fn test_load_and_build() {
    let path = temp_config_path("valid");
    std::fs::write(
        &path,
        "[pool]\ncapacity = 32\ntrack_free_cursor = true\n",
    )
    .unwrap();

    let config = PoolConfig::load(&path).unwrap();
    assert_eq!(config, PoolConfig::new(32).with_free_cursor());

    let mut pool: SlotPool<u16> = SlotPool::with_config(config).unwrap();
    assert_eq!(pool.alloc().unwrap().index(), 0);
    assert!(matches!(
        pool.high_water_mark(),
        Err(PoolError::UnsupportedOperation(_))
    ));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_rejects_bad_toml() {
    let path = temp_config_path("invalid");
    std::fs::write(&path, "[pool\ncapacity = ").unwrap();

    let err = PoolConfig::load(&path).unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(_)));

    std::fs::remove_file(&path).ok();
}
