use triviabank::db::Db;

/// Fresh file-backed database per test, named by pid and a counter so
/// parallel tests never share state.
pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("triviabank_test_{}_{}.db", std::process::id(), id));
    // Clean up leftovers from previous runs, including the wal
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let url = format!("file:{}", path.display());
    // Local files never need an auth token
    Db::new(url, String::new())
        .await
        .expect("failed to create test database")
}
