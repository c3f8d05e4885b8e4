use rosetta_storage::{
    store_unique_key, Database, DatabaseTransaction, Error, MemoryDatabase, RocksDatabase,
};

async fn rejects_duplicates<D: Database>(db: &D) {
    let mut txn = db.transaction();
    store_unique_key(&mut txn, b"tx/0xabc", b"block 1".to_vec()).await.unwrap();

    // staged write is already visible to the same transaction
    let err = store_unique_key(&mut txn, b"tx/0xabc", b"block 2".to_vec())
        .await
        .unwrap_err();
    assert!(err.is_duplicate_key());
    txn.commit().await.unwrap();

    let mut txn = db.transaction();
    let err = store_unique_key(&mut txn, b"tx/0xabc", b"block 3".to_vec())
        .await
        .unwrap_err();
    match err {
        Error::DuplicateKey(key) => assert_eq!(key, "tx/0xabc"),
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(txn.get(b"tx/0xabc").await.unwrap(), Some(b"block 1".to_vec()));

    store_unique_key(&mut txn, b"tx/0xdef", b"block 3".to_vec()).await.unwrap();
    txn.commit().await.unwrap();
    assert_eq!(
        db.transaction().get(b"tx/0xdef").await.unwrap(),
        Some(b"block 3".to_vec())
    );
}

async fn rejects_overlapping_writers<D: Database>(db: &D) {
    let mut first = db.transaction();
    let mut second = db.transaction();

    // neither transaction sees the other's staged write
    store_unique_key(&mut first, b"tx/0xabc", b"first".to_vec()).await.unwrap();
    store_unique_key(&mut second, b"tx/0xabc", b"second".to_vec()).await.unwrap();

    first.commit().await.unwrap();
    match second.commit().await.unwrap_err() {
        Error::DuplicateKey(key) => assert_eq!(key, "tx/0xabc"),
        other => panic!("unexpected error: {}", other),
    }

    assert_eq!(
        db.transaction().get(b"tx/0xabc").await.unwrap(),
        Some(b"first".to_vec())
    );
}

#[tokio::test]
async fn test_memory_database_unique_keys() {
    let _ = env_logger::builder().is_test(true).try_init();
    rejects_duplicates(&MemoryDatabase::new()).await;
}

#[tokio::test]
async fn test_rocks_database_unique_keys() {
    let _ = env_logger::builder().is_test(true).try_init();
    let db = RocksDatabase::create_in_memory().unwrap();
    rejects_duplicates(&db).await;
}

#[tokio::test]
async fn test_memory_database_overlapping_writers() {
    rejects_overlapping_writers(&MemoryDatabase::new()).await;
}

#[tokio::test]
async fn test_rocks_database_overlapping_writers() {
    let db = RocksDatabase::create_in_memory().unwrap();
    rejects_overlapping_writers(&db).await;
}

#[tokio::test]
async fn test_concurrent_writers_store_key_once() {
    let db = MemoryDatabase::new();

    let handles = (0..8)
        .map(|writer: u8| {
            let db = db.clone();
            tokio::spawn(async move {
                let mut txn = db.transaction();
                store_unique_key(&mut txn, b"genesis", vec![writer]).await?;
                txn.commit().await
            })
        })
        .collect::<Vec<_>>();

    let mut committed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => committed += 1,
            Err(err) => assert!(err.is_duplicate_key()),
        }
    }

    assert_eq!(committed, 1);
    assert_eq!(db.len().await, 1);
}

#[tokio::test]
async fn test_discarded_key_can_be_stored_again() {
    let db = MemoryDatabase::new();

    let mut txn = db.transaction();
    store_unique_key(&mut txn, b"k", b"first".to_vec()).await.unwrap();
    txn.discard().await.unwrap();

    let mut txn = db.transaction();
    store_unique_key(&mut txn, b"k", b"second".to_vec()).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(db.transaction().get(b"k").await.unwrap(), Some(b"second".to_vec()));
}

#[test]
fn test_duplicate_key_message() {
    let err = Error::duplicate_key(b"balance/addr");
    assert_eq!(err.to_string(), "duplicate key balance/addr found");
}
