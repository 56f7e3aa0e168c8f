mod common;

use common::{dead_base_url, spawn_backend};
use tokenwatch::{ApiError, Tag, WalletStoreClient};

#[tokio::test]
async fn add_then_list_returns_single_watchlist_record() -> anyhow::Result<()> {
    let backend = spawn_backend().await?;
    let client = WalletStoreClient::new(backend.base_url.clone());

    assert!(client.list_wallets().await?.is_empty());

    let message = client.add_wallet("0xABC").await?;
    assert!(message.expect("backend sends a message").contains("0xABC"));

    let wallets = client.list_wallets().await?;
    assert_eq!(wallets.len(), 1);
    assert_eq!(wallets[0].address, "0xABC");
    assert_eq!(wallets[0].tag, Tag::Watchlist);
    Ok(())
}

#[tokio::test]
async fn duplicate_add_is_rejected_with_backend_message() -> anyhow::Result<()> {
    let backend = spawn_backend().await?;
    let client = WalletStoreClient::new(backend.base_url.clone());

    client.add_wallet("0x1").await?;
    let err = client.add_wallet("0x1").await.unwrap_err();
    match &err {
        ApiError::Validation(message) => assert!(message.contains("already")),
        other => panic!("expected validation error, got {:?}", other),
    }

    // A failed add leaves the collection unchanged.
    assert_eq!(client.list_wallets().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_tag_overwrites_and_survives_refetch() -> anyhow::Result<()> {
    let backend = spawn_backend().await?;
    let client = WalletStoreClient::new(backend.base_url.clone());

    client.add_wallet("0x1").await?;
    client.update_wallet_tag("0x1", &Tag::Store).await?;
    assert_eq!(client.list_wallets().await?[0].tag, Tag::Store);

    // Idempotent: re-setting the same tag succeeds.
    client.update_wallet_tag("0x1", &Tag::Store).await?;
    assert_eq!(client.list_wallets().await?[0].tag, Tag::Store);

    // Unrecognized tags round-trip without being dropped.
    let archived = Tag::Other("Archived".to_string());
    client.update_wallet_tag("0x1", &archived).await?;
    assert_eq!(client.list_wallets().await?[0].tag, archived);
    Ok(())
}

#[tokio::test]
async fn update_tag_on_unknown_address_propagates_error() -> anyhow::Result<()> {
    let backend = spawn_backend().await?;
    let client = WalletStoreClient::new(backend.base_url.clone());

    let err = client
        .update_wallet_tag("0xMISSING", &Tag::Store)
        .await
        .unwrap_err();
    assert!(err.user_message("fallback").contains("not found"));
    Ok(())
}

#[tokio::test]
async fn delete_removes_record_and_missing_delete_propagates() -> anyhow::Result<()> {
    let backend = spawn_backend().await?;
    let client = WalletStoreClient::new(backend.base_url.clone());

    client.add_wallet("0x1").await?;
    client.delete_wallet("0x1").await?;
    assert!(client.list_wallets().await?.is_empty());

    // Deleting again is a backend error, not a silent success.
    let err = client.delete_wallet("0x1").await.unwrap_err();
    assert!(err.user_message("fallback").contains("not found"));
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = WalletStoreClient::new(dead_base_url());
    let err = client.list_wallets().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}
