//! Live RPC integration test.
//!
//! Needs a reachable endpoint. Run with:
//! ```bash
//! ETH_RPC_URL=https://... cargo test -p eth-balance --test live -- --ignored
//! ```

use alloy_primitives::address;
use balance::{monitor::BalanceMonitor, Monitor};

#[tokio::test]
#[ignore = "needs a live RPC endpoint in ETH_RPC_URL"]
async fn queries_a_live_endpoint() {
    let url = std::env::var("ETH_RPC_URL").expect("ETH_RPC_URL not set");

    let provider = client::connect(&url).await.expect("Failed to connect");
    let monitor = BalanceMonitor::new(provider);

    // Beacon deposit contract, never empty on mainnet
    let deposit = address!("0x00000000219ab540356cBB839Cbe05303d7705Fa");
    let balance = monitor
        .native_balance(deposit)
        .await
        .expect("balance query failed");

    assert_eq!(balance.holder, deposit);
    assert!(balance.ether() >= 0.0);
}
