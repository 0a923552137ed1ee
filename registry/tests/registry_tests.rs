//! Property-Based Testing for the Token Registry
//!
//! This suite uses proptest to verify critical invariants hold across
//! random inputs, next to plain tests for the documented boundary
//! behavior.
//!
//! Properties tested:
//! - Index consistency (dual indices agree after any mint/transfer mix)
//! - Pagination completeness (pages reconstruct the collection, no
//!   duplicates or gaps)
//! - Payout conservation (returned amounts always sum to the sale price)
//! - Supply accounting (global and per-owner counters)

use anyhow::Result;
use indexmap::IndexMap;
use proptest::prelude::*;

use nft_registry::{
    MemoryEventSink, MemoryMetadataStore, MemoryTokenStore, MintParams, NftEvent, NftRegistry,
    Token, TokenMetadata, TokenRoyalty,
};

type TestRegistry = NftRegistry<MemoryTokenStore, MemoryMetadataStore, MemoryEventSink>;

fn test_registry() -> TestRegistry {
    NftRegistry::with_parts(
        MemoryTokenStore::new(),
        MemoryMetadataStore::new(),
        MemoryEventSink::new(),
    )
}

const OWNERS: [&str; 3] = ["alice.test", "bob.test", "carol.test"];

/// Check the cross-index invariants through the public surface only:
/// every token is enumerated globally exactly once, appears in exactly
/// one owner's page, and the counters agree with the enumerations.
fn assert_registry_consistent(registry: &TestRegistry) {
    let all = registry.nft_tokens(None, 0).expect("global enumeration");
    let total: usize = registry.nft_total_supply().parse().expect("numeric supply");
    assert_eq!(all.len(), total);

    let mut seen = std::collections::HashSet::new();
    for token in &all {
        assert!(seen.insert(token.id.clone()), "duplicate id in global order");
    }

    let mut owned_total = 0usize;
    for owner in OWNERS {
        let page = registry
            .nft_tokens_for_owner(owner, None, 0)
            .expect("owner enumeration");
        let supply: usize = registry
            .nft_supply_for_owner(owner)
            .parse()
            .expect("numeric supply");
        assert_eq!(page.len(), supply);
        owned_total += page.len();
        for token in &page {
            assert_eq!(token.owner_id, owner);
            assert!(seen.contains(&token.id), "owner page has unknown id");
        }
    }
    assert_eq!(owned_total, total, "a token is missing from every owner page");
}

// ========================================
// Supply Accounting
// ========================================

#[test]
fn minting_fifty_tokens_across_two_owners() -> Result<()> {
    let mut registry = test_registry();

    for _ in 0..25 {
        registry.mint(MintParams::new("alice.test"))?;
        registry.mint(MintParams::new("bob.test"))?;
    }

    assert_eq!(registry.nft_total_supply(), "50");
    assert_eq!(registry.nft_supply_for_owner("alice.test"), "25");
    assert_eq!(registry.nft_supply_for_owner("bob.test"), "25");
    assert_registry_consistent(&registry);
    Ok(())
}

// ========================================
// Pagination
// ========================================

#[test]
fn pages_reconstruct_the_collection() -> Result<()> {
    let mut registry = test_registry();
    for i in 0..23 {
        registry.mint(MintParams::new(OWNERS[i % OWNERS.len()]))?;
    }

    let full = registry.nft_tokens(None, 0)?;
    let page_size = 5u64;
    let mut rebuilt: Vec<Token> = Vec::new();
    let mut start = 0u64;
    loop {
        let page = registry.nft_tokens(Some(&start.to_string()), page_size)?;
        if page.is_empty() {
            break;
        }
        rebuilt.extend(page);
        start += page_size;
    }

    assert_eq!(rebuilt, full);
    Ok(())
}

#[test]
fn pagination_boundaries() -> Result<()> {
    let mut registry = test_registry();
    let n = 9u64;
    for _ in 0..n {
        registry.mint(MintParams::new("alice.test"))?;
    }

    // Start at the collection size: empty, not an error
    let past = registry.nft_tokens(Some(&n.to_string()), 5)?;
    assert!(past.is_empty());

    // Oversized limit is clipped to what remains
    let all = registry.nft_tokens(Some("0"), n + 100)?;
    assert_eq!(all.len() as u64, n);

    // Same rules per owner
    let owner_past = registry.nft_tokens_for_owner("alice.test", Some(&n.to_string()), 5)?;
    assert!(owner_past.is_empty());
    Ok(())
}

// ========================================
// Transfer Semantics
// ========================================

#[test]
fn transfer_of_unknown_token_changes_nothing() -> Result<()> {
    let mut registry = test_registry();
    registry.mint(MintParams::new("alice.test"))?;
    registry.mint(MintParams::new("bob.test"))?;

    let tokens_before = registry.nft_tokens(None, 0)?;
    let events_before = registry.events().events().len();

    registry.transfer("no-such-token", "bob.test")?;

    assert_eq!(registry.nft_tokens(None, 0)?, tokens_before);
    assert_eq!(registry.nft_total_supply(), "2");
    assert_eq!(registry.nft_supply_for_owner("alice.test"), "1");
    assert_eq!(registry.nft_supply_for_owner("bob.test"), "1");
    assert_eq!(registry.events().events().len(), events_before);
    Ok(())
}

#[test]
fn transfer_reindexes_ownership() -> Result<()> {
    let mut registry = test_registry();
    let token = registry.mint(MintParams::new("alice.test"))?;
    registry.mint(MintParams::new("alice.test"))?;

    registry.transfer(&token.id, "bob.test")?;

    let alice_ids: Vec<_> = registry
        .nft_tokens_for_owner("alice.test", None, 0)?
        .into_iter()
        .map(|t| t.id)
        .collect();
    let bob_ids: Vec<_> = registry
        .nft_tokens_for_owner("bob.test", None, 0)?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert!(!alice_ids.contains(&token.id));
    assert!(bob_ids.contains(&token.id));
    assert_eq!(registry.nft_total_supply(), "2");
    assert_registry_consistent(&registry);
    Ok(())
}

#[test]
fn transfer_emits_audit_event() -> Result<()> {
    let mut registry = test_registry();
    let token = registry.mint(MintParams::new("alice.test"))?;
    registry.events_mut().drain();

    registry.transfer(&token.id, "bob.test")?;

    let events = registry.events().events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        NftEvent::NftTransfer(logs) => {
            assert_eq!(logs[0].old_owner_id, "alice.test");
            assert_eq!(logs[0].new_owner_id, "bob.test");
            assert_eq!(logs[0].token_ids, vec![token.id]);
        }
        other => panic!("unexpected event {:?}", other),
    }
    Ok(())
}

// ========================================
// Royalty Payouts
// ========================================

#[test]
fn payout_splits_the_documented_example() -> Result<()> {
    let mut registry = test_registry();
    let royalty = TokenRoyalty::new(2_500, IndexMap::from([("a.test".to_string(), 2_500)]));
    let token = registry.mint(
        MintParams::new("owner.test")
            .with_metadata(TokenMetadata {
                title: Some("royal".to_string()),
                ..Default::default()
            })
            .with_royalty(royalty),
    )?;

    let payout = registry.nft_payout(&token.id, 10_000_000_000)?;

    assert_eq!(payout.payout["a.test"], 2_500_000_000);
    assert_eq!(payout.payout["owner.test"], 7_500_000_000);
    assert_eq!(payout.total(), 10_000_000_000);
    Ok(())
}

// Property 1: Index consistency under arbitrary mint/transfer sequences
proptest! {
    #[test]
    fn registry_indices_stay_consistent(
        ops in prop::collection::vec((0usize..8, 0usize..OWNERS.len()), 1..60),
    ) {
        let mut registry = test_registry();
        let mut minted: Vec<String> = Vec::new();

        for (selector, owner_idx) in ops {
            let owner = OWNERS[owner_idx];
            if selector < 3 || minted.is_empty() {
                let token = registry.mint(MintParams::new(owner)).unwrap();
                minted.push(token.id);
            } else {
                // Transfer an existing token, or exercise the no-op path
                let token_id = if selector == 7 {
                    "ghost-token".to_string()
                } else {
                    minted[selector % minted.len()].clone()
                };
                registry.transfer(&token_id, owner).unwrap();
            }
            assert_registry_consistent(&registry);
        }

        prop_assert_eq!(
            registry.nft_total_supply(),
            minted.len().to_string()
        );
    }
}

// Property 2: Pagination completeness for arbitrary sizes and pages
proptest! {
    #[test]
    fn pages_never_drop_or_duplicate(
        n in 0u64..50,
        page_size in 1u64..17,
    ) {
        let mut registry = test_registry();
        for i in 0..n {
            registry
                .mint(MintParams::new(OWNERS[(i % 3) as usize]))
                .unwrap();
        }

        let full = registry.nft_tokens(None, 0).unwrap();
        prop_assert_eq!(full.len() as u64, n);

        let mut rebuilt: Vec<Token> = Vec::new();
        let mut start = 0u64;
        while start < n {
            let page = registry
                .nft_tokens(Some(&start.to_string()), page_size)
                .unwrap();
            prop_assert!(page.len() as u64 <= page_size);
            rebuilt.extend(page);
            start += page_size;
        }
        prop_assert_eq!(rebuilt, full);
    }
}

// Property 3: Payout conservation for arbitrary prices and splits
proptest! {
    #[test]
    fn payouts_conserve_the_sale_price(
        price in 0u128..=u64::MAX as u128,
        shares in prop::collection::vec(0u16..=1_000, 0..8),
    ) {
        let mut registry = test_registry();

        let split: IndexMap<String, u16> = shares
            .iter()
            .enumerate()
            .map(|(i, share)| (format!("holder-{}.test", i), *share))
            .collect();
        let royalty = TokenRoyalty::new(10_000, split);
        let token = registry
            .mint(MintParams::new("owner.test").with_royalty(royalty))
            .unwrap();

        let payout = registry.nft_payout(&token.id, price).unwrap();
        prop_assert_eq!(payout.total(), price);
    }
}

// Property 4: Transfers preserve total supply and move exactly one token
proptest! {
    #[test]
    fn transfers_conserve_supply(
        n in 1u64..30,
        moves in prop::collection::vec((0u64..30, 0usize..OWNERS.len()), 0..40),
    ) {
        let mut registry = test_registry();
        for i in 0..n {
            registry
                .mint(MintParams::new(OWNERS[(i % 3) as usize]))
                .unwrap();
        }

        for (token_idx, owner_idx) in moves {
            registry
                .transfer(&(token_idx % n).to_string(), OWNERS[owner_idx])
                .unwrap();
            prop_assert_eq!(registry.nft_total_supply(), n.to_string());
        }
        assert_registry_consistent(&registry);
    }
}
