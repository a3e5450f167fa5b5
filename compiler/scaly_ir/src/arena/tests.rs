use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Allocation ===

#[test]
fn alloc_and_get() {
    let mut arena: Arena<u32> = Arena::new();
    let a = arena.alloc(1);
    let b = arena.alloc(2);
    assert_eq!(*arena.get(a), 1);
    assert_eq!(*arena.get(b), 2);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.page_count(), 1);
}

#[test]
fn full_page_extends_chain() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let addrs: Vec<Addr> = (0..10).map(|i| arena.alloc(i)).collect();
    assert_eq!(arena.page_count(), 3);
    for (i, addr) in addrs.iter().enumerate() {
        assert_eq!(*arena.get(*addr) as usize, i);
    }
}

#[test]
fn addresses_are_stable_across_growth() {
    let mut arena: Arena<u64> = Arena::with_page_capacity(2);
    let first = arena.alloc(7);
    for i in 0..100 {
        arena.alloc(i);
    }
    assert_eq!(*arena.get(first), 7);
}

#[test]
fn get_mut_writes_through() {
    let mut arena: Arena<u32> = Arena::new();
    let a = arena.alloc(1);
    *arena.get_mut(a) = 5;
    assert_eq!(*arena.get(a), 5);
}

#[test]
fn block_is_filled_and_contiguous() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(8);
    arena.alloc(99);
    let block = arena.alloc_block(3, 0);
    assert_eq!(arena.block(block), &[0, 0, 0]);
    arena.block_mut(block)[1] = 4;
    assert_eq!(arena.block(block), &[0, 4, 0]);
    assert_eq!(block.addr().page(), 0);
}

#[test]
fn block_that_does_not_fit_opens_page() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(8);
    for i in 0..6 {
        arena.alloc(i);
    }
    let block = arena.alloc_block(4, 0);
    assert_eq!(block.addr().page(), 1);
    assert_eq!(block.addr().offset(), 0);
}

#[test]
fn empty_block_is_empty_slice() {
    let arena: Arena<u32> = Arena::new();
    assert!(arena.block(Block::default()).is_empty());
}

#[test]
#[should_panic(expected = "is not live")]
fn foreign_address_panics() {
    let mut other: Arena<u32> = Arena::new();
    other.alloc(1);
    other.alloc(2);
    let addr = other.alloc(3);
    let arena: Arena<u32> = Arena::new();
    let _ = arena.get(addr);
}

// === Exclusive pages ===

#[test]
fn large_block_gets_exclusive_page() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(8);
    let small = arena.alloc_block(4, 0);
    let large = arena.alloc_block(5, 0);
    assert!(!arena.is_exclusive(small.addr().page()));
    assert!(arena.is_exclusive(large.addr().page()));
    assert_eq!(large.len(), 5);
}

#[test]
fn exclusive_page_does_not_disturb_bump_page() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let a = arena.alloc(1);
    arena.exclusive_page(10, 0);
    let b = arena.alloc(2);
    assert_eq!(a.page(), b.page());
    assert_eq!(b.offset(), 1);
}

#[test]
fn reclaimed_exclusive_page_is_recycled() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let first = arena.exclusive_page(16, 1);
    assert!(arena.reclaim(first.addr().page()));
    assert_eq!(arena.reclaimed_pages(), 1);
    assert_eq!(arena.len(), 0);

    let second = arena.exclusive_page(8, 2);
    assert_eq!(arena.reclaimed_pages(), 0);
    assert_eq!(arena.block(second), &[2; 8]);
}

#[test]
fn shared_pages_are_not_reclaimed() {
    let mut arena: Arena<u32> = Arena::new();
    let a = arena.alloc(1);
    assert!(!arena.reclaim(a.page()));
    assert_eq!(*arena.get(a), 1);
}

#[test]
fn reclaim_twice_is_noop() {
    let mut arena: Arena<u32> = Arena::new();
    let block = arena.exclusive_page(4, 0);
    assert!(arena.reclaim(block.addr().page()));
    assert!(!arena.reclaim(block.addr().page()));
    assert_eq!(arena.reclaimed_pages(), 1);
}

// === Copy ===

#[test]
fn copy_block_between_pages() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let src = arena.alloc_block(2, 0);
    arena.block_mut(src).copy_from_slice(&[8, 9]);
    let dst = arena.exclusive_page(4, 0);
    arena.copy_block(src, dst);
    assert_eq!(arena.block(dst), &[8, 9, 0, 0]);

    let back = arena.alloc_block(2, 0);
    arena.copy_block(dst, back);
    assert_eq!(arena.block(back), &[8, 9]);
}

#[test]
fn copy_block_within_page() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(8);
    let src = arena.alloc_block(2, 3);
    let dst = arena.alloc_block(2, 0);
    arena.copy_block(src, dst);
    assert_eq!(arena.block(dst), &[3, 3]);
}

// === Regions ===

#[test]
fn rollback_discards_allocations() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    arena.alloc(1);
    let checkpoint = arena.checkpoint();
    for i in 0..10 {
        arena.alloc(i);
    }
    arena.exclusive_page(20, 0);
    arena.rollback(checkpoint);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.page_count(), 1);
    assert_eq!(arena.checkpoint(), checkpoint);
}

#[test]
fn rollback_then_alloc_reuses_slots() {
    let mut arena: Arena<u32> = Arena::new();
    let checkpoint = arena.checkpoint();
    let a = arena.alloc(1);
    arena.rollback(checkpoint);
    let b = arena.alloc(2);
    assert_eq!(a, b);
    assert_eq!(*arena.get(b), 2);
}

#[test]
fn region_rolls_back_on_drop() {
    let mut arena: Arena<u32> = Arena::new();
    arena.alloc(1);
    {
        let mut region = arena.region();
        region.alloc(2);
        region.alloc(3);
        assert_eq!(region.len(), 3);
    }
    assert_eq!(arena.len(), 1);
}

#[test]
fn region_keep_commits() {
    let mut arena: Arena<u32> = Arena::new();
    let addr = {
        let mut region = arena.region();
        let addr = region.alloc(2);
        region.keep();
        addr
    };
    assert_eq!(*arena.get(addr), 2);
}

#[test]
fn region_release_is_explicit_rollback() {
    let mut arena: Arena<u32> = Arena::new();
    let mut region = arena.region();
    region.alloc(2);
    region.release();
    assert!(arena.is_empty());
}

#[test]
fn nested_regions() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(2);
    let mut outer = arena.region();
    let kept = outer.alloc(1);
    {
        let mut inner = outer.region();
        inner.alloc(2);
        inner.alloc(3);
        inner.alloc(4);
    }
    assert_eq!(outer.len(), 1);
    assert_eq!(*outer.get(kept), 1);
    outer.keep();
    assert_eq!(arena.len(), 1);
}

#[test]
fn rollback_keeps_reclaims_of_older_pages() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let old = arena.exclusive_page(8, 1);
    {
        let mut region = arena.region();
        assert!(region.reclaim(old.addr().page()));
    }
    assert_eq!(arena.page_count(), 1);
    assert_eq!(arena.reclaimed_pages(), 1);
    assert_eq!(arena.len(), 0);
}

#[test]
fn rollback_drops_recycled_storage_of_older_pages() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let old = arena.exclusive_page(8, 1);
    assert!(arena.reclaim(old.addr().page()));
    {
        let mut region = arena.region();
        region.exclusive_page(6, 2);
        assert_eq!(region.reclaimed_pages(), 0);
    }
    assert_eq!(arena.page_count(), 1);
    assert_eq!(arena.reclaimed_pages(), 0);
}

fn early_exit(arena: &mut Arena<u32>, fail: bool) -> Result<Addr, ()> {
    let mut region = arena.region();
    let addr = region.alloc(10);
    if fail {
        return Err(());
    }
    region.keep();
    Ok(addr)
}

#[test]
fn region_rolls_back_on_early_return() {
    let mut arena: Arena<u32> = Arena::new();
    assert!(early_exit(&mut arena, true).is_err());
    assert!(arena.is_empty());
    assert!(early_exit(&mut arena, false).is_ok());
    assert_eq!(arena.len(), 1);
}

#[test]
fn rollback_forgets_reclaimed_pages_it_discards() {
    let mut arena: Arena<u32> = Arena::with_page_capacity(4);
    let checkpoint = arena.checkpoint();
    let block = arena.exclusive_page(8, 0);
    arena.reclaim(block.addr().page());
    arena.rollback(checkpoint);
    assert_eq!(arena.reclaimed_pages(), 0);
    assert_eq!(arena.page_count(), 0);
}

proptest! {
    #[test]
    fn rollback_restores_contents(
        before in proptest::collection::vec(any::<u32>(), 0..50),
        after in proptest::collection::vec(any::<u32>(), 0..50),
        capacity in 1usize..8,
    ) {
        let mut arena: Arena<u32> = Arena::with_page_capacity(capacity);
        let addrs: Vec<Addr> = before.iter().map(|&v| arena.alloc(v)).collect();
        let checkpoint = arena.checkpoint();
        for &v in &after {
            arena.alloc(v);
        }
        arena.rollback(checkpoint);
        prop_assert_eq!(arena.len(), before.len());
        for (addr, value) in addrs.iter().zip(&before) {
            prop_assert_eq!(arena.get(*addr), value);
        }
    }
}
