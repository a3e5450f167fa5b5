//! Paged bump arena with scoped rollback.
//!
//! An [`Arena`] owns a chain of fixed-capacity pages. Allocation bumps into
//! the current page and opens a new page when it is full; pages never
//! reallocate, so an [`Addr`] stays valid for as long as the allocation is
//! live. Large blocks get an *exclusive* page sized exactly for them, which
//! can be handed back with [`Arena::reclaim`] and recycled by the next
//! exclusive allocation that fits.
//!
//! # Regions
//!
//! A [`Checkpoint`] records the allocation cursor. Rolling back to it
//! truncates the current page and drops every page opened since, so the cost
//! is proportional to the number of pages discarded, not to the number of
//! values. [`Region`] wraps this in a guard: it rolls back when dropped
//! unless [`Region::keep`] was called, which covers every early-return path.
//!
//! ```text
//! let mut region = arena.region();
//! let a = region.alloc(1);
//! if failed {
//!     return Err(..);  // region dropped: `a` is gone
//! }
//! region.keep();        // `a` survives
//! ```

use std::ops::{Deref, DerefMut};

/// Slots per shared page unless configured otherwise.
pub const DEFAULT_PAGE_CAPACITY: usize = 1024;

/// Location of one value inside an arena.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Addr {
    page: u32,
    offset: u32,
}

impl Addr {
    #[inline]
    fn new(page: usize, offset: usize) -> Self {
        Addr {
            page: index_to_u32(page),
            offset: index_to_u32(offset),
        }
    }

    #[inline]
    pub const fn page(self) -> usize {
        self.page as usize
    }

    #[inline]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }
}

/// A contiguous run of values inside a single page.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Block {
    addr: Addr,
    len: u32,
}

impl Block {
    #[inline]
    pub const fn addr(self) -> Addr {
        self.addr
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The first `len` slots of this block.
    #[inline]
    pub fn prefix(self, len: usize) -> Block {
        Block {
            addr: self.addr,
            len: index_to_u32(len.min(self.len())),
        }
    }
}

#[track_caller]
fn index_to_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or_else(|_| panic!("arena index {index} exceeds u32::MAX"))
}

struct Page<T> {
    items: Vec<T>,
    capacity: usize,
    exclusive: bool,
}

impl<T> Page<T> {
    fn shared(capacity: usize) -> Self {
        Page {
            items: Vec::with_capacity(capacity),
            capacity,
            exclusive: false,
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }
}

/// Saved allocation cursor, see [`Arena::checkpoint`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pages: usize,
    current: Option<usize>,
    offset: usize,
}

/// Paged bump allocator for `Copy` values.
pub struct Arena<T> {
    pages: Vec<Page<T>>,
    /// Page that bump allocation currently targets.
    current: Option<usize>,
    page_capacity: usize,
    /// Reclaimed exclusive pages whose storage can be recycled.
    free: Vec<usize>,
}

impl<T: Copy> Arena<T> {
    pub fn new() -> Self {
        Self::with_page_capacity(DEFAULT_PAGE_CAPACITY)
    }

    /// Arena whose shared pages hold `page_capacity` values each.
    ///
    /// # Panics
    /// Panics if `page_capacity` is zero.
    pub fn with_page_capacity(page_capacity: usize) -> Self {
        assert!(page_capacity > 0, "arena pages must hold at least one value");
        Arena {
            pages: Vec::new(),
            current: None,
            page_capacity,
            free: Vec::new(),
        }
    }

    #[inline]
    pub fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    /// Blocks longer than this are placed in exclusive pages.
    #[inline]
    pub fn max_shared_block(&self) -> usize {
        (self.page_capacity / 2).max(1)
    }

    /// Store `value`, returning its address.
    pub fn alloc(&mut self, value: T) -> Addr {
        let page = self.bump_page(1);
        let items = &mut self.pages[page].items;
        let offset = items.len();
        items.push(value);
        Addr::new(page, offset)
    }

    /// Allocate `len` contiguous slots, each initialized to `fill`.
    pub fn alloc_block(&mut self, len: usize, fill: T) -> Block {
        if len > self.max_shared_block() {
            return self.exclusive_page(len, fill);
        }
        let page = self.bump_page(len);
        let items = &mut self.pages[page].items;
        let offset = items.len();
        items.resize(offset + len, fill);
        Block {
            addr: Addr::new(page, offset),
            len: index_to_u32(len),
        }
    }

    /// Allocate a page sized exactly for one block of `len` slots.
    ///
    /// Storage of a previously reclaimed exclusive page is recycled when one
    /// is large enough.
    pub fn exclusive_page(&mut self, len: usize, fill: T) -> Block {
        let recycled = self
            .free
            .iter()
            .position(|&page| self.pages[page].items.capacity() >= len)
            .map(|slot| self.free.swap_remove(slot));

        let mut items = match recycled {
            Some(page) => std::mem::take(&mut self.pages[page].items),
            None => Vec::with_capacity(len),
        };
        items.clear();
        items.resize(len, fill);

        let page = self.pages.len();
        self.pages.push(Page {
            items,
            capacity: len,
            exclusive: true,
        });
        Block {
            addr: Addr::new(page, 0),
            len: index_to_u32(len),
        }
    }

    /// Return an exclusive page to the arena. Everything in it becomes
    /// unreachable. Returns `false` for shared pages, which are only released
    /// with the arena or by rollback.
    pub fn reclaim(&mut self, page: usize) -> bool {
        match self.pages.get_mut(page) {
            Some(p) if p.exclusive && !self.free.contains(&page) => {
                p.items.clear();
                self.free.push(page);
                true
            }
            _ => false,
        }
    }

    /// Whether `page` was allocated with [`Arena::exclusive_page`].
    pub fn is_exclusive(&self, page: usize) -> bool {
        self.pages.get(page).is_some_and(|p| p.exclusive)
    }

    /// Number of reclaimed exclusive pages waiting to be recycled.
    pub fn reclaimed_pages(&self) -> usize {
        self.free.len()
    }

    #[track_caller]
    pub fn get(&self, addr: Addr) -> &T {
        match self
            .pages
            .get(addr.page())
            .and_then(|p| p.items.get(addr.offset()))
        {
            Some(value) => value,
            None => panic!("{addr:?} is not live in this arena"),
        }
    }

    #[track_caller]
    pub fn get_mut(&mut self, addr: Addr) -> &mut T {
        match self
            .pages
            .get_mut(addr.page())
            .and_then(|p| p.items.get_mut(addr.offset()))
        {
            Some(value) => value,
            None => panic!("{addr:?} is not live in this arena"),
        }
    }

    #[track_caller]
    pub fn block(&self, block: Block) -> &[T] {
        if block.is_empty() {
            return &[];
        }
        let start = block.addr.offset();
        match self
            .pages
            .get(block.addr.page())
            .and_then(|p| p.items.get(start..start + block.len()))
        {
            Some(values) => values,
            None => panic!("{block:?} is not live in this arena"),
        }
    }

    #[track_caller]
    pub fn block_mut(&mut self, block: Block) -> &mut [T] {
        if block.is_empty() {
            return &mut [];
        }
        let start = block.addr.offset();
        match self
            .pages
            .get_mut(block.addr.page())
            .and_then(|p| p.items.get_mut(start..start + block.len()))
        {
            Some(values) => values,
            None => panic!("{block:?} is not live in this arena"),
        }
    }

    /// Copy the first `min(src.len, dst.len)` values of `src` into `dst`.
    #[track_caller]
    pub fn copy_block(&mut self, src: Block, dst: Block) {
        let len = src.len().min(dst.len());
        if len == 0 {
            return;
        }
        let (src_page, src_start) = (src.addr.page(), src.addr.offset());
        let (dst_page, dst_start) = (dst.addr.page(), dst.addr.offset());
        let src_range = src_start..src_start + len;
        let dst_range = dst_start..dst_start + len;

        match src_page.cmp(&dst_page) {
            std::cmp::Ordering::Equal => {
                self.pages[src_page].items.copy_within(src_range, dst_start);
            }
            std::cmp::Ordering::Less => {
                let (head, tail) = self.pages.split_at_mut(dst_page);
                tail[0].items[dst_range].copy_from_slice(&head[src_page].items[src_range]);
            }
            std::cmp::Ordering::Greater => {
                let (head, tail) = self.pages.split_at_mut(src_page);
                head[dst_page].items[dst_range].copy_from_slice(&tail[0].items[src_range]);
            }
        }
    }

    /// Number of live values across all pages.
    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.items.is_empty())
    }

    /// Number of pages in the chain, shared and exclusive.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Record the current allocation cursor.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pages: self.pages.len(),
            current: self.current,
            offset: self.current.map_or(0, |page| self.pages[page].items.len()),
        }
    }

    /// Discard everything allocated since `checkpoint`.
    ///
    /// Only allocation is undone. A page that existed at the checkpoint and
    /// was reclaimed since stays reclaimed with its contents gone, and a
    /// reclaimed page whose storage was recycled since is not returned to
    /// the free list.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        debug_assert!(
            checkpoint.pages <= self.pages.len(),
            "rollback to a checkpoint newer than the arena"
        );
        self.pages.truncate(checkpoint.pages);
        self.free.retain(|&page| page < checkpoint.pages);
        self.current = checkpoint.current;
        if let Some(page) = checkpoint.current {
            self.pages[page].items.truncate(checkpoint.offset);
        }
    }

    /// Open a region: a guard that rolls the arena back when dropped.
    pub fn region(&mut self) -> Region<'_, T> {
        let checkpoint = self.checkpoint();
        Region {
            arena: self,
            checkpoint,
            kept: false,
        }
    }

    /// Page with room for `len` more values, opening one if needed.
    fn bump_page(&mut self, len: usize) -> usize {
        if let Some(page) = self.current {
            if self.pages[page].remaining() >= len {
                return page;
            }
        }
        let page = self.pages.len();
        self.pages.push(Page::shared(self.page_capacity.max(len)));
        self.current = Some(page);
        page
    }
}

impl<T: Copy> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("pages", &self.pages.len())
            .field("current", &self.current)
            .field("page_capacity", &self.page_capacity)
            .field("free", &self.free)
            .finish()
    }
}

/// Scoped checkpoint over an arena.
///
/// Derefs to the arena. Dropping the region rolls back every allocation made
/// through it; [`Region::keep`] commits them instead.
///
/// Reclaiming is not an allocation: [`Arena::reclaim`] calls and free-list
/// recycling of pages older than the region survive its rollback.
pub struct Region<'a, T: Copy> {
    arena: &'a mut Arena<T>,
    checkpoint: Checkpoint,
    kept: bool,
}

impl<T: Copy> Region<'_, T> {
    /// Keep everything allocated in this region.
    pub fn keep(mut self) {
        self.kept = true;
    }

    /// Roll back now. Equivalent to dropping the region.
    pub fn release(self) {}

    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }
}

impl<T: Copy> Deref for Region<'_, T> {
    type Target = Arena<T>;

    fn deref(&self) -> &Arena<T> {
        self.arena
    }
}

impl<T: Copy> DerefMut for Region<'_, T> {
    fn deref_mut(&mut self) -> &mut Arena<T> {
        self.arena
    }
}

impl<T: Copy> Drop for Region<'_, T> {
    fn drop(&mut self) {
        if !self.kept {
            self.arena.rollback(self.checkpoint);
        }
    }
}

#[cfg(test)]
mod tests;
