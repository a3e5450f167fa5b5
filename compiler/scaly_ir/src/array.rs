//! Growable array whose slots live in an [`Arena`].
//!
//! The array itself is a small handle (block + length); the arena holds the
//! storage. Capacity starts at one on the first push and doubles whenever the
//! array is full. Growth copies into a fresh block; when the outgrown block
//! sat in an exclusive page, that page is reclaimed immediately, otherwise it
//! stays with its page until the arena releases it.

use crate::arena::{Arena, Block};
use std::marker::PhantomData;

#[derive(Debug)]
pub struct Array<T> {
    block: Option<Block>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> Clone for Array<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Array<T> {}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array {
            block: None,
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T: Copy + Default> Array<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots reserved in the arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.map_or(0, Block::len)
    }

    /// Append `item`, growing the backing block when full.
    pub fn push(&mut self, arena: &mut Arena<T>, item: T) {
        let block = match self.block {
            None => {
                let block = arena.alloc_block(1, T::default());
                self.block = Some(block);
                block
            }
            Some(block) if self.len == block.len() => self.reallocate(arena, block.len() * 2),
            Some(block) => block,
        };
        arena.block_mut(block)[self.len] = item;
        self.len += 1;
    }

    /// Element at `index`, or `None` past the end.
    pub fn element_at(&self, arena: &Arena<T>, index: usize) -> Option<T> {
        if index < self.len {
            self.as_slice(arena).get(index).copied()
        } else {
            None
        }
    }

    /// Remove the first element equal to `item`, shifting the rest left.
    /// Returns whether an element was removed.
    pub fn remove(&mut self, arena: &mut Arena<T>, item: T) -> bool
    where
        T: PartialEq,
    {
        let Some(block) = self.block else {
            return false;
        };
        let slots = &mut arena.block_mut(block)[..self.len];
        match slots.iter().position(|&slot| slot == item) {
            Some(index) => {
                slots.copy_within(index + 1.., index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn as_slice<'a>(&self, arena: &'a Arena<T>) -> &'a [T] {
        match self.block {
            Some(block) => &arena.block(block)[..self.len],
            None => &[],
        }
    }

    /// The occupied prefix of the backing block, or `None` if nothing was
    /// ever pushed.
    pub fn into_block(self) -> Option<Block> {
        self.block
            .filter(|_| self.len > 0)
            .map(|block| block.prefix(self.len))
    }

    fn reallocate(&mut self, arena: &mut Arena<T>, capacity: usize) -> Block {
        let old = self.block;
        let new = arena.alloc_block(capacity, T::default());
        if let Some(old) = old {
            arena.copy_block(old.prefix(self.len), new);
            let page = old.addr().page();
            if arena.is_exclusive(page) {
                arena.reclaim(page);
            }
        }
        self.block = Some(new);
        new
    }
}
