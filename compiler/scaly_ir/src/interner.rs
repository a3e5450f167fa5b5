//! String interner shared by the lexers of independent compilation units.
//!
//! Interned strings are leaked and live for the rest of the process, which
//! lets [`StringInterner::lookup`] hand out `&'static str` without holding the
//! lock.

use crate::token::Keyword;
use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

struct InternTable {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        table.map.insert("", Name::EMPTY);
        table.strings.push("");
        table
    }
}

/// Thread-safe string interner.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the empty string and every keyword pre-interned.
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        };
        for keyword in Keyword::ALL {
            interner.intern(keyword.as_str());
        }
        interner
    }

    /// Intern a string, returning its handle.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(s) {
            return name;
        }

        let mut table = self.table.write();
        // Another thread may have interned it between the two locks.
        if let Some(&name) = table.map.get(s) {
            return name;
        }

        let index = u32::try_from(table.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded {} entries", u32::MAX));
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_index(index);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        name
    }

    /// Look up the string behind `name`.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &'static str {
        let table = self.table.read();
        match table.strings.get(name.index()) {
            Some(&s) => s,
            None => panic!("{name:?} does not belong to this interner"),
        }
    }

    /// Handle for `s` if it has already been interned.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        // The empty string is always present.
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
