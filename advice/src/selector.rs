use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock},
};

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(u32);

struct SelectorTable {
    names: Vec<Arc<str>>,
    ids: HashMap<Arc<str>, SelectorId>,
}

impl SelectorTable {
    fn new() -> Self {
        Self {
            names: Vec::new(),
            ids: HashMap::new(),
        }
    }

    fn get_or_add(&mut self, name: &str) -> SelectorId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = SelectorId(self.names.len() as u32);
        let interned = Arc::<str>::from(name);
        self.names.push(interned.clone());
        self.ids.insert(interned, id);
        id
    }
}

static SELECTORS: LazyLock<RwLock<SelectorTable>> =
    LazyLock::new(|| RwLock::new(SelectorTable::new()));

/// Interned name of a slot.
///
/// Two selectors built from the same string are equal and hash the same, so
/// slot tables key on the id instead of the string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(SelectorId);

impl Selector {
    pub fn intern(name: &str) -> Self {
        // fast path: most names are already known after setup
        if let Some(&id) = SELECTORS.read().ids.get(name) {
            return Self(id);
        }
        Self(SELECTORS.write().get_or_add(name))
    }

    #[inline]
    pub fn id(self) -> SelectorId {
        self.0
    }

    pub fn name(self) -> Arc<str> {
        // ids are only handed out by the table, so the index is always valid
        SELECTORS.read().names[self.0.0 as usize].clone()
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::intern(name)
    }
}

impl From<&String> for Selector {
    fn from(name: &String) -> Self {
        Selector::intern(name)
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::intern(&name)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name())
    }
}
