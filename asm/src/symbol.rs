use crate::error::Error;
use arch::reg;
use indexmap::IndexMap;

/// One namespace for predefined names, labels and variables. A name is bound
/// to exactly one address for the lifetime of a run.
pub struct Symbols {
    table: IndexMap<String, u16>,
    next_var: u16,
}

impl Symbols {
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (name, addr) in reg::BUILTIN {
            table.insert(name.to_string(), addr);
        }
        Symbols {
            table,
            next_var: reg::VAR_BASE,
        }
    }

    /// Unconditional bind; an existing binding is overwritten.
    pub fn add_entry(&mut self, name: &str, addr: u16) {
        self.table.insert(name.to_string(), addr);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Lookup that must not allocate.
    pub fn get_address(&self, name: &str) -> Result<u16, Error> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| Error::UndefinedSymbol(name.to_string()))
    }

    /// Existing binding, or the next free variable slot.
    pub fn get_or_allocate(&mut self, name: &str) -> u16 {
        if !self.contains(name) {
            self.table.insert(name.to_string(), self.next_var);
            self.next_var += 1;
        }
        self.table[name]
    }
}
