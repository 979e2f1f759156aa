use indexmap::IndexMap;

use crate::chain::{Chain, Node};
use crate::constants::SUBCOMMAND_SLOT;
use crate::value::Value;

/// The option-value store of one command, linked to its parent's store.
///
/// Lookups fall back to ancestors when a key is locally absent; writes always
/// target the local store.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    opts: IndexMap<String, Value>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    pub fn new(parent: Option<&'p Scope<'p>>) -> Self {
        Self {
            opts: IndexMap::new(),
            parent,
        }
    }

    pub fn root() -> Self {
        Self::new(None)
    }

    pub fn child(parent: &'p Scope<'p>) -> Self {
        Self::new(Some(parent))
    }

    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Number of ancestors above this scope.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.parent;
        while let Some(scope) = cur {
            depth += 1;
            cur = scope.parent;
        }
        depth
    }

    pub fn set_optval(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.opts.insert(key.into(), value.into());
    }

    /// Value of `key` from the nearest scope that holds it.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        if let Some(v) = self.opts.get(key) {
            return Some(v);
        }
        let mut cur = self.parent;
        while let Some(scope) = cur {
            if let Some(v) = scope.opts.get(key) {
                return Some(v);
            }
            cur = scope.parent;
        }
        None
    }

    /// Value of `key` from the nearest scope that holds it, else `default`.
    pub fn get_optval(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.lookup(key) {
            Some(v) => v.clone(),
            None => default.into(),
        }
    }

    /// Value of `key` in this scope only.
    pub fn local(&self, key: &str) -> Option<&Value> {
        self.opts.get(key)
    }

    pub fn contains_local(&self, key: &str) -> bool {
        self.opts.contains_key(key)
    }

    pub fn opts(&self) -> &IndexMap<String, Value> {
        &self.opts
    }

    /// Seed the defaults of every option in `chain` without touching keys
    /// that are already set.
    pub fn set_opts_defaults(&mut self, chain: &Chain<'_>) {
        for node in chain.nodes() {
            match node {
                Node::Positional(opt) => self.seed(opt.keyname(), opt.get_default()),
                Node::Options(set) => {
                    for opt in set.long_opts().values() {
                        self.seed(opt.keyname(), opt.get_default());
                    }
                }
            }
        }
    }

    fn seed(&mut self, key: &str, value: &Value) {
        if !self.opts.contains_key(key) {
            self.opts.insert(key.to_string(), value.clone());
        }
    }

    /// The sub-command name selected in this scope, if any.
    pub fn subcommand_name(&self) -> Option<&str> {
        self.opts
            .get(SUBCOMMAND_SLOT)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Every visible key with the value a lookup would return, outermost
    /// scope first.
    pub fn snapshot(&self) -> IndexMap<String, Value> {
        let mut chain = vec![self];
        let mut cur = self.parent;
        while let Some(scope) = cur {
            chain.push(scope);
            cur = scope.parent;
        }

        let mut out = IndexMap::new();
        for scope in chain.into_iter().rev() {
            for (k, v) in &scope.opts {
                out.insert(k.clone(), v.clone());
            }
        }
        out
    }
}
