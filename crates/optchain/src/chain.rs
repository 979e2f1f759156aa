use indexmap::IndexMap;

use crate::error::{CliError, CliResult};
use crate::option::OptionDef;
use crate::optspec::OptSpec;
use crate::state::State;

/// Dispatch tables for a run of consecutive non-positional options.
#[derive(Debug, Clone, Default)]
pub struct OptionSet<'o> {
    long_opts: IndexMap<&'o str, &'o OptionDef>,
    short_opts: IndexMap<char, &'o OptionDef>,
}

impl<'o> OptionSet<'o> {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'o OptionDef>,
    {
        let mut set = Self::default();
        for opt in options {
            set.add_option(opt);
        }
        set
    }

    /// Register `opt`; later registrations win on name or alias collisions.
    pub fn add_option(&mut self, opt: &'o OptionDef) {
        self.long_opts.insert(opt.name(), opt);
        for alias in opt.aliases().chars() {
            self.short_opts.insert(alias, opt);
        }
    }

    pub fn merge(&mut self, other: &OptionSet<'o>) {
        for (name, opt) in &other.long_opts {
            self.long_opts.insert(name, opt);
        }
        for (alias, opt) in &other.short_opts {
            self.short_opts.insert(*alias, opt);
        }
    }

    pub fn long_opts(&self) -> &IndexMap<&'o str, &'o OptionDef> {
        &self.long_opts
    }

    pub fn short_opts(&self) -> &IndexMap<char, &'o OptionDef> {
        &self.short_opts
    }

    fn parse(&self, state: &mut State<'_, '_>) -> CliResult<()> {
        while let Some(arg) = state.pop_front() {
            if arg == "--" {
                tracing::debug!("`--` seen, stopping option matching");
                state.stop();
                break;
            }
            if let Some(long) = arg.strip_prefix("--") {
                let (name, value) = long.split_once('=').unwrap_or((long, ""));
                self.dispatch_long(state, name, value)?;
            } else if let Some(cluster) = arg.strip_prefix('-') {
                let mut shorts = cluster.to_string();
                while let Some(alias) = shorts.chars().next() {
                    let rest = &shorts[alias.len_utf8()..];
                    shorts = self.dispatch_short(state, alias, rest)?;
                }
            } else {
                state.push_front(arg);
                break;
            }
        }
        Ok(())
    }

    fn dispatch_long(&self, state: &mut State<'_, '_>, name: &str, value: &str) -> CliResult<()> {
        let Some(opt) = self.long_opts.get(name) else {
            return Err(CliError::UnknownOption(format!("--{name}")));
        };
        tracing::debug!(option = name, "long option matched");
        opt.invoke(state, value, None)?;
        Ok(())
    }

    fn dispatch_short(
        &self,
        state: &mut State<'_, '_>,
        alias: char,
        rest: &str,
    ) -> CliResult<String> {
        let Some(opt) = self.short_opts.get(&alias) else {
            return Err(CliError::UnknownOption(format!("-{alias}")));
        };
        tracing::debug!(option = opt.name(), %alias, "short option matched");
        Ok(opt.invoke(state, rest, Some(alias))?.unwrap_or_default())
    }
}

/// One link of a parser chain.
#[derive(Debug, Clone)]
pub enum Node<'o> {
    Options(OptionSet<'o>),
    Positional(&'o OptionDef),
}

/// The ordered pipeline of option sets and positional slots built from an
/// [`OptSpec`]. Node `i` passes control to node `i + 1`.
#[derive(Debug, Clone, Default)]
pub struct Chain<'o> {
    nodes: Vec<Node<'o>>,
}

impl<'o> Chain<'o> {
    /// Build the chain for `spec`.
    ///
    /// Consecutive non-positional options collapse into one option set; every
    /// positional gets a slot of its own, and an option following a slot opens
    /// a new set.
    pub fn build(spec: &'o OptSpec) -> Self {
        let mut nodes: Vec<Node<'o>> = Vec::new();
        for opt in spec.options() {
            if opt.is_positional() {
                nodes.push(Node::Positional(opt));
                continue;
            }
            match nodes.last_mut() {
                Some(Node::Options(set)) => set.add_option(opt),
                _ => nodes.push(Node::Options(OptionSet::new([opt]))),
            }
        }
        tracing::debug!(nodes = nodes.len(), "parser chain built");
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node<'o>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run every node in order against `state`.
    pub fn parse(&self, state: &mut State<'_, '_>) -> CliResult<()> {
        for (idx, node) in self.nodes.iter().enumerate() {
            state.update(self, idx);
            tracing::trace!(node = idx, stopped = state.is_stopped(), "entering node");
            match node {
                Node::Options(set) => {
                    if !state.is_stopped() {
                        set.parse(state)?;
                    }
                }
                Node::Positional(opt) => parse_positional(opt, state)?,
            }
        }
        Ok(())
    }
}

fn parse_positional(opt: &OptionDef, state: &mut State<'_, '_>) -> CliResult<()> {
    let eligible = !state.is_stopped() && state.front().is_some_and(|arg| !arg.starts_with('-'));
    if eligible {
        if let Some(arg) = state.pop_front() {
            tracing::debug!(option = opt.name(), %arg, "positional matched");
            opt.invoke(state, &arg, None)?;
        }
    } else if opt.required() {
        return Err(CliError::RequiredMissing(opt.name().to_string()));
    }
    Ok(())
}
