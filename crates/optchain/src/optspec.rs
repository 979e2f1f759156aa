use crate::builders::Switch;
use crate::option::OptionDef;

/// One entry of a declarative option spec: a single option or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Single(OptionDef),
    Group(Vec<Decl>),
}

impl Decl {
    fn collect<'a>(&'a self, out: &mut Vec<&'a OptionDef>) {
        match self {
            Self::Single(opt) => out.push(opt),
            Self::Group(decls) => decls.iter().for_each(|d| d.collect(out)),
        }
    }
}

impl From<OptionDef> for Decl {
    fn from(opt: OptionDef) -> Self {
        Self::Single(opt)
    }
}

impl From<Switch> for Decl {
    fn from(sw: Switch) -> Self {
        let (on, off) = sw.into_pair();
        Self::Group(vec![on.into(), off.into()])
    }
}

impl From<(OptionDef, OptionDef)> for Decl {
    fn from((a, b): (OptionDef, OptionDef)) -> Self {
        Self::Group(vec![a.into(), b.into()])
    }
}

impl From<Vec<OptionDef>> for Decl {
    fn from(opts: Vec<OptionDef>) -> Self {
        Self::Group(opts.into_iter().map(Decl::from).collect())
    }
}

impl From<Vec<Decl>> for Decl {
    fn from(decls: Vec<Decl>) -> Self {
        Self::Group(decls)
    }
}

impl From<OptSpec> for Decl {
    fn from(spec: OptSpec) -> Self {
        Self::Group(spec.decls)
    }
}

/// The declarative option specification of a command.
///
/// A spec is defined once per command type and never mutated afterwards; a
/// fresh [`Chain`](crate::Chain) is built from it for every parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptSpec {
    decls: Vec<Decl>,
}

impl OptSpec {
    pub const fn new() -> Self {
        Self { decls: Vec::new() }
    }

    pub fn from_decls(decls: Vec<Decl>) -> Self {
        Self { decls }
    }

    pub fn with(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// All options in declaration order, with groups flattened.
    pub fn options(&self) -> Vec<&OptionDef> {
        let mut out = Vec::new();
        for decl in &self.decls {
            decl.collect(&mut out);
        }
        out
    }
}

impl FromIterator<Decl> for OptSpec {
    fn from_iter<I: IntoIterator<Item = Decl>>(iter: I) -> Self {
        Self::from_decls(iter.into_iter().collect())
    }
}

/// Build an [`OptSpec`] from anything convertible into a [`Decl`].
///
/// ```
/// use optchain::{flag, keyval, optspec, switch};
///
/// let spec = optspec![
///     flag("force", "f", "do not ask"),
///     keyval("input", "i", "input file"),
///     switch("zlib", "zlib on/off"),
/// ];
/// assert_eq!(spec.options().len(), 4);
/// ```
#[macro_export]
macro_rules! optspec {
    ($($decl:expr),* $(,)?) => {
        $crate::OptSpec::from_decls(vec![$($crate::Decl::from($decl)),*])
    };
}
