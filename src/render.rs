//! C# rendering of lowered units.

use std::fmt::Write as _;

use crate::model::{Interface, Member, TypeDecl, Unit};

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (writeln!($f).unwrap());
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (indoc::writedoc!($f, $($tt)*).unwrap());
}

/// C# printer.
///
/// One unit renders to one file-scoped namespace holding the abstract base
/// class, with the visitor interface and every concrete node class nested
/// inside it. Accessors come out PascalCase, constructor parameters
/// lowerCamelCase, declared types verbatim.
#[derive(Debug)]
pub struct CSharp {
    namespace: String,
}

impl CSharp {
    /// File extension of rendered units.
    pub const EXTENSION: &'static str = "cs";

    pub fn new(namespace: impl Into<String>) -> CSharp {
        CSharp {
            namespace: namespace.into(),
        }
    }

    pub fn render_unit(&self, unit: &Unit) -> String {
        let mut out = String::new();

        ml!(
            out,
            "
            namespace {namespace};

            public abstract class {family}
            {{
            ",
            namespace = self.namespace,
            family = unit.family,
        );
        render_interface(&mut out, &unit.visitor);
        ln!(out);
        ln!(out, "    public abstract T AcceptVisitor<T>(IVisitor<T> v);");
        for node in &unit.nodes {
            ln!(out);
            render_node(&mut out, node);
        }
        ln!(out, "}}");

        out
    }
}

fn render_interface(out: &mut String, interface: &Interface) {
    ln!(out, "    public interface IVisitor<T>");
    ln!(out, "    {{");
    for method in &interface.methods {
        ln!(
            out,
            "        T {}({} {});",
            method.name,
            method.param_type,
            method.param_name
        );
    }
    ln!(out, "    }}");
}

fn render_node(out: &mut String, node: &TypeDecl) {
    ln!(out, "    public class {} : {}", node.name, node.base);
    ln!(out, "    {{");
    for member in &node.members {
        ln!(
            out,
            "        public {} {} {{ get; private set; }}",
            member.declared_type,
            member.property
        );
    }
    if !node.members.is_empty() {
        ln!(out);
    }
    ln!(
        out,
        "        public {}({})",
        node.name,
        node.members.iter().map(CtorParam).join(", ")
    );
    ln!(out, "        {{");
    for member in &node.members {
        ln!(out, "            this.{} = {};", member.property, member.param);
    }
    ln!(out, "        }}");
    ln!(out);
    ln!(out, "        public override T AcceptVisitor<T>(IVisitor<T> v)");
    ln!(out, "        {{");
    ln!(out, "            return v.{}(this);", node.dispatch);
    ln!(out, "        }}");
    ln!(out, "    }}");
}

struct CtorParam<'a>(&'a Member);

impl std::fmt::Display for CtorParam<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0.declared_type, self.0.param)
    }
}

struct Join<Iter, Sep>
where
    Iter: Iterator,
{
    iter: Iter,
    sep: Sep,
}

impl<Iter, Sep> std::fmt::Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    <Iter as Iterator>::Item: std::fmt::Display,
    Sep: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter.clone().peekable();
        while let Some(item) = iter.next() {
            write!(f, "{item}")?;
            if iter.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

trait JoinIter: Sized + Iterator {
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
    Iter: Sized + Iterator + Clone,
{
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
        Join { iter: self, sep }
    }
}
