//! Runtime type identity as reported by a container.
//!
//! A [`TypeRef`] mirrors what a reflective runtime knows about a type: its
//! namespace, its raw name (generic definitions keep their arity marker, e.g.
//! ``IMultipleGeneric`1``), its generic arguments and, for arrays, the element
//! type. The textual notation accepted by [`str::parse`] is
//!
//! ```text
//! Namespace.Name`N<Arg1,Arg2>[]
//! ```
//!
//! and `Display` prints the same notation back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker separating a generic type's base name from its arity.
const ARITY_MARKER: char = '`';

/// Deepest generic argument nesting the notation parser accepts.
pub const MAX_GENERIC_NESTING: usize = 64;

/// Most array dimensions a single type may stack.
pub const MAX_ARRAY_RANK: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    namespace: Option<String>,
    name: String,
    args: Vec<TypeRef>,
    element: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A non-generic type inside `namespace`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            namespace: (!namespace.is_empty()).then_some(namespace),
            name: name.into(),
            args: Vec::new(),
            element: None,
        }
    }

    /// A type without a namespace.
    pub fn simple(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// A closed generic type, e.g. ``generic("App", "IMultipleGeneric`1", vec![int])``.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        args: Vec<TypeRef>,
    ) -> Self {
        Self {
            args,
            ..Self::new(namespace, name)
        }
    }

    /// A single-dimension array of `element`.
    pub fn array_of(element: TypeRef) -> Self {
        Self {
            namespace: element.namespace.clone(),
            name: format!("{}[]", element.name),
            args: Vec::new(),
            element: Some(Box::new(element)),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Raw runtime name, arity marker included.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }

    /// Element type when this is an array.
    pub fn element(&self) -> Option<&TypeRef> {
        self.element.as_deref()
    }

    pub fn is_array(&self) -> bool {
        self.element.is_some()
    }

    /// `Namespace.Name` without generic arguments.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Full name of the open generic definition (identical to
    /// [`full_name`](Self::full_name) for non-generic types).
    pub fn definition(&self) -> String {
        self.full_name()
    }

    /// Human-readable name: the simple name, with generic arguments rendered
    /// recursively as `Base<A,B>` and the arity marker stripped.
    pub fn pretty_name(&self) -> String {
        if let Some(element) = &self.element {
            return format!("{}[]", element.pretty_name());
        }
        if self.args.is_empty() {
            return self.name.clone();
        }
        let base = match self.name.find(ARITY_MARKER) {
            Some(idx) => &self.name[..idx],
            None => self.name.as_str(),
        };
        let args: Vec<String> = self.args.iter().map(TypeRef::pretty_name).collect();
        format!("{}<{}>", base, args.join(","))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            return write!(f, "{}[]", element);
        }
        if let Some(ns) = &self.namespace {
            write!(f, "{}.", ns)?;
        }
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Error returned when a type notation string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParseError {
    pub input: String,
    pub position: usize,
    pub reason: String,
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid type `{}` at offset {}: {}",
            self.input, self.position, self.reason
        )
    }
}

impl std::error::Error for TypeParseError {}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = NotationParser {
            input: s,
            pos: 0,
            depth: 0,
        };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(ty)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct NotationParser<'a> {
    input: &'a str,
    pos: usize,
    /// Generic argument lists currently open.
    depth: usize,
}

impl<'a> NotationParser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn error(&self, reason: &str) -> TypeParseError {
        TypeParseError {
            input: self.input.to_string(),
            position: self.pos,
            reason: reason.to_string(),
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.' || c == ARITY_MARKER))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected a type name"));
        }
        let path = &rest[..len];
        self.pos += len;

        if path.split('.').any(str::is_empty) {
            return Err(TypeParseError {
                position: start,
                ..self.error("empty namespace segment")
            });
        }
        let (namespace, name) = match path.rsplit_once('.') {
            Some((ns, name)) => (ns, name),
            None => ("", path),
        };

        let mut args = Vec::new();
        if self.eat("<") {
            if self.depth == MAX_GENERIC_NESTING {
                return Err(self.error("generic nesting too deep"));
            }
            self.depth += 1;
            loop {
                args.push(self.parse_type()?);
                if self.eat(",") {
                    continue;
                }
                if self.eat(">") {
                    break;
                }
                return Err(self.error("expected `,` or `>`"));
            }
            self.depth -= 1;
        }

        let mut ty = TypeRef::generic(namespace, name, args);
        let mut rank = 0;
        while self.eat("[]") {
            rank += 1;
            if rank > MAX_ARRAY_RANK {
                return Err(self.error("array rank too deep"));
            }
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int32() -> TypeRef {
        TypeRef::new("System", "Int32")
    }

    #[test]
    fn test_parse_simple_and_namespaced() {
        let t: TypeRef = "IsolatedType".parse().unwrap();
        assert_eq!(t, TypeRef::simple("IsolatedType"));
        assert_eq!(t.namespace(), None);

        let t: TypeRef = "App.Services.Level2".parse().unwrap();
        assert_eq!(t.namespace(), Some("App.Services"));
        assert_eq!(t.name(), "Level2");
        assert_eq!(t.full_name(), "App.Services.Level2");
    }

    #[test]
    fn test_parse_nested_generics_and_arrays() {
        let t: TypeRef = "System.Collections.Generic.IEnumerable`1<App.IMultipleGeneric`1<System.Int32>>"
            .parse()
            .unwrap();
        assert_eq!(t.definition(), "System.Collections.Generic.IEnumerable`1");
        assert_eq!(t.args().len(), 1);
        assert_eq!(
            t.args()[0],
            TypeRef::generic("App", "IMultipleGeneric`1", vec![int32()])
        );

        let arr: TypeRef = "App.IMultiple[]".parse().unwrap();
        assert!(arr.is_array());
        assert_eq!(arr.element(), Some(&TypeRef::new("App", "IMultiple")));
        assert_eq!(arr.full_name(), "App.IMultiple[]");
    }

    #[test]
    fn test_display_round_trips_notation() {
        for s in [
            "App.Root",
            "App.IMultipleGeneric`1<System.Int32>[]",
            "Lib.Pair`2<System.String,Lib.Box`1<System.Int32>>",
            "Matrix[][]",
        ] {
            let t: TypeRef = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
    }

    #[test]
    fn test_parse_tolerates_whitespace_between_arguments() {
        let t: TypeRef = "Lib.Pair`2< A , B >".parse().unwrap();
        assert_eq!(t.to_string(), "Lib.Pair`2<A,B>");
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<TypeRef>().is_err());
        assert!("App..Root".parse::<TypeRef>().is_err());
        assert!("Lib.Box`1<A".parse::<TypeRef>().is_err());
        assert!("Lib.Box`1<>".parse::<TypeRef>().is_err());
        let err = "App.Root extra".parse::<TypeRef>().unwrap_err();
        assert_eq!(err.reason, "unexpected trailing input");
        assert!(err.to_string().contains("App.Root extra"));
    }

    fn nested(levels: usize) -> String {
        format!("{}A{}", "Box`1<".repeat(levels), ">".repeat(levels))
    }

    #[test]
    fn test_parse_accepts_nesting_up_to_limit() {
        let t: TypeRef = nested(MAX_GENERIC_NESTING).parse().unwrap();
        assert_eq!(t.to_string(), nested(MAX_GENERIC_NESTING));

        let sibling = format!("Pair`2<{},{}>", nested(MAX_GENERIC_NESTING - 1), nested(3));
        assert!(sibling.parse::<TypeRef>().is_ok());
    }

    #[test]
    fn test_parse_rejects_runaway_nesting() {
        let err = nested(MAX_GENERIC_NESTING + 1).parse::<TypeRef>().unwrap_err();
        assert_eq!(err.reason, "generic nesting too deep");

        // Far past any stack budget: must fail cleanly, not overflow.
        let err = nested(200_000).parse::<TypeRef>().unwrap_err();
        assert_eq!(err.reason, "generic nesting too deep");
        assert_eq!(err.position, "Box`1<".len() * (MAX_GENERIC_NESTING + 1));
    }

    #[test]
    fn test_parse_rejects_excessive_array_rank() {
        let ok = format!("Matrix{}", "[]".repeat(MAX_ARRAY_RANK));
        assert!(ok.parse::<TypeRef>().unwrap().is_array());
        let err = format!("Matrix{}", "[]".repeat(MAX_ARRAY_RANK + 1))
            .parse::<TypeRef>()
            .unwrap_err();
        assert_eq!(err.reason, "array rank too deep");
    }

    #[test]
    fn test_pretty_name_strips_arity_and_recurses() {
        let t = TypeRef::generic("App", "IMultipleGeneric`1", vec![int32()]);
        assert_eq!(t.pretty_name(), "IMultipleGeneric<Int32>");

        let nested: TypeRef = "Lib.Pair`2<System.String,Lib.Box`1<System.Int32>>"
            .parse()
            .unwrap();
        assert_eq!(nested.pretty_name(), "Pair<String,Box<Int32>>");
    }

    #[test]
    fn test_pretty_name_plain_and_array() {
        assert_eq!(TypeRef::new("App", "Level4").pretty_name(), "Level4");
        let arr = TypeRef::array_of(TypeRef::generic("App", "IMultipleGeneric`1", vec![int32()]));
        assert_eq!(arr.pretty_name(), "IMultipleGeneric<Int32>[]");
        // No arity marker: the name is kept whole.
        let t = TypeRef::generic("", "Box", vec![int32()]);
        assert_eq!(t.pretty_name(), "Box<Int32>");
    }

    #[test]
    fn test_serde_uses_notation() {
        let t = TypeRef::array_of(TypeRef::new("App", "IMultiple"));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"App.IMultiple[]\"");
        let back: TypeRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TypeRef>("\"App..X\"").is_err());
    }
}
