//! Handler identity wrapper.
//!
//! An [`Invoke`] owns one target (usually a function or a handler object)
//! together with an immutable [`Space`] of metadata attached at registration
//! time. The same target type can be registered under many names with
//! different metadata without touching the target itself.
//!
//! Reading a metadata key that was never set yields the shared [`EMPTY`]
//! sentinel instead of failing:
//!
//! ```rust
//! use lineopt::{Invoke, Space, EMPTY};
//!
//! fn ban(argument: &str) -> String {
//!     format!("banned {argument}")
//! }
//!
//! let invoke = Invoke::new(ban as fn(&str) -> String, Space::new().with("oper", true));
//! assert!(invoke.get("oper").truthy());
//! assert!(std::ptr::eq(invoke.get("help"), &EMPTY));
//! assert!(!invoke.get("help").truthy());
//! assert_eq!((invoke.call())("user1"), "banned user1");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Metadata key whose text value is exposed through [`Invoke::doc`].
pub const DOC: &str = "doc";

/// The single shared "absent" value returned for unset metadata keys.
pub static EMPTY: Value = Value::Empty;

/// A metadata value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// No value. Only ever handed out as [`EMPTY`], never stored.
    #[default]
    Empty,
    /// A flag, e.g. a permission requirement.
    Bool(bool),
    /// An integer, e.g. a rate limit or a privilege level.
    Int(i64),
    /// Free text, e.g. a syntax hint.
    Text(String),
}

impl Value {
    /// Returns true for the absent value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Truthiness of the value. The absent value is always false.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Get the value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Metadata attached to a registration.
///
/// Keys are `&'static str` so the set of recognized keys is declared up
/// front by the host as constants. Lookups never fail: absent keys read as
/// [`EMPTY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    fields: BTreeMap<&'static str, Value>,
}

impl Space {
    /// Create an empty metadata space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Setting a key to [`Value::Empty`] leaves it unset.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Empty => {
                self.fields.remove(key);
            }
            value => {
                self.fields.insert(key, value);
            }
        }
        self
    }

    /// Read a field, falling back to [`EMPTY`].
    pub fn get(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&EMPTY)
    }

    /// Returns true if the key was set.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate over the set fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Number of set fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(&'static str, Value)> for Space {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Space::new(), |space, (key, value)| space.with(key, value))
    }
}

/// Stable identity of a wrapper, assigned once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvokeId(u64);

impl InvokeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric identity.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InvokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered target plus its metadata.
///
/// Equality and hashing follow the wrapper's identity, not the target or the
/// metadata, so two wrappers around the same target are distinct keys.
pub struct Invoke<H> {
    id: InvokeId,
    name: &'static str,
    module: &'static str,
    space: Space,
    target: H,
}

impl<H> Invoke<H> {
    /// Wrap `target`, taking its name and module from its type path.
    pub fn new(target: H, space: Space) -> Self {
        let (module, name) = split_type_path(std::any::type_name::<H>());
        Self {
            id: InvokeId::next(),
            name,
            module,
            space,
            target,
        }
    }

    /// The wrapper's identity.
    pub fn id(&self) -> InvokeId {
        self.id
    }

    /// Name of the wrapped target's type (last path segment).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Module path of the wrapped target's type.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Documentation text, taken from the [`DOC`] metadata key.
    pub fn doc(&self) -> Option<&str> {
        self.space.get(DOC).as_str()
    }

    /// All metadata.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Read one metadata field, falling back to [`EMPTY`].
    pub fn get(&self, key: &str) -> &Value {
        self.space.get(key)
    }

    /// The wrapped target.
    pub fn call(&self) -> &H {
        &self.target
    }

    /// Unwrap the target, discarding identity and metadata.
    pub fn into_inner(self) -> H {
        self.target
    }

    /// Convert the target (e.g. into a boxed trait object) keeping identity,
    /// introspected names and metadata.
    pub fn map<U>(self, f: impl FnOnce(H) -> U) -> Invoke<U> {
        Invoke {
            id: self.id,
            name: self.name,
            module: self.module,
            space: self.space,
            target: f(self.target),
        }
    }
}

impl<H> PartialEq for Invoke<H> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<H> Eq for Invoke<H> {}

impl<H> Hash for Invoke<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.id.hash(state);
    }
}

impl<H> fmt::Debug for Invoke<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoke")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("module", &self.module)
            .field("space", &self.space)
            .finish_non_exhaustive()
    }
}

/// Split `a::b::Name<T>` into (`a::b`, `Name<T>`). Function pointers and
/// tuples have no module and keep their whole type as the name.
fn split_type_path(path: &'static str) -> (&'static str, &'static str) {
    let head = path.find(['<', '(']).map_or(path, |i| &path[..i]);
    match head.rfind("::") {
        Some(i) => (&path[..i], &path[i + 2..]),
        None => ("", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct BanHandler;

    fn kick(argument: &str) -> String {
        format!("kicked {argument}")
    }

    #[test]
    fn unset_fields_read_as_shared_sentinel() {
        let a = Invoke::new(BanHandler, Space::new());
        let b = Invoke::new(kick as fn(&str) -> String, Space::new().with("oper", true));

        assert!(std::ptr::eq(a.get("oper"), &EMPTY));
        assert!(std::ptr::eq(b.get("syntax"), &EMPTY));
        assert!(std::ptr::eq(a.get("anything"), b.get("else")));
        assert!(!a.get("oper").truthy());
        assert!(a.get("oper").is_empty());
    }

    #[test]
    fn set_fields_are_returned() {
        let invoke = Invoke::new(
            BanHandler,
            Space::new()
                .with("oper", true)
                .with("level", 3_i64)
                .with("syntax", "ban <nick>"),
        );
        assert_eq!(invoke.get("oper").as_bool(), Some(true));
        assert_eq!(invoke.get("level").as_int(), Some(3));
        assert_eq!(invoke.get("syntax").as_str(), Some("ban <nick>"));
        assert_eq!(invoke.space().len(), 3);
    }

    #[test]
    fn empty_value_is_never_stored() {
        let space = Space::new().with("oper", true).with("oper", Value::Empty);
        assert!(!space.contains("oper"));
        assert!(space.is_empty());
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Bool(false).truthy());
        assert!(!Value::Int(0).truthy());
        assert!(!Value::Text(String::new()).truthy());
        assert!(Value::Int(-1).truthy());
        assert!(Value::from("x").truthy());
    }

    #[test]
    fn identity_not_contents_determines_equality() {
        let a = Invoke::new(kick as fn(&str) -> String, Space::new());
        let b = Invoke::new(kick as fn(&str) -> String, Space::new());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());

        let mut set = HashSet::new();
        set.insert(a.id());
        set.insert(b.id());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn call_reaches_target() {
        let invoke = Invoke::new(kick as fn(&str) -> String, Space::new());
        assert_eq!((invoke.call())("user1"), "kicked user1");
        let f = invoke.into_inner();
        assert_eq!(f("user2"), "kicked user2");
    }

    #[test]
    fn introspected_names() {
        let invoke = Invoke::new(BanHandler, Space::new());
        assert_eq!(invoke.name(), "BanHandler");
        assert!(invoke.module().ends_with("invoke::tests"));
        assert_eq!(invoke.doc(), None);

        let documented = Invoke::new(BanHandler, Space::new().with(DOC, "Ban a user."));
        assert_eq!(documented.doc(), Some("Ban a user."));
    }

    #[test]
    fn map_keeps_identity_and_metadata() {
        let invoke = Invoke::new(BanHandler, Space::new().with("oper", true));
        let id = invoke.id();
        let boxed = invoke.map(|h| Box::new(h) as Box<dyn std::any::Any>);
        assert_eq!(boxed.id(), id);
        assert_eq!(boxed.name(), "BanHandler");
        assert!(boxed.get("oper").truthy());
    }

    #[test]
    fn split_type_path_handles_generics() {
        assert_eq!(split_type_path("a::b::Name"), ("a::b", "Name"));
        assert_eq!(
            split_type_path("alloc::boxed::Box<dyn a::Handler>"),
            ("alloc::boxed", "Box<dyn a::Handler>")
        );
        assert_eq!(split_type_path("u8"), ("", "u8"));
        assert_eq!(
            split_type_path("fn(&str) -> alloc::string::String"),
            ("", "fn(&str) -> alloc::string::String")
        );
        assert_eq!(
            split_type_path("(a::Left, b::Right)"),
            ("", "(a::Left, b::Right)")
        );
        assert_eq!(
            split_type_path("my_bot::setup::{{closure}}"),
            ("my_bot::setup", "{{closure}}")
        );
    }

    #[test]
    fn function_pointer_names() {
        let invoke = Invoke::new(kick as fn(&str) -> String, Space::new());
        assert!(invoke.name().starts_with("fn("));
        assert!(invoke.name().ends_with("String"));
        assert_eq!(invoke.module(), "");

        let closure = Invoke::new(|arg: &str| arg.len(), Space::new());
        assert_eq!(closure.name(), "{{closure}}");
        assert!(closure.module().contains("invoke::tests"));
    }
}
