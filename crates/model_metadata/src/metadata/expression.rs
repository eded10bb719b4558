//! Accessor expressions and member name resolution
//!
//! An [`Accessor`] describes the path from an instance of a class to one of
//! its members, e.g. `r.address.city`. It lets call sites refer to members
//! without string literals while the resolver still works on names.

use std::fmt;
use std::marker::PhantomData;

use super::error::MetadataError;

/// Node of an accessor expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The root instance, e.g. `r`
    Parameter(String),
    /// Member access on a target, e.g. `r.name`
    Member { target: Box<Expr>, name: String },
    /// Conversion of the inner value to a common supertype
    Convert(Box<Expr>),
    /// A value that is not an access path
    Constant(String),
}

impl Expr {
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    pub fn constant(text: impl Into<String>) -> Self {
        Self::Constant(text.into())
    }

    /// Access `name` on this expression
    pub fn member(self, name: impl Into<String>) -> Self {
        Self::Member {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// Wrap this expression in a conversion node
    pub fn convert(self) -> Self {
        Self::Convert(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(name) => write!(f, "{}", name),
            Self::Member { target, name } => write!(f, "{}.{}", target, name),
            Self::Convert(inner) => write!(f, "Convert({})", inner),
            Self::Constant(text) => write!(f, "{}", text),
        }
    }
}

/// Typed accessor expression starting from an instance of `C`.
///
/// Build it with the [`accessor!`](crate::accessor) macro, which checks the
/// path against the real type at compile time, or from an [`Expr`] by hand.
pub struct Accessor<C> {
    body: Expr,
    _class: PhantomData<fn(&C)>,
}

impl<C> Accessor<C> {
    pub fn new(body: Expr) -> Self {
        Self {
            body,
            _class: PhantomData,
        }
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// Wrap the body in a conversion node, as happens when the accessed
    /// value is erased to a common supertype
    pub fn erased(self) -> Self {
        Self::new(self.body.convert())
    }

    /// Name of the member this accessor ends at
    pub fn member_name(&self) -> Result<String, MetadataError> {
        resolve_member_name(self)
    }
}

impl<C> Clone for Accessor<C> {
    fn clone(&self) -> Self {
        Self::new(self.body.clone())
    }
}

impl<C> fmt::Debug for Accessor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("class", &std::any::type_name::<C>())
            .field("body", &self.body)
            .finish()
    }
}

/// Resolve the name of the member an accessor ends at.
///
/// Conversion nodes around the access chain are unwrapped. The node left
/// must be a member access with a non-empty name; its name is the result.
/// Intermediate segments and the root instance are ignored. Anything else
/// is reported as [`MetadataError::MalformedExpression`].
pub fn resolve_member_name<C>(accessor: &Accessor<C>) -> Result<String, MetadataError> {
    let mut node = accessor.body();
    while let Expr::Convert(inner) = node {
        node = inner.as_ref();
    }

    match node {
        Expr::Member { name, .. } if !name.is_empty() => Ok(name.clone()),
        _ => Err(MetadataError::MalformedExpression {
            expression: accessor.body().to_string(),
        }),
    }
}

/// Build an [`Accessor`] from a member path, checked against the class at
/// compile time.
///
/// ```rust,ignore
/// let name = accessor!(Reward => |r| r.name);
/// let city = accessor!(Order => |o| o.address.city);
/// ```
///
/// The path has to start at the closure parameter:
///
/// ```compile_fail
/// use model_metadata::accessor;
///
/// struct Reward {
///     name: String,
/// }
///
/// struct Other {
///     name: String,
/// }
///
/// let other = Other { name: String::new() };
/// let _ = accessor!(Reward => |r| other.name);
/// ```
#[macro_export]
macro_rules! accessor {
    ($class:ty => |$root:ident| $head:ident $(. $member:ident)+) => {{
        // A nested fn cannot capture locals, so the path must start at `$root`
        #[allow(dead_code)]
        fn __accessor_path($root: &$class) {
            let _ = &$head $(. $member)+;
        }
        $crate::Accessor::<$class>::new(
            $crate::Expr::parameter(stringify!($head)) $( .member(stringify!($member)) )+
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Address {
        city: String,
    }

    #[allow(dead_code)]
    struct Order {
        id: i32,
        name: String,
        address: Address,
    }

    #[test]
    fn test_member_name_single_level() {
        let accessor = crate::accessor!(Order => |o| o.name);
        assert_eq!(accessor.body().to_string(), "o.name");
        assert_eq!(resolve_member_name(&accessor).unwrap(), "name");
    }

    #[test]
    fn test_member_name_nested_takes_last_segment() {
        let accessor = crate::accessor!(Order => |o| o.address.city);
        assert_eq!(accessor.member_name().unwrap(), "city");
    }

    #[test]
    fn test_member_name_through_conversion() {
        let plain = crate::accessor!(Order => |o| o.id);
        let erased = plain.clone().erased();
        assert_eq!(erased.body().to_string(), "Convert(o.id)");
        assert_eq!(
            resolve_member_name(&erased).unwrap(),
            resolve_member_name(&plain).unwrap()
        );
    }

    #[test]
    fn test_member_name_by_hand() {
        let accessor = Accessor::<Order>::new(Expr::parameter("x").member("Name").convert());
        assert_eq!(resolve_member_name(&accessor).unwrap(), "Name");
    }

    #[test]
    fn test_root_only_is_malformed() {
        let accessor = Accessor::<Order>::new(Expr::parameter("o"));
        let err = resolve_member_name(&accessor).unwrap_err();
        assert_eq!(
            err,
            MetadataError::MalformedExpression {
                expression: "o".to_string()
            }
        );
    }

    #[test]
    fn test_converted_constant_is_malformed() {
        let accessor = Accessor::<Order>::new(Expr::constant("42").convert());
        assert!(matches!(
            resolve_member_name(&accessor),
            Err(MetadataError::MalformedExpression { expression }) if expression == "Convert(42)"
        ));
    }

    #[test]
    fn test_dotted_constant_is_malformed() {
        let accessor = Accessor::<Order>::new(Expr::constant("3.14").convert());
        assert_eq!(
            resolve_member_name(&accessor).unwrap_err(),
            MetadataError::MalformedExpression {
                expression: "Convert(3.14)".to_string()
            }
        );
    }

    #[test]
    fn test_nested_conversions_are_unwrapped() {
        let accessor = crate::accessor!(Order => |o| o.id).erased().erased();
        assert_eq!(accessor.body().to_string(), "Convert(Convert(o.id))");
        assert_eq!(resolve_member_name(&accessor).unwrap(), "id");

        let nested = crate::accessor!(Order => |o| o.address.city).erased().erased();
        assert_eq!(resolve_member_name(&nested).unwrap(), "city");
    }

    #[test]
    fn test_member_of_constant_takes_member_name() {
        let accessor = Accessor::<Order>::new(Expr::constant("3.14").member("name"));
        assert_eq!(resolve_member_name(&accessor).unwrap(), "name");
    }

    #[test]
    fn test_empty_member_segment_is_malformed() {
        let accessor = Accessor::<Order>::new(Expr::parameter("o").member(""));
        assert!(resolve_member_name(&accessor).is_err());
    }
}
