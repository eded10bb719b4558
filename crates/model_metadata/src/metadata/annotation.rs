//! Annotation kinds and the downcast machinery behind them

use std::any::Any;
use std::fmt::Debug;

use super::types::ClassDescriptor;

/// Gives trait objects access to their concrete type as `dyn Any`
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marker for types usable as annotations on classes and members.
///
/// The kind of an annotation is its Rust type. Annotations are immutable
/// values stored in `'static` descriptor tables as `&'static dyn Annotation`.
///
/// ```rust,ignore
/// #[derive(Debug)]
/// pub struct Required;
///
/// impl Annotation for Required {}
/// ```
pub trait Annotation: AsAny + Debug + Send + Sync + 'static {}

impl dyn Annotation {
    /// Check whether this annotation is of kind `A`
    pub fn is<A: Annotation>(&self) -> bool {
        AsAny::as_any(self).is::<A>()
    }

    /// Get this annotation as kind `A`, if it is one
    pub fn downcast_ref<A: Annotation>(&self) -> Option<&A> {
        AsAny::as_any(self).downcast_ref::<A>()
    }
}

// ============================================================================
// Built-in kinds
// ============================================================================

/// Class-level link to a companion type holding annotations for this class.
///
/// Consulted only when a member carries no annotation of the requested kind.
/// The companion's own links are never followed.
#[derive(Debug, Clone, Copy)]
pub struct CompanionType {
    pub class: &'static ClassDescriptor,
}

impl CompanionType {
    pub const fn new(class: &'static ClassDescriptor) -> Self {
        Self { class }
    }
}

impl Annotation for CompanionType {}

/// Display label for a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayLabel {
    /// Label text; when unset the member name is displayed
    pub name: Option<&'static str>,
    pub short_name: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl DisplayLabel {
    /// Create a label with only the text set
    pub const fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            short_name: None,
            description: None,
        }
    }

    /// Create a label with no text set
    pub const fn unnamed() -> Self {
        Self {
            name: None,
            short_name: None,
            description: None,
        }
    }
}

impl Annotation for DisplayLabel {}
