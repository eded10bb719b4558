//! Class and member descriptors
//!
//! All descriptors are `'static` tables, usually declared as `static` items
//! next to the model or generated by a build script.

use super::annotation::Annotation;
use super::error::MetadataError;

// ============================================================================
// Member-level metadata
// ============================================================================

/// Declared visibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Whether a member belongs to instances or to the type itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binding {
    #[default]
    Instance,
    Static,
}

impl Binding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Static => "static",
        }
    }
}

/// A named member (field or property) of a class.
///
/// Visibility and binding are informational. Lookups search every member
/// regardless of either.
#[derive(Debug, Clone, Copy)]
pub struct MemberDescriptor {
    pub name: &'static str,
    pub rust_type: &'static str,
    pub visibility: Visibility,
    pub binding: Binding,
    pub annotations: &'static [&'static dyn Annotation],
}

impl MemberDescriptor {
    /// Public instance member
    pub const fn new(
        name: &'static str,
        rust_type: &'static str,
        annotations: &'static [&'static dyn Annotation],
    ) -> Self {
        Self {
            name,
            rust_type,
            visibility: Visibility::Public,
            binding: Binding::Instance,
            annotations,
        }
    }

    pub const fn private(self) -> Self {
        Self {
            visibility: Visibility::Private,
            ..self
        }
    }

    pub const fn static_binding(self) -> Self {
        Self {
            binding: Binding::Static,
            ..self
        }
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        names_match(self.name, name)
    }

    /// Annotations of kind `A` in declaration order
    pub fn annotations_of<A: Annotation>(&self) -> impl Iterator<Item = &'static A> {
        let annotations: &'static [&'static dyn Annotation] = self.annotations;
        annotations
            .iter()
            .filter_map(|annotation| annotation.downcast_ref::<A>())
    }
}

// ============================================================================
// Class-level metadata
// ============================================================================

/// Descriptor of a model type: its class-level annotations and its members
#[derive(Debug, Clone, Copy)]
pub struct ClassDescriptor {
    pub name: &'static str,
    pub annotations: &'static [&'static dyn Annotation],
    pub members: &'static [MemberDescriptor],
}

impl ClassDescriptor {
    /// Find a member by name, ignoring case.
    ///
    /// Returns `Ok(None)` when no member matches and
    /// [`MetadataError::AmbiguousMember`] when several do.
    pub fn find_member(
        &self,
        name: &str,
    ) -> Result<Option<&'static MemberDescriptor>, MetadataError> {
        let members: &'static [MemberDescriptor] = self.members;
        let mut matching = members.iter().filter(|member| member.is_named(name));

        let found = matching.next();
        if found.is_some() && matching.next().is_some() {
            return Err(MetadataError::AmbiguousMember {
                class: self.name,
                member: name.to_string(),
            });
        }

        Ok(found)
    }

    /// Class-level annotations of kind `A` in declaration order
    pub fn annotations_of<A: Annotation>(&self) -> impl Iterator<Item = &'static A> {
        let annotations: &'static [&'static dyn Annotation] = self.annotations;
        annotations
            .iter()
            .filter_map(|annotation| annotation.downcast_ref::<A>())
    }
}

/// Implemented by model types that expose a class descriptor
pub trait Described {
    fn class_descriptor() -> &'static ClassDescriptor;
}

fn names_match(declared: &str, requested: &str) -> bool {
    declared
        .chars()
        .flat_map(char::to_lowercase)
        .eq(requested.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Required;

    impl Annotation for Required {}

    #[derive(Debug)]
    struct Hidden;

    impl Annotation for Hidden {}

    static ACCOUNT: ClassDescriptor = ClassDescriptor {
        name: "Account",
        annotations: &[&Hidden],
        members: &[
            MemberDescriptor::new("Login", "String", &[&Required, &Hidden]),
            MemberDescriptor::new("secret", "String", &[&Hidden]).private(),
            MemberDescriptor::new("COUNT", "usize", &[]).static_binding(),
            MemberDescriptor::new("Straße", "String", &[]),
        ],
    };

    static CLASHING: ClassDescriptor = ClassDescriptor {
        name: "Clashing",
        annotations: &[],
        members: &[
            MemberDescriptor::new("value", "i32", &[]),
            MemberDescriptor::new("Value", "i32", &[]),
        ],
    };

    #[test]
    fn test_find_member_ignores_case() {
        let lower = ACCOUNT.find_member("login").unwrap().unwrap();
        let upper = ACCOUNT.find_member("LOGIN").unwrap().unwrap();
        assert_eq!(lower.name, "Login");
        assert!(std::ptr::eq(lower, upper));
    }

    #[test]
    fn test_find_member_any_visibility_and_binding() {
        let secret = ACCOUNT.find_member("Secret").unwrap().unwrap();
        assert_eq!(secret.visibility, Visibility::Private);

        let count = ACCOUNT.find_member("count").unwrap().unwrap();
        assert_eq!(count.binding, Binding::Static);
        assert_eq!(count.visibility, Visibility::Public);
    }

    #[test]
    fn test_find_member_unicode_case() {
        assert!(ACCOUNT.find_member("STRASSE").unwrap().is_none());
        assert!(ACCOUNT.find_member("STRAßE").unwrap().is_some());
    }

    #[test]
    fn test_find_member_missing() {
        assert!(ACCOUNT.find_member("password").unwrap().is_none());
        assert!(ACCOUNT.find_member("").unwrap().is_none());
    }

    #[test]
    fn test_find_member_ambiguous() {
        let err = CLASHING.find_member("VALUE").unwrap_err();
        assert_eq!(
            err,
            MetadataError::AmbiguousMember {
                class: "Clashing",
                member: "VALUE".to_string(),
            }
        );
    }

    #[test]
    fn test_annotations_of_filters_by_kind() {
        let login = ACCOUNT.find_member("login").unwrap().unwrap();
        assert_eq!(login.annotations_of::<Required>().count(), 1);
        assert_eq!(login.annotations_of::<Hidden>().count(), 1);
        assert_eq!(ACCOUNT.annotations_of::<Hidden>().count(), 1);
        assert_eq!(ACCOUNT.annotations_of::<Required>().count(), 0);
    }
}
