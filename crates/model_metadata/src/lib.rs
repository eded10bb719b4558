//! Annotation lookup for model members.
//!
//! Model types describe themselves with `'static` [`ClassDescriptor`] tables.
//! The resolver finds an annotation attached to a member, falling back to a
//! companion type linked from the class when the member carries none.

pub mod config;
pub mod metadata;

pub use config::{AnnotationMultiplicity, CompanionLinkPolicy, ResolverConfig};
pub use metadata::{
    default_resolver, member_annotations, resolve_annotation, resolve_display_name,
    resolve_member_name, Accessor, Annotation, AnnotationResolver, Binding, ClassDescriptor,
    CompanionType, Described, DisplayLabel, Expr, MemberDescriptor, MemberRef, MetadataError,
    Visibility,
};
