//! Metadata descriptors and annotation resolution
//!
//! Models carry no runtime reflection. Each model implements [`Described`] and
//! hands out a `'static` [`ClassDescriptor`] listing its members and the
//! annotations declared on them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use model_metadata::{accessor, resolve_annotation, resolve_display_name, DisplayLabel};
//!
//! // Lookup by literal member name (case-insensitive)
//! let label = resolve_annotation::<Reward, DisplayLabel>("name")?;
//!
//! // Lookup by a compile-time checked accessor
//! let text = resolve_display_name(&accessor!(Reward => |r| r.name))?;
//! ```

mod annotation;
mod error;
mod expression;
mod resolver;
mod types;

pub use annotation::{Annotation, CompanionType, DisplayLabel};
pub use error::MetadataError;
pub use expression::{resolve_member_name, Accessor, Expr};
pub use resolver::{
    default_resolver, member_annotations, resolve_annotation, resolve_display_name,
    AnnotationResolver, MemberRef,
};
pub use types::{Binding, ClassDescriptor, Described, MemberDescriptor, Visibility};
