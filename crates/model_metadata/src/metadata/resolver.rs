//! Annotation resolution with companion-type fallback

use std::any::type_name;
use std::borrow::Cow;

use once_cell::sync::Lazy;

use super::annotation::{Annotation, CompanionType, DisplayLabel};
use super::error::MetadataError;
use super::expression::{resolve_member_name, Accessor};
use super::types::{ClassDescriptor, Described, MemberDescriptor};
use crate::config::{AnnotationMultiplicity, CompanionLinkPolicy, ResolverConfig};

/// Member given either by name or by accessor expression
#[derive(Debug)]
pub enum MemberRef<'a, C> {
    Name(&'a str),
    Accessor(&'a Accessor<C>),
}

impl<'a, C> MemberRef<'a, C> {
    /// Member name, derived from the accessor when one was given
    pub fn name(&self) -> Result<Cow<'a, str>, MetadataError> {
        match *self {
            Self::Name(name) => Ok(Cow::Borrowed(name)),
            Self::Accessor(accessor) => resolve_member_name(accessor).map(Cow::Owned),
        }
    }
}

impl<'a, C> From<&'a str> for MemberRef<'a, C> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a, C> From<&'a String> for MemberRef<'a, C> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl<'a, C> From<&'a Accessor<C>> for MemberRef<'a, C> {
    fn from(accessor: &'a Accessor<C>) -> Self {
        Self::Accessor(accessor)
    }
}

/// Finds annotations on class members.
///
/// Lookup runs in two steps. The member of the class itself is searched
/// first. Only when it carries no annotation of the requested kind is the
/// class's companion type consulted, one hop at most.
#[derive(Debug, Clone, Default)]
pub struct AnnotationResolver {
    config: ResolverConfig,
}

impl AnnotationResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the annotation of kind `A` on a member of `C`
    pub fn annotation<'a, C, A>(
        &self,
        member: impl Into<MemberRef<'a, C>>,
    ) -> Result<Option<&'static A>, MetadataError>
    where
        C: Described + 'a,
        A: Annotation,
    {
        let name = member.into().name()?;
        self.lookup::<A>(C::class_descriptor(), &name)
    }

    /// Display label text of a member of `C`.
    ///
    /// Falls back to the member name when the member has no [`DisplayLabel`]
    /// or the label has no text.
    pub fn display_name<'a, C>(
        &self,
        member: impl Into<MemberRef<'a, C>>,
    ) -> Result<String, MetadataError>
    where
        C: Described + 'a,
    {
        let name = member.into().name()?;
        let label = self.lookup::<DisplayLabel>(C::class_descriptor(), &name)?;

        Ok(match label.and_then(|label| label.name) {
            Some(text) => text.to_string(),
            None => name.into_owned(),
        })
    }

    /// Every annotation visible on a member of `C`: the member's own first,
    /// then those of the matching companion member
    pub fn annotations<'a, C>(
        &self,
        member: impl Into<MemberRef<'a, C>>,
    ) -> Result<Vec<&'static dyn Annotation>, MetadataError>
    where
        C: Described + 'a,
    {
        let name = member.into().name()?;
        let class = C::class_descriptor();

        let mut found = Vec::new();
        if let Some(declared) = class.find_member(&name)? {
            found.extend(declared.annotations.iter().copied());
        }
        if let Some(companion) = self.companion(class)? {
            if let Some(declared) = companion.find_member(&name)? {
                found.extend(declared.annotations.iter().copied());
            }
        }

        Ok(found)
    }

    /// Resolve the annotation of kind `A` on `member` of `class`.
    ///
    /// `Ok(None)` means neither the class nor its companion carries one.
    pub fn lookup<A: Annotation>(
        &self,
        class: &'static ClassDescriptor,
        member: &str,
    ) -> Result<Option<&'static A>, MetadataError> {
        tracing::trace!(
            class = class.name,
            member,
            kind = type_name::<A>(),
            "resolving annotation"
        );

        if let Some(declared) = class.find_member(member)? {
            if let Some(found) = self.pick::<A>(class, declared)? {
                return Ok(Some(found));
            }
        }

        let Some(companion) = self.companion(class)? else {
            return Ok(None);
        };

        tracing::debug!(
            class = class.name,
            companion = companion.name,
            member,
            "falling back to companion type"
        );

        match companion.find_member(member)? {
            Some(declared) => self.pick::<A>(companion, declared),
            None => Ok(None),
        }
    }

    /// Companion type linked from `class`, if any
    fn companion(
        &self,
        class: &ClassDescriptor,
    ) -> Result<Option<&'static ClassDescriptor>, MetadataError> {
        let mut links = class.annotations_of::<CompanionType>();
        let Some(first) = links.next() else {
            return Ok(None);
        };

        let count = 1 + links.count();
        if count > 1 {
            match self.config.companion_links {
                CompanionLinkPolicy::Reject => {
                    return Err(MetadataError::AmbiguousCompanion {
                        class: class.name,
                        count,
                    });
                }
                CompanionLinkPolicy::FirstWins => {
                    tracing::warn!(
                        class = class.name,
                        count,
                        companion = first.class.name,
                        "multiple companion types declared, using the first"
                    );
                }
            }
        }

        Ok(Some(first.class))
    }

    /// Pick the annotation of kind `A` from a member per the multiplicity policy
    fn pick<A: Annotation>(
        &self,
        class: &ClassDescriptor,
        member: &'static MemberDescriptor,
    ) -> Result<Option<&'static A>, MetadataError> {
        let mut matching = member.annotations_of::<A>();
        let first = matching.next();

        match self.config.annotation_multiplicity {
            AnnotationMultiplicity::First => Ok(first),
            AnnotationMultiplicity::Single => {
                let count = first.map_or(0, |_| 1 + matching.count());
                if count > 1 {
                    return Err(MetadataError::AmbiguousAnnotation {
                        class: class.name,
                        member: member.name,
                        kind: type_name::<A>(),
                        count,
                    });
                }
                Ok(first)
            }
        }
    }
}

// ============================================================================
// Process-wide resolver
// ============================================================================

static DEFAULT_RESOLVER: Lazy<AnnotationResolver> = Lazy::new(AnnotationResolver::default);

/// Resolver with the default configuration, used by the free functions below
pub fn default_resolver() -> &'static AnnotationResolver {
    &DEFAULT_RESOLVER
}

/// Resolve the annotation of kind `A` on a member of `C`.
///
/// ```rust,ignore
/// let label = resolve_annotation::<Reward, DisplayLabel>("name")?;
/// let label = resolve_annotation::<Reward, DisplayLabel>(&accessor!(Reward => |r| r.name))?;
/// ```
pub fn resolve_annotation<'a, C, A>(
    member: impl Into<MemberRef<'a, C>>,
) -> Result<Option<&'static A>, MetadataError>
where
    C: Described + 'a,
    A: Annotation,
{
    default_resolver().annotation::<C, A>(member)
}

/// Display label text of a member of `C`, or the member name
pub fn resolve_display_name<'a, C>(
    member: impl Into<MemberRef<'a, C>>,
) -> Result<String, MetadataError>
where
    C: Described + 'a,
{
    default_resolver().display_name::<C>(member)
}

/// Every annotation visible on a member of `C`
pub fn member_annotations<'a, C>(
    member: impl Into<MemberRef<'a, C>>,
) -> Result<Vec<&'static dyn Annotation>, MetadataError>
where
    C: Described + 'a,
{
    default_resolver().annotations::<C>(member)
}
