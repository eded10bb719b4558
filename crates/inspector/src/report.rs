//! JSON report of the resolved metadata of a model

use serde::Serialize;

use model_metadata::{AnnotationResolver, CompanionType, Described, MetadataError};

use crate::kinds::{Required, StringLength};

/// Resolved metadata of one member
#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub member: &'static str,
    pub rust_type: &'static str,
    pub visibility: &'static str,
    pub binding: &'static str,
    pub display_name: String,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Every annotation seen on the member, direct ones first
    pub annotations: Vec<String>,
}

/// Resolved metadata of a model and all of its members
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub class: &'static str,
    pub companion: Option<&'static str>,
    pub members: Vec<MemberReport>,
}

pub fn class_report<C: Described>(
    resolver: &AnnotationResolver,
) -> Result<ClassReport, MetadataError> {
    let class = C::class_descriptor();
    let companion = class
        .annotations_of::<CompanionType>()
        .next()
        .map(|link| link.class.name);

    let mut members = Vec::with_capacity(class.members.len());
    for member in class.members {
        let length = resolver.annotation::<C, StringLength>(member.name)?;

        members.push(MemberReport {
            member: member.name,
            rust_type: member.rust_type,
            visibility: member.visibility.as_str(),
            binding: member.binding.as_str(),
            display_name: resolver.display_name::<C>(member.name)?,
            required: resolver.annotation::<C, Required>(member.name)?.is_some(),
            min_length: length.map(|l| l.min),
            max_length: length.map(|l| l.max),
            annotations: resolver
                .annotations::<C>(member.name)?
                .iter()
                .map(|annotation| format!("{:?}", annotation))
                .collect(),
        });
    }

    tracing::debug!(class = class.name, members = members.len(), "built class report");

    Ok(ClassReport {
        class: class.name,
        companion,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::companions::REWARD_METADATA;
    use crate::models::{GeneratedReward, Reward};
    use model_metadata::{accessor, Binding, DisplayLabel, Visibility};

    fn member<'r>(report: &'r ClassReport, name: &str) -> &'r MemberReport {
        report
            .members
            .iter()
            .find(|m| m.member == name)
            .unwrap()
    }

    #[test]
    fn test_reward_report_uses_direct_annotations() {
        let report = class_report::<Reward>(&AnnotationResolver::default()).unwrap();
        assert_eq!(report.class, "Reward");
        assert_eq!(report.companion, None);
        assert_eq!(report.members.len(), 3);

        let id = member(&report, "id");
        assert!(id.required);
        assert_eq!(id.display_name, "id");

        let name = member(&report, "name");
        assert_eq!(name.display_name, "Reward Name");
        assert_eq!(name.min_length, Some(1));
        assert_eq!(name.max_length, Some(32));
        assert!(!name.required);

        let description = member(&report, "description");
        assert_eq!(description.display_name, "description");
        assert_eq!(description.max_length, Some(128));
    }

    #[test]
    fn test_generated_reward_report_uses_companion() {
        let report = class_report::<GeneratedReward>(&AnnotationResolver::default()).unwrap();
        assert_eq!(report.companion, Some("RewardMetadata"));

        let id = member(&report, "id");
        assert!(id.required);

        let name = member(&report, "name");
        assert_eq!(name.display_name, "Reward Name");
        assert_eq!(name.max_length, Some(32));
        assert_eq!(name.annotations.len(), 2);

        let description = member(&report, "description");
        assert_eq!(description.display_name, "Reward Description");
        assert_eq!(description.min_length, Some(1));
        assert_eq!(description.max_length, Some(128));

        let created_at = member(&report, "created_at");
        assert_eq!(created_at.display_name, "created_at");
        assert!(!created_at.required);
        assert_eq!(created_at.max_length, None);
        assert!(created_at.annotations.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let report = class_report::<Reward>(&AnnotationResolver::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["class"], "Reward");
        assert_eq!(json["members"][1]["display_name"], "Reward Name");
        assert_eq!(json["members"][0]["visibility"], "public");
    }

    #[test]
    fn test_generated_companion_members() {
        let audit = REWARD_METADATA.find_member("AUDIT").unwrap().unwrap();
        assert_eq!(audit.name, "Audit");
        assert_eq!(audit.visibility, Visibility::Private);
        assert_eq!(audit.binding, Binding::Static);

        let label = audit.annotations_of::<DisplayLabel>().next().unwrap();
        assert_eq!(label.name, None);

        let description = REWARD_METADATA.find_member("description").unwrap().unwrap();
        let label = description.annotations_of::<DisplayLabel>().next().unwrap();
        assert_eq!(label.short_name, Some("Details"));
    }

    #[test]
    fn test_display_name_through_accessor() {
        let resolver = AnnotationResolver::default();
        let label = resolver
            .display_name::<GeneratedReward>(&accessor!(GeneratedReward => |r| r.description))
            .unwrap();
        assert_eq!(label, "Reward Description");

        // Companion-only member with an empty label falls back to the name
        assert_eq!(
            resolver.display_name::<GeneratedReward>("audit").unwrap(),
            "audit"
        );
    }
}
