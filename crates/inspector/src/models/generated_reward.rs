use model_metadata::{ClassDescriptor, CompanionType, Described, MemberDescriptor};

use super::companions::REWARD_METADATA;

/// Reward shaped like generated code: its members carry no annotations.
/// Labels and constraints come from the `RewardMetadata` companion.
#[derive(Debug, Clone, Default)]
pub struct GeneratedReward {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

pub static GENERATED_REWARD_CLASS: ClassDescriptor = ClassDescriptor {
    name: "GeneratedReward",
    annotations: &[&CompanionType {
        class: &REWARD_METADATA,
    }],
    members: &[
        MemberDescriptor::new("id", "i32", &[]),
        MemberDescriptor::new("name", "String", &[]),
        MemberDescriptor::new("description", "String", &[]),
        MemberDescriptor::new("created_at", "String", &[]),
    ],
};

impl Described for GeneratedReward {
    fn class_descriptor() -> &'static ClassDescriptor {
        &GENERATED_REWARD_CLASS
    }
}
