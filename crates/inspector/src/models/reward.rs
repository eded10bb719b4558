use model_metadata::{Binding, ClassDescriptor, Described, DisplayLabel, MemberDescriptor, Visibility};

use crate::kinds::{Required, StringLength};

/// Reward with annotations declared directly on its members
#[derive(Debug, Clone, Default)]
pub struct Reward {
    pub id: i32,
    pub name: String,
    pub description: String,
}

pub static REWARD_CLASS: ClassDescriptor = ClassDescriptor {
    name: "Reward",
    annotations: &[],
    members: &[
        MemberDescriptor {
            name: "id",
            rust_type: "i32",
            visibility: Visibility::Public,
            binding: Binding::Instance,
            annotations: &[&Required],
        },
        MemberDescriptor {
            name: "name",
            rust_type: "String",
            visibility: Visibility::Public,
            binding: Binding::Instance,
            annotations: &[
                &DisplayLabel {
                    name: Some("Reward Name"),
                    short_name: None,
                    description: None,
                },
                &StringLength { min: 1, max: 32 },
            ],
        },
        MemberDescriptor {
            name: "description",
            rust_type: "String",
            visibility: Visibility::Public,
            binding: Binding::Instance,
            annotations: &[&StringLength { min: 1, max: 128 }],
        },
    ],
};

impl Described for Reward {
    fn class_descriptor() -> &'static ClassDescriptor {
        &REWARD_CLASS
    }
}
