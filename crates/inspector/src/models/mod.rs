//! Demo models inspected by the binary

pub mod generated_reward;
pub mod reward;

/// Companion classes generated by `build.rs` from `metadata/*.json`
pub mod companions {
    include!(concat!(env!("OUT_DIR"), "/companions_gen.rs"));
}

pub use generated_reward::GeneratedReward;
pub use reward::Reward;
