pub mod config;
pub mod kinds;
pub mod logging;
pub mod models;
pub mod report;

use model_metadata::{accessor, AnnotationResolver};

use crate::models::{GeneratedReward, Reward};

fn main() -> anyhow::Result<()> {
    logging::initialize()?;

    let config = config::load_config()?;
    tracing::info!(
        multiplicity = ?config.annotation_multiplicity,
        companion_links = ?config.companion_links,
        "resolver configured"
    );
    let resolver = AnnotationResolver::new(config);

    let label = resolver.display_name::<Reward>(&accessor!(Reward => |r| r.name))?;
    tracing::info!(label = %label, "display name of Reward.name");

    let reports = vec![
        report::class_report::<Reward>(&resolver)?,
        report::class_report::<GeneratedReward>(&resolver)?,
    ];

    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
