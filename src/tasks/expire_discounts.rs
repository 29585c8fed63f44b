use tracing::debug;

use crate::{configuration::Configuration, models::Timestamp, store::SqliteController};

pub fn run(config: &Configuration, now: &Timestamp) -> anyhow::Result<usize> {
    let database_path = config.database_path();
    debug!("Expiring discounts in {} as of {}", database_path.display(), now);

    let mut controller = SqliteController::open(database_path)?;
    let num_updated = controller.expire_discounts(now)?;
    debug!("Cleared {} discounts", num_updated);
    Ok(num_updated)
}
