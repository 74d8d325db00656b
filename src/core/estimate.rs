use crate::core::calculator::weighted::{self, Estimate, HISTORY_LIMIT};
use crate::db::pool::DbPool;
use crate::db::queries::{distinct_locations, load_recent};
use crate::errors::AppResult;
use std::collections::BTreeMap;

/// Per-location and all-locations estimates over the store.
pub struct EstimateLogic;

impl EstimateLogic {
    pub async fn for_location(pool: &DbPool, location: &str) -> AppResult<Estimate> {
        let location = location.to_string();
        let history = pool
            .run(move |conn| load_recent(conn, &location, HISTORY_LIMIT))
            .await?;

        Ok(weighted::estimate(&history))
    }

    /// One entry per location that has at least one press.
    pub async fn for_all(pool: &DbPool) -> AppResult<BTreeMap<String, Estimate>> {
        let locations = pool.run(distinct_locations).await?;

        let mut out = BTreeMap::new();
        for location in locations {
            let est = Self::for_location(pool, &location).await?;
            out.insert(location, est);
        }
        Ok(out)
    }
}
