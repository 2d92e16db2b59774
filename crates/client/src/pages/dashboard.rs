//! Dashboard page: one stats snapshot per load.

use stockroom_domain::dashboard::DashboardStats;

use super::LoadState;
use crate::api::InventoryApi;

/// State behind the dashboard view.
pub struct DashboardPage<A> {
    api: A,
    state: LoadState<DashboardStats>,
}

impl<A: InventoryApi> DashboardPage<A> {
    /// A page that has not loaded yet.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoadState::Loading,
        }
    }

    /// Fetch a fresh snapshot. Calling it again is the only way to recover
    /// from a failure.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        self.state = match self.api.fetch_dashboard().await {
            Ok(stats) => {
                if !stats.is_consistent() {
                    tracing::warn!(
                        total = stats.total_items,
                        "dashboard breakdowns do not add up to the total"
                    );
                }
                LoadState::Loaded(stats)
            }
            Err(err) => LoadState::Failed(err.message),
        };
    }

    #[must_use]
    pub fn state(&self) -> &LoadState<DashboardStats> {
        &self.state
    }
}
