//! @acp:module "Result Presenter"
//! @acp:summary "Groups plan recommendations into priority buckets"
//! @acp:domain cli
//! @acp:layer output

use crate::plan::{PersonalizedPlan, Priority, SupplementRecommendation};

/// One non-empty priority bucket; entries keep their index in the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityBucket<'a> {
    pub priority: Priority,
    pub entries: Vec<(usize, &'a SupplementRecommendation)>,
}

impl PriorityBucket<'_> {
    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|(idx, _)| *idx).collect()
    }
}

/// @acp:summary "Buckets in high, medium, low order; empty buckets omitted"
pub fn group_by_priority(plan: &PersonalizedPlan) -> Vec<PriorityBucket<'_>> {
    Priority::all()
        .iter()
        .map(|priority| PriorityBucket {
            priority: *priority,
            entries: plan
                .recommendations
                .iter()
                .enumerate()
                .filter(|(_, r)| r.priority == *priority)
                .collect(),
        })
        .filter(|bucket| !bucket.entries.is_empty())
        .collect()
}
