pub mod aggregator;
pub mod classifier;
pub mod stats;

pub use aggregator::{
    analyze, bucket_performance, BucketPerformance, Coverage, MonthlyUsage, SeasonTotals,
    TeamDays, TeamStint, UsageAnalysis, UsageReport,
};
pub use classifier::{SlotClass, UsageBucket};
