// Staff dashboard: concurrent load of jobs, candidates and analytics, merged into one view model.

pub mod aggregator;
pub mod view;
