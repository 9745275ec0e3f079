use std::collections::HashSet;

use crate::record::JobRecord;

/// Distinct company and location counts over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobStats {
    pub companies: usize,
    pub locations: usize,
}

/// Exact, case-sensitive distinct counts.
pub fn compute_stats(jobs: &[JobRecord]) -> JobStats {
    let companies: HashSet<&str> = jobs.iter().map(|job| job.company.as_str()).collect();
    let locations: HashSet<&str> = jobs.iter().map(|job| job.location.as_str()).collect();
    JobStats {
        companies: companies.len(),
        locations: locations.len(),
    }
}

pub fn stats_line(job_count: usize, stats: JobStats) -> String {
    format!(
        "{job_count} jobs found | {} companies | {} locations",
        stats.companies, stats.locations
    )
}
