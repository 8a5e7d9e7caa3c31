use crate::board::model::Job;

/// Pure skill filter, recomputed on every render
///
/// A job is included iff it has a non-empty skill list and at least one
/// skill contains the filter text as a case-insensitive substring. Jobs
/// without skills never match, whatever the filter says; with an empty
/// filter every skilled job matches.
pub fn filter_jobs<'a>(jobs: &'a [Job], filter: &str) -> Vec<&'a Job> {
    let needle = filter.to_lowercase();
    jobs.iter()
        .filter(|job| match &job.skills {
            Some(skills) => skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle)),
            None => false,
        })
        .collect()
}
