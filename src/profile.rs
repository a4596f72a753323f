use serde::{Deserialize, Serialize};

use crate::models::{Job, JobType};

/// The student's own profile as shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub professional: Professional,
    pub education: ProfileEducation,
    pub job_preferences: JobPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub title: String,
    pub company: Option<String>,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEducation {
    pub degree: String,
    pub school: String,
    pub graduation_year: String,
    pub gpa: Option<String>,
    pub major: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub locations: Vec<String>,
    pub salary_range: SalaryRange,
    #[serde(default)]
    pub remote_work: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.personal.first_name, self.personal.last_name)
    }

    /// Avatar fallback: first letter of each name.
    pub fn initials(&self) -> String {
        [&self.personal.first_name, &self.personal.last_name]
            .iter()
            .filter_map(|n| n.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Jobs whose type is one the student asked for. No preference means
    /// every job.
    pub fn preferred_jobs<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        let wanted = &self.job_preferences.job_types;
        jobs.iter()
            .filter(|j| wanted.is_empty() || wanted.contains(&j.kind))
            .collect()
    }
}

impl SalaryRange {
    /// "$80k - $120k"
    pub fn label(&self) -> String {
        format!("${}k - ${}k", self.min / 1000, self.max / 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, CatalogSource};
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_profile_derivations() {
        let catalog = BundledCatalog.load().unwrap();
        let profile = catalog.profile.unwrap();
        assert_eq!(profile.full_name(), "Alex Johnson");
        assert_eq!(profile.initials(), "AJ");
        assert_eq!(profile.job_preferences.salary_range.label(), "$80k - $120k");

        let ids: Vec<&str> = profile
            .preferred_jobs(&catalog.jobs)
            .into_iter()
            .map(|j| j.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn no_job_type_preference_keeps_every_job() {
        let mut catalog = BundledCatalog.load().unwrap();
        let mut profile = catalog.profile.take().unwrap();
        profile.job_preferences.job_types.clear();
        assert_eq!(profile.preferred_jobs(&catalog.jobs).len(), 4);
    }
}
