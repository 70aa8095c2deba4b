//! Canonical job listings — one shape for every provider.
//!
//! Each job-search provider returns its own schema (nested company objects,
//! provider-specific field names, missing keys). This module flattens all of
//! them into [`JobListing`] so downstream code never branches on provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The job-search providers we pull listings from.
/// Adding a provider means adding a variant and its mapping in `unify_one`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobProvider {
    Adzuna,
    Remotive,
}

/// The unified listing shape returned to clients.
/// Every field is a plain string; a field the provider omitted is `""`,
/// never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_url: String,
}

/// Maps a provider's raw listing records into canonical [`JobListing`]s,
/// preserving the provider's ranking order. Total: a record missing every
/// field still yields a listing of empty strings.
pub fn unify(provider: JobProvider, raw: &[Value]) -> Vec<JobListing> {
    raw.iter().map(|job| unify_one(provider, job)).collect()
}

fn unify_one(provider: JobProvider, job: &Value) -> JobListing {
    match provider {
        JobProvider::Adzuna => JobListing {
            title: str_field(job, "title"),
            company: job
                .get("company")
                .and_then(|company| company.get("display_name"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            // Adzuna sends location as a structure; keep it stringified.
            location: stringified_field(job, "location"),
            description: str_field(job, "description"),
            apply_url: str_field(job, "redirect_url"),
        },
        JobProvider::Remotive => JobListing {
            title: str_field(job, "title"),
            company: str_field(job, "company_name"),
            location: str_field(job, "candidate_required_location"),
            description: str_field(job, "description"),
            apply_url: str_field(job, "url"),
        },
    }
}

fn str_field(job: &Value, key: &str) -> String {
    job.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn stringified_field(job: &Value, key: &str) -> String {
    match job.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(location)) => location.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adzuna_nested_company_is_flattened() {
        let raw = vec![json!({
            "title": "Eng",
            "company": {"display_name": "Acme"}
        })];
        let listings = unify(JobProvider::Adzuna, &raw);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Eng");
        assert_eq!(listings[0].company, "Acme");
        assert_eq!(listings[0].location, "");
        assert_eq!(listings[0].description, "");
        assert_eq!(listings[0].apply_url, "");
    }

    #[test]
    fn test_adzuna_missing_company_does_not_abort_other_fields() {
        let raw = vec![json!({
            "title": "Backend Engineer",
            "redirect_url": "https://adzuna.example/apply/1"
        })];
        let listings = unify(JobProvider::Adzuna, &raw);
        assert_eq!(listings[0].title, "Backend Engineer");
        assert_eq!(listings[0].company, "");
        assert_eq!(listings[0].apply_url, "https://adzuna.example/apply/1");
    }

    #[test]
    fn test_adzuna_structured_location_is_stringified() {
        let raw = vec![json!({
            "title": "Eng",
            "location": {"display_name": "Pune, Maharashtra"}
        })];
        let listings = unify(JobProvider::Adzuna, &raw);
        assert_eq!(listings[0].location, "{\"display_name\":\"Pune, Maharashtra\"}");
    }

    #[test]
    fn test_remotive_flat_fields() {
        let raw = vec![json!({
            "title": "Eng",
            "company_name": "Acme",
            "url": "http://x"
        })];
        let listings = unify(JobProvider::Remotive, &raw);
        assert_eq!(listings[0].title, "Eng");
        assert_eq!(listings[0].company, "Acme");
        assert_eq!(listings[0].location, "");
        assert_eq!(listings[0].description, "");
        assert_eq!(listings[0].apply_url, "http://x");
    }

    #[test]
    fn test_remotive_required_location() {
        let raw = vec![json!({
            "title": "Eng",
            "candidate_required_location": "Worldwide"
        })];
        let listings = unify(JobProvider::Remotive, &raw);
        assert_eq!(listings[0].location, "Worldwide");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(unify(JobProvider::Adzuna, &[]).is_empty());
        assert!(unify(JobProvider::Remotive, &[]).is_empty());
    }

    #[test]
    fn test_record_missing_every_field_yields_empty_strings() {
        let raw = vec![json!({})];
        for provider in [JobProvider::Adzuna, JobProvider::Remotive] {
            let listings = unify(provider, &raw);
            assert_eq!(
                listings[0],
                JobListing {
                    title: String::new(),
                    company: String::new(),
                    location: String::new(),
                    description: String::new(),
                    apply_url: String::new(),
                }
            );
        }
    }

    #[test]
    fn test_provider_order_is_preserved() {
        let raw = vec![
            json!({"title": "First"}),
            json!({"title": "Second"}),
            json!({"title": "Third"}),
        ];
        let titles: Vec<String> = unify(JobProvider::Remotive, &raw)
            .into_iter()
            .map(|listing| listing.title)
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_non_string_field_defaults_to_empty() {
        let raw = vec![json!({"title": 42, "company_name": ["Acme"]})];
        let listings = unify(JobProvider::Remotive, &raw);
        assert_eq!(listings[0].title, "");
        assert_eq!(listings[0].company, "");
    }

    #[test]
    fn test_listing_serializes_apply_url_as_camel_case() {
        let listing = JobListing {
            title: "Eng".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "Build things".to_string(),
            apply_url: "http://x".to_string(),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["applyUrl"], "http://x");
        assert!(json.get("apply_url").is_none());
    }

    #[test]
    fn test_listing_round_trips_losslessly() {
        let raw = vec![json!({
            "title": "Eng",
            "company_name": "Acme",
            "candidate_required_location": "Worldwide",
            "description": "Ship software",
            "url": "http://x"
        })];
        let listing = unify(JobProvider::Remotive, &raw).remove(0);
        let encoded = serde_json::to_string(&listing).unwrap();
        let decoded: JobListing = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, listing);
    }
}
