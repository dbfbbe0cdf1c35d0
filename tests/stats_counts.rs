// tests/stats_counts.rs
use jobsweep::model::JobPosting;
use jobsweep::stats::{self, count_by_company, count_by_location, count_by_site, LocationCounts};

fn job(url: &str, site: &str, company: Option<&str>, location: Option<&str>) -> JobPosting {
    let mut j = JobPosting::new(site, "Intern", url);
    j.company = company.map(String::from);
    j.location = location.map(String::from);
    j
}

fn sample() -> Vec<JobPosting> {
    vec![
        job("1", "indeed", Some("Acme"), Some("Boston, MA")),
        job("2", "linkedin", Some("Globex"), Some("Boston, MA")),
        job("3", "linkedin", Some("Acme"), None),
        job("4", "zip_recruiter", None, Some("New York, NY")),
        job("5", "linkedin", Some("Initech"), Some("Remote")),
    ]
}

#[test]
fn site_counts_descending_and_complete() {
    let c = count_by_site(&sample());
    assert_eq!(c[0], ("linkedin".to_string(), 3));
    assert_eq!(stats::total(&c), 5);
    // tie between indeed and zip_recruiter keeps first-seen order
    assert_eq!(c[1].0, "indeed");
    assert_eq!(c[2].0, "zip_recruiter");
}

#[test]
fn company_counts_include_missing_bucket() {
    let c = count_by_company(&sample());
    assert_eq!(c[0], ("Acme".to_string(), 2));
    assert!(c.contains(&("N/A".to_string(), 1)));
    assert_eq!(stats::total(&c), 5);
}

#[test]
fn location_prefers_location_field() {
    match count_by_location(&sample()) {
        LocationCounts::ByLocation(c) => {
            assert_eq!(c[0], ("Boston, MA".to_string(), 2));
            assert_eq!(stats::total(&c), 5);
        }
        other => panic!("unexpected grouping: {:?}", other),
    }
}

#[test]
fn location_falls_back_to_city_state() {
    let mut a = job("1", "indeed", None, None);
    a.city = Some("Cambridge".into());
    a.state = Some("MA".into());
    let mut b = a.clone();
    b.job_url = "2".into();
    let mut c = job("3", "indeed", None, None);
    c.city = Some("Austin".into());

    let counts = count_by_location(&[a, b, c]);
    assert_eq!(counts.total(), 3);
    match counts {
        LocationCounts::ByCityState(c) => {
            assert_eq!(c[0], (("Cambridge".to_string(), "MA".to_string()), 2));
            assert_eq!(c[1], (("Austin".to_string(), "N/A".to_string()), 1));
        }
        other => panic!("unexpected grouping: {:?}", other),
    }
}

#[test]
fn location_unavailable_without_any_data() {
    let rows = vec![job("1", "indeed", None, None), job("2", "indeed", None, Some(" "))];
    assert_eq!(count_by_location(&rows), LocationCounts::Unavailable);
}

#[test]
fn top_truncates_without_panicking() {
    let c = count_by_site(&sample());
    assert_eq!(stats::top(&c, 1).len(), 1);
    assert_eq!(stats::top(&c, 15).len(), 3);
}
