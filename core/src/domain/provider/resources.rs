use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::provider::{
    entities::{FacilityType, ProviderRecord},
    value_objects::{ProviderSearchOutcome, Region},
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResourceContact {
    pub label: &'static str,
    pub number: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResourceListing {
    pub region: Region,
    pub emergency: Vec<ResourceContact>,
    pub coverage: Vec<ResourceLink>,
    pub telehealth: Vec<ResourceLink>,
    pub mental_health: ResourceContact,
    pub government_portal: &'static str,
    pub communities: Vec<ResourceLink>,
}

const fn contact(label: &'static str, number: &'static str) -> ResourceContact {
    ResourceContact { label, number }
}

const fn link(
    name: &'static str,
    url: Option<&'static str>,
    description: &'static str,
) -> ResourceLink {
    ResourceLink {
        name,
        url,
        description,
    }
}

pub fn resource_listing(region: Region) -> ResourceListing {
    match region {
        Region::India => ResourceListing {
            region,
            emergency: vec![
                contact("Emergency Number", "108, 102, 112"),
                contact("Ambulance", "108"),
                contact("Women's Helpline", "1091, 181"),
                contact("Police", "100"),
            ],
            coverage: vec![
                link("Ayushman Bharat", Some("https://pmjay.gov.in/"), "PM-JAY healthcare coverage"),
                link("CGHS", Some("https://cghs.gov.in/"), "Central Government Health Scheme"),
                link("Jan Aushadhi", None, "Stores for generic medicines"),
                link("Mohalla Clinics", None, "Neighbourhood clinics in Delhi"),
                link("Primary Health Centers", None, "Government PHCs"),
            ],
            telehealth: vec![
                link("Practo", Some("https://www.practo.com/"), "Online consultations"),
                link("1mg", Some("https://www.1mg.com/"), "Consultations and medicines"),
                link("DocsApp", None, "Chat with doctors"),
                link("Lybrate", Some("https://www.lybrate.com/"), "Online consultations"),
            ],
            mental_health: contact("NIMHANS", "080-26995000"),
            government_portal: "mohfw.gov.in",
            communities: communities(),
        },
        Region::International => ResourceListing {
            region,
            emergency: vec![
                contact("Emergency", "911 (US), 999 (UK), 000 (AU)"),
                contact("Women's Helpline", "Local women's crisis centers"),
            ],
            coverage: vec![
                link("Healthcare.gov", Some("https://www.healthcare.gov/"), "ACA marketplace"),
                link("Medicaid", Some("https://www.medicaid.gov/"), "State programs"),
                link("GoodRx", Some("https://www.goodrx.com/"), "Prescription discounts"),
            ],
            telehealth: vec![
                link("Planned Parenthood", Some("https://www.plannedparenthood.org/"), "Sexual and reproductive care"),
                link("Nurx", Some("https://www.nurx.com/"), "Birth control and STI testing"),
                link("Wisp", Some("https://hellowisp.com/"), "Women's telehealth"),
                link("Maven", Some("https://www.mavenclinic.com/"), "Women's and family health"),
            ],
            mental_health: contact("988 Suicide & Crisis Lifeline", "988"),
            government_portal: "healthcare.gov",
            communities: communities(),
        },
    }
}

fn communities() -> Vec<ResourceLink> {
    vec![
        link("Women's Health Reddit", Some("https://www.reddit.com/r/WomensHealth/"), "Anonymous discussions"),
        link("Vulvar Pain Society", Some("https://vulvalpainsociety.org/"), "Support for vulvodynia"),
        link("Endometriosis Support Groups", Some("https://endometriosisassn.org/"), "Local chapter finder"),
    ]
}

pub fn resource_report_file_name(outcome: &ProviderSearchOutcome, at: DateTime<Utc>) -> String {
    let slug = |s: &str| s.trim().replace(char::is_whitespace, "_");
    format!(
        "yshy_resources_{}_{}_{}.txt",
        slug(&outcome.city),
        slug(&outcome.state),
        at.format("%Y%m%d")
    )
}

/// Plain-text resource list for a provider search, grouped by facility type.
pub fn render_resource_list(outcome: &ProviderSearchOutcome, generated_at: DateTime<Utc>) -> String {
    let listing = resource_listing(Region::for_state(&outcome.state));
    let location = outcome.search_location();
    let mut out = String::new();

    let _ = writeln!(out, "YSHY Healthcare Resources for {location}");
    let _ = writeln!(out, "Generated on: {}\n", generated_at.format("%Y-%m-%d %H:%M"));

    let _ = writeln!(out, "EMERGENCY CONTACTS:");
    for c in &listing.emergency {
        let _ = writeln!(out, "- {}: {}", c.label, c.number);
    }

    let _ = writeln!(out, "\nSEARCH CRITERIA:");
    let _ = writeln!(out, "- Location: {location}");
    let _ = writeln!(out, "- Service Type: {}", outcome.service_type.label());
    let _ = writeln!(out, "- Search Radius: {} km\n", outcome.radius_km);

    if outcome.providers.is_empty() {
        let _ = writeln!(out, "NO PROVIDERS FOUND IN SEARCH:");
        let _ = writeln!(out, "Please try searching with different criteria or check these options:");
        let _ = writeln!(out, "- Use Google Maps to search 'doctors near me' or 'hospitals near me'");
        let _ = writeln!(out, "- Contact your local health department");
        let _ = writeln!(out, "- Check your insurance provider's directory\n");
    } else {
        let _ = writeln!(
            out,
            "HEALTHCARE PROVIDERS FOUND ({} locations):\n",
            outcome.providers.len()
        );
        for (facility_type, providers) in group_by_facility(&outcome.providers) {
            let _ = writeln!(out, "{}S:", facility_type.label().to_uppercase());
            for (i, provider) in providers.iter().enumerate() {
                let _ = writeln!(out, "\n{}. {}", i + 1, provider.name);
                let _ = writeln!(out, "Address: {}", provider.address);
                let _ = writeln!(out, "Phone: {}", provider.phone);
                let _ = writeln!(out, "Distance: {} km", provider.distance_km);
                let _ = writeln!(out, "Hours: {}", provider.hours);
                let _ = writeln!(out, "Website: {}", provider.website);
                let _ = writeln!(out, "Google Maps: {}", provider.directions_url);
            }
            let _ = writeln!(out);
        }
    }

    let names = |links: &[ResourceLink]| {
        links
            .iter()
            .map(|l| l.name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let _ = writeln!(out, "TELEHEALTH OPTIONS:\n- {}\n", names(&listing.telehealth));
    let _ = writeln!(out, "INSURANCE/COVERAGE:\n- {}\n", names(&listing.coverage));
    let _ = writeln!(out, "ADDITIONAL RESOURCES:");
    let _ = writeln!(out, "- Government Health Portal: {}", listing.government_portal);
    let _ = writeln!(
        out,
        "- Mental Health Support: {}: {}\n",
        listing.mental_health.label, listing.mental_health.number
    );
    let _ = writeln!(out, "Disclaimer: This list is for informational purposes only.");
    let _ = writeln!(out, "Always verify provider credentials and availability before visiting.");

    out
}

fn group_by_facility(providers: &[ProviderRecord]) -> Vec<(FacilityType, Vec<&ProviderRecord>)> {
    let mut groups: Vec<(FacilityType, Vec<&ProviderRecord>)> = Vec::new();

    for provider in providers {
        match groups.iter_mut().find(|(t, _)| *t == provider.facility_type) {
            Some((_, members)) => members.push(provider),
            None => groups.push((provider.facility_type, vec![provider])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::{
        entities::{GeoPoint, GeocodedLocation},
        value_objects::ServiceType,
    };
    use chrono::TimeZone;

    fn provider(name: &str, facility_type: FacilityType, distance_km: f64) -> ProviderRecord {
        ProviderRecord {
            name: name.to_string(),
            address: "Near Pune, Maharashtra".into(),
            phone: "Not available".into(),
            website: "Not available".into(),
            hours: "Call to confirm hours".into(),
            distance_km,
            lat: 18.52,
            lon: 73.85,
            facility_type,
            directions_url: "https://www.google.com/maps/dir/18.5,73.8/18.52,73.85".into(),
        }
    }

    fn outcome(providers: Vec<ProviderRecord>) -> ProviderSearchOutcome {
        ProviderSearchOutcome {
            location: GeocodedLocation {
                query: "Pune, Maharashtra, India".into(),
                display_name: "Pune, Maharashtra, India".into(),
                point: GeoPoint::new(18.5, 73.8),
            },
            city: "Pune".into(),
            state: "Maharashtra".into(),
            radius_km: 10,
            service_type: ServiceType::Gynecologist,
            strategy: None,
            raw_results: providers.len(),
            providers,
            searched_at: Utc::now(),
        }
    }

    #[test]
    fn resource_list_groups_providers_by_type() {
        let outcome = outcome(vec![
            provider("Sahyadri Hospital", FacilityType::Hospital, 1.2),
            provider("Care Pharmacy", FacilityType::Pharmacy, 1.5),
            provider("Ruby Hall", FacilityType::Hospital, 2.0),
        ]);

        let text = render_resource_list(&outcome, Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 0).unwrap());

        assert!(text.starts_with("YSHY Healthcare Resources for Pune, Maharashtra"));
        assert!(text.contains("HEALTHCARE PROVIDERS FOUND (3 locations)"));
        assert!(text.contains("HOSPITALS:\n\n1. Sahyadri Hospital"));
        assert!(text.contains("2. Ruby Hall"));
        assert!(text.contains("PHARMACYS:"));
        assert!(text.contains("- Emergency Number: 108, 102, 112"));
        assert!(text.contains("Practo, 1mg, DocsApp, Lybrate"));
        assert!(text.contains("NIMHANS: 080-26995000"));
    }

    #[test]
    fn empty_search_suggests_alternatives() {
        let text = render_resource_list(&outcome(vec![]), Utc::now());
        assert!(text.contains("NO PROVIDERS FOUND IN SEARCH"));
    }

    #[test]
    fn international_listing() {
        let listing = resource_listing(Region::International);
        assert_eq!(listing.mental_health.number, "988");
        assert_eq!(listing.coverage[0].name, "Healthcare.gov");
        assert_eq!(
            resource_report_file_name(
                &outcome(vec![]),
                Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap()
            ),
            "yshy_resources_Pune_Maharashtra_20250203.txt"
        );
    }
}
