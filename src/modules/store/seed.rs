//! Sample records loaded at startup when `SEED_SAMPLE_DATA` is on.
//!
//! Admin-table reports carry no reporter. The profile reports belong to the
//! first sample user, who also holds the sample points total.

use chrono::Utc;

use super::InMemoryStore;
use crate::features::categories::models::Category;
use crate::features::reports::models::{Location, Report, ReportId, ReportStatus};
use crate::features::users::models::User;

pub const SAMPLE_PROFILE_OWNER: &str = "28504199501234";
const SAMPLE_PROFILE_POINTS: u32 = 1250;

type UserRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const USERS: &[UserRow] = &[
    ("28504199501234", "Ahmed", "Saleh", "ahmed.saleh@example.com", "password123", "+201112223334", "12 Tahrir St.", "Cairo", "Cairo"),
    ("29708200104567", "Mona", "Hassan", "mona.hassan@example.com", "qwerty456", "+201223334445", "45 Nile Corniche", "Giza", "Giza"),
    ("30003199006543", "Youssef", "Mahmoud", "youssef.mahmoud@example.com", "letmein789", "+201334445556", "78 El-Orouba", "Alexandria", "Alexandria"),
    ("29006198702321", "Fatma", "Ibrahim", "fatma.ibrahim@example.com", "welcome321", "+201445556667", "22 Corniche El Nile", "Luxor", "Luxor"),
    ("29801199305432", "Khaled", "Mostafa", "khaled.mostafa@example.com", "adminpass", "+201556667778", "5 Ramses Square", "Aswan", "Aswan"),
    ("30507199201234", "Sara", "Fathy", "sara.fathy@example.com", "passw0rd", "+201667778889", "99 El-Geish Rd.", "Mansoura", "Dakahlia"),
    ("28810199507890", "Omar", "Abdelaziz", "omar.abdelaziz@example.com", "secret999", "+201778889900", "10 Port Said St.", "Suez", "Suez"),
    ("29209199003456", "Nour", "Rashad", "nour.rashad@example.com", "mypassword", "+201889900112", "17 El-Horreya Rd.", "Ismailia", "Ismailia"),
    ("29912198802345", "Mahmoud", "Tarek", "mahmoud.tarek@example.com", "hello2025", "+201990011223", "65 26th of July St.", "Port Said", "Port Said"),
    ("30105199405678", "Dalia", "Youssef", "dalia.youssef@example.com", "secure456", "+202011122334", "88 El-Salam Rd.", "Fayoum", "Faiyum"),
];

struct ReportRow {
    title: &'static str,
    description: &'static str,
    category: Category,
    lat: f64,
    lng: f64,
    image: &'static str,
    status: ReportStatus,
}

#[rustfmt::skip]
const ADMIN_REPORTS: &[ReportRow] = &[
    ReportRow { title: "Pothole on Main St.", description: "Large pothole causing traffic issues near the market.", category: Category::RoadDamage, lat: 30.06263, lng: 31.24967, image: "https://via.placeholder.com/200x150?text=Road+Damage", status: ReportStatus::Pending },
    ReportRow { title: "Burst Water Pipe", description: "Water leak flooding the sidewalk.", category: Category::WaterIssue, lat: 30.0444, lng: 31.2357, image: "https://via.placeholder.com/200x150?text=Water+Issue", status: ReportStatus::InProgress },
    ReportRow { title: "Street Light Out", description: "No lighting around the park entrance at night.", category: Category::StreetLighting, lat: 30.05, lng: 31.2333, image: "https://via.placeholder.com/200x150?text=Street+Lighting", status: ReportStatus::Resolved },
    ReportRow { title: "Overflowing Garbage Bin", description: "Bin hasn’t been emptied in two weeks.", category: Category::WasteManagement, lat: 30.0561, lng: 31.2234, image: "https://via.placeholder.com/200x150?text=Waste+Management", status: ReportStatus::Pending },
    ReportRow { title: "Broken Bus Stop Bench", description: "Bench slats are broken and unsafe.", category: Category::PublicTransportation, lat: 30.0366, lng: 31.2243, image: "https://via.placeholder.com/200x150?text=Public+Transport", status: ReportStatus::InProgress },
    ReportRow { title: "Graffiti on Wall", description: "Vandalism on the side of the government building.", category: Category::PublicPropertyDamage, lat: 30.0459, lng: 31.2389, image: "https://via.placeholder.com/200x150?text=Property+Damage", status: ReportStatus::Resolved },
    ReportRow { title: "Sewage Smell", description: "Foul odor coming from drain near café.", category: Category::SewageProblem, lat: 30.0483, lng: 31.243, image: "https://via.placeholder.com/200x150?text=Sewage+Problem", status: ReportStatus::Pending },
    ReportRow { title: "Power Outage", description: "No electricity in block 12 since morning.", category: Category::ElectricityIssue, lat: 30.04, lng: 31.235, image: "https://via.placeholder.com/200x150?text=Electricity+Issue", status: ReportStatus::InProgress },
    ReportRow { title: "Tree Fallen", description: "Fallen tree blocking sidewalk after storm.", category: Category::EnvironmentalIssue, lat: 30.0522, lng: 31.2268, image: "https://via.placeholder.com/200x150?text=Environmental+Issue", status: ReportStatus::Resolved },
    ReportRow { title: "Other: Miscellaneous Concern", description: "Unspecified hazard near the community center.", category: Category::Other, lat: 30.0478, lng: 31.2315, image: "https://via.placeholder.com/200x150?text=Other+Issue", status: ReportStatus::Pending },
];

#[rustfmt::skip]
const PROFILE_REPORTS: &[ReportRow] = &[
    ReportRow { title: "Broken Streetlight", description: "The streetlight on 5th avenue is flickering and needs repair.", category: Category::StreetLighting, lat: 30.045, lng: 31.238, image: "https://picsum.photos/600/400?random=1", status: ReportStatus::Pending },
    ReportRow { title: "Pothole on Main Rd", description: "Large pothole causing traffic slowdowns.", category: Category::RoadDamage, lat: 30.0465, lng: 31.2392, image: "https://picsum.photos/600/400?random=2", status: ReportStatus::Pending },
    ReportRow { title: "Overflowing Sewage", description: "Sewage pipe has burst, water flooding the sidewalk.", category: Category::SewageProblem, lat: 30.0473, lng: 31.2375, image: "https://picsum.photos/600/400?random=3", status: ReportStatus::Pending },
    ReportRow { title: "Water Leak", description: "Persistent water leak from underground pipe.", category: Category::WaterIssue, lat: 30.0448, lng: 31.2401, image: "https://picsum.photos/600/400?random=4", status: ReportStatus::Pending },
    ReportRow { title: "Damaged Trash Bin", description: "Public trash bin is broken and overflowing.", category: Category::WasteManagement, lat: 30.0457, lng: 31.2368, image: "https://picsum.photos/600/400?random=5", status: ReportStatus::Pending },
    ReportRow { title: "Graffiti on Wall", description: "Unauthorized graffiti defacing public property.", category: Category::PublicPropertyDamage, lat: 30.0461, lng: 31.241, image: "https://picsum.photos/600/400?random=6", status: ReportStatus::Pending },
    ReportRow { title: "Broken Traffic Light", description: "Traffic signal stuck on red, causing delays.", category: Category::PublicTransportation, lat: 30.0478, lng: 31.2387, image: "https://picsum.photos/600/400?random=7", status: ReportStatus::Pending },
    ReportRow { title: "Weak Wi-Fi Signal", description: "Public Wi‑Fi hotspot barely works in this area.", category: Category::Other, lat: 30.0452, lng: 31.2395, image: "https://picsum.photos/600/400?random=8", status: ReportStatus::Pending },
    ReportRow { title: "Dim Street Lamps", description: "Multiple street lamps are too dim at night.", category: Category::StreetLighting, lat: 30.0469, lng: 31.2372, image: "https://picsum.photos/600/400?random=9", status: ReportStatus::Pending },
    ReportRow { title: "Air Pollution Smell", description: "Strong chemical odor near the industrial zone.", category: Category::EnvironmentalIssue, lat: 30.047, lng: 31.2405, image: "https://picsum.photos/600/400?random=10", status: ReportStatus::Pending },
];

pub fn sample_users() -> Vec<User> {
    USERS
        .iter()
        .map(
            |&(national_id, first, last, email, password, phone, address, city, governorate)| User {
                national_id: national_id.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                governorate: governorate.to_string(),
                verified: false,
                points: if national_id == SAMPLE_PROFILE_OWNER {
                    SAMPLE_PROFILE_POINTS
                } else {
                    0
                },
            },
        )
        .collect()
}

pub fn sample_reports() -> Vec<Report> {
    let now = Utc::now();
    let admin = ADMIN_REPORTS.iter().map(|row| (row, None));
    let profile = PROFILE_REPORTS
        .iter()
        .map(|row| (row, Some(SAMPLE_PROFILE_OWNER.to_string())));

    admin
        .chain(profile)
        .zip(1..)
        .map(|((row, reporter), id): ((&ReportRow, Option<String>), ReportId)| Report {
            id,
            title: row.title.to_string(),
            description: row.description.to_string(),
            category: row.category,
            location: Some(Location {
                lat: row.lat,
                lng: row.lng,
            }),
            image: Some(row.image.to_string()),
            status: row.status,
            reporter,
            submitted_at: now,
        })
        .collect()
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        let store = Self::with_records(sample_reports(), sample_users());
        tracing::info!(
            users = USERS.len(),
            reports = ADMIN_REPORTS.len() + PROFILE_REPORTS.len(),
            "Loaded sample data"
        );
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::{ReportStore, UserStore};

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let store = InMemoryStore::seeded();
        let users = store.users().await.unwrap();
        let reports = store.reports().await.unwrap();

        assert_eq!(users.len(), 10);
        assert!(users.iter().all(|u| !u.verified && u.national_id.len() == 14));
        assert_eq!(reports.len(), 20);
        assert_eq!(
            reports
                .iter()
                .filter(|r| r.reporter.as_deref() == Some(SAMPLE_PROFILE_OWNER))
                .count(),
            10
        );
    }

    #[tokio::test]
    async fn test_seeded_ids_continue() {
        let store = InMemoryStore::seeded();
        let report = store
            .insert_report(crate::shared::test_helpers::sample_new_report())
            .await
            .unwrap();
        assert_eq!(report.id, 21);
    }

    #[test]
    fn test_profile_owner_points() {
        let owner = sample_users()
            .into_iter()
            .find(|u| u.national_id == SAMPLE_PROFILE_OWNER)
            .unwrap();
        assert_eq!(owner.points, 1250);
    }
}
