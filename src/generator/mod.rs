use crate::scoring::{score_lead, CompanySize, LeadAttributes, ScoringPreferences};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

const COMPANY_PREFIXES: &[&str] = &[
    "Innovative", "Global", "Advanced", "Smart", "Digital", "Future", "Elite", "Prime", "Quantum",
    "Dynamic", "Strategic", "NextGen", "Optimal", "Synergy", "Pinnacle", "Vertex", "Apex",
    "Summit",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Solutions",
    "Systems",
    "Technologies",
    "Corp",
    "Inc",
    "LLC",
    "Group",
    "Enterprises",
    "Partners",
    "Ventures",
    "Labs",
    "Works",
    "Dynamics",
    "Innovations",
    "Services",
    "Consulting",
    "Studio",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Christopher", "Karen", "Charles", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Helen", "Mark", "Sandra", "Donald", "Donna", "Steven", "Carol", "Paul", "Ruth", "Andrew",
    "Sharon", "Joshua", "Michelle", "Kenneth", "Laura", "Kevin", "Brian", "Kimberly", "George",
    "Deborah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Boston, MA",
    "Seattle, WA",
    "Austin, TX",
    "Denver, CO",
    "Atlanta, GA",
    "Miami, FL",
    "Dallas, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "Houston, TX",
];

const DOMAIN_EXTENSIONS: &[&str] = &[".com", ".io", ".co", ".net", ".org", ".biz"];

const JOB_TITLES: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "CTO",
            "VP Engineering",
            "Director of Technology",
            "IT Director",
            "Software Development Manager",
            "DevOps Manager",
            "Security Manager",
        ],
    ),
    (
        "Healthcare",
        &[
            "Medical Director",
            "Hospital Administrator",
            "Clinical Manager",
            "Health Information Manager",
            "Nursing Director",
            "Practice Manager",
        ],
    ),
    (
        "Finance",
        &[
            "CFO",
            "Finance Director",
            "Investment Manager",
            "Risk Manager",
            "Compliance Officer",
            "Treasury Manager",
            "Controller",
            "Audit Manager",
        ],
    ),
    (
        "Education",
        &[
            "Dean",
            "Academic Director",
            "Curriculum Manager",
            "Education Technology Director",
            "Student Services Director",
            "Research Director",
            "Department Head",
        ],
    ),
    (
        "Real Estate",
        &[
            "Property Manager",
            "Real Estate Director",
            "Development Manager",
            "Asset Manager",
            "Facilities Manager",
            "Commercial Real Estate Manager",
        ],
    ),
    (
        "Manufacturing",
        &[
            "Operations Director",
            "Plant Manager",
            "Production Manager",
            "Quality Control Manager",
            "Supply Chain Manager",
            "Manufacturing Engineer",
        ],
    ),
    (
        "Retail",
        &[
            "Store Manager",
            "Regional Manager",
            "Merchandising Manager",
            "Customer Experience Manager",
            "Inventory Manager",
            "Sales Director",
        ],
    ),
    (
        "Consulting",
        &[
            "Managing Partner",
            "Principal Consultant",
            "Practice Lead",
            "Business Development Manager",
            "Client Relationship Manager",
        ],
    ),
    (
        "Marketing",
        &[
            "CMO",
            "Marketing Director",
            "Digital Marketing Manager",
            "Brand Manager",
            "Content Marketing Manager",
            "Growth Manager",
        ],
    ),
    (
        "E-commerce",
        &[
            "E-commerce Director",
            "Digital Commerce Manager",
            "Online Sales Manager",
            "Marketplace Manager",
            "Customer Success Manager",
            "Product Manager",
        ],
    ),
];

// Fallback titles for industries outside the table.
const GENERIC_TITLES: &[&str] = &["Owner", "General Manager", "Operations Manager"];

/// Fully fabricated lead record, scored at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticLead {
    pub lead_id: String,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub location: String,
    pub contact_name: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub lead_score: f64,
    pub created_date: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub preferences: ScoringPreferences,
    pub num_leads: usize,
}

pub struct LeadGenerator;

impl LeadGenerator {
    pub fn industries() -> Vec<&'static str> {
        JOB_TITLES.iter().map(|(industry, _)| *industry).collect()
    }

    /// Generates `num_leads` synthetic leads, scored against the caller's
    /// preferences and sorted by score, best first.
    pub fn generate(params: &GeneratorParams) -> Vec<SyntheticLead> {
        let mut leads: Vec<SyntheticLead> = (0..params.num_leads)
            .map(|_| Self::generate_one(params))
            .collect();

        leads.sort_by(|a, b| {
            b.lead_score
                .partial_cmp(&a.lead_score)
                .unwrap_or(Ordering::Equal)
        });
        leads
    }

    fn generate_one(params: &GeneratorParams) -> SyntheticLead {
        let prefs = &params.preferences;

        // 70% of leads land in the requested industry, the rest drift.
        let industry = if fastrand::f64() < 0.7 {
            prefs.industry.clone()
        } else {
            pick(Self::industries().as_slice()).to_string()
        };

        let company_name = format!("{} {}", pick(COMPANY_PREFIXES), pick(COMPANY_SUFFIXES));
        let company_size = CompanySize::ALL[fastrand::usize(0..CompanySize::ALL.len())];

        // 40% of leads honor the requested location when one was given.
        let location = match &prefs.location {
            Some(target) if !target.is_empty() && fastrand::f64() < 0.4 => target.clone(),
            _ => pick(LOCATIONS).to_string(),
        };

        let first_name = pick(FIRST_NAMES).to_string();
        let last_name = pick(LAST_NAMES).to_string();
        let job_title = pick(titles_for(&industry)).to_string();
        let email = generate_email(&first_name, &last_name, &company_name);
        let phone = generate_phone();
        let website = generate_website(&company_name);

        let lead_score = score_lead(
            &LeadAttributes {
                industry: industry.clone(),
                company_size,
                location: location.clone(),
            },
            prefs,
        );

        let created = Utc::now() - Duration::days(fastrand::i64(0..=30));

        SyntheticLead {
            lead_id: Uuid::new_v4().to_string()[..8].to_string(),
            company_name,
            industry,
            company_size: company_size.label().to_string(),
            location,
            contact_name: format!("{} {}", first_name, last_name),
            first_name,
            last_name,
            job_title,
            email,
            phone,
            website,
            lead_score,
            created_date: created.format("%Y-%m-%d").to_string(),
            status: "New".to_string(),
        }
    }
}

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[fastrand::usize(0..items.len())]
}

fn titles_for(industry: &str) -> &'static [&'static str] {
    JOB_TITLES
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, titles)| *titles)
        .unwrap_or(GENERIC_TITLES)
}

fn company_domain(company_name: &str, max_len: usize) -> String {
    company_name
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(max_len)
        .collect()
}

fn generate_email(first_name: &str, last_name: &str, company_name: &str) -> String {
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();
    let initial = &first[..1];

    let local_part = match fastrand::usize(0..4) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}{}", first, last),
        2 => format!("{}.{}", initial, last),
        _ => format!("{}{}", initial, last),
    };

    format!(
        "{}@{}{}",
        local_part,
        company_domain(company_name, 15),
        pick(DOMAIN_EXTENSIONS)
    )
}

fn generate_phone() -> String {
    let area_codes = ["415", "650", "510", "408", "925", "707", "831", "209"];
    format!(
        "({}) {}-{}",
        area_codes[fastrand::usize(0..area_codes.len())],
        fastrand::u32(200..=999),
        fastrand::u32(1000..=9999)
    )
}

fn generate_website(company_name: &str) -> String {
    format!(
        "https://www.{}{}",
        company_domain(company_name, 20),
        pick(DOMAIN_EXTENSIONS)
    )
}
