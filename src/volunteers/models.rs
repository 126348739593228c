use serde::Deserialize;

// volunteer
//  ├── id
//  ├── full_name
//  ├── role
//  ├── city / state        (nullable)
//  ├── email / phone       (nullable)
//  ├── status              ("Active", ...)
//  └── availability[]      (nullable, may be empty)

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VolunteerRecord {
    pub id: i64,
    pub full_name: String,
    pub role: String,

    pub city: Option<String>,
    pub state: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub status: String,
    pub availability: Option<Vec<String>>,
}

impl VolunteerRecord {
    /// Availability labels, empty when the field was absent or null.
    pub fn availability(&self) -> &[String] {
        self.availability.as_deref().unwrap_or(&[])
    }
}
