use serde::{
    Deserialize,
    Serialize,
};

/// Nested company info as delivered by the upstream API. Only the fields the
/// dashboard consumes are kept; everything else is ignored during decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// One roster entry. `department` and `rating` start out empty when the
/// record comes off the wire and are filled exactly once at ingestion (see
/// `core::enrich`); after that they never change for the lifetime of the
/// record. The same type doubles as the bookmark snapshot, which is why it
/// serializes too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn job_title(&self) -> Option<&str> {
        self.company.as_ref().and_then(|company| company.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_user_json() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "+1 555-0100",
            "age": 36,
            "height": 170.2,
            "company": { "title": "Analyst", "department": "Engineering", "name": "Babbage & Co" },
            "address": { "address": "12 Analytical Way", "city": "London", "postalCode": "E1 6AN" },
            "university": "University of London"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.job_title(), Some("Analyst"));
        assert_eq!(employee.company.as_ref().unwrap().department.as_deref(), Some("Engineering"));
        assert_eq!(employee.address.as_ref().unwrap().postal_code.as_deref(), Some("E1 6AN"));
        assert!(employee.department.is_none());
        assert!(employee.rating.is_none());
        assert!(employee.skills.is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let employee: Employee =
            serde_json::from_str(r#"{ "id": 1, "firstName": "Sam", "lastName": "Roy" }"#).unwrap();
        assert_eq!(employee.email, "");
        assert_eq!(employee.age, 0);
        assert!(employee.address.is_none());
    }
}
