use serde::{Deserialize, Serialize};

use super::{lenient, lenient_id};

/// A farmer profile as listed in the public directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub farm_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_image: Option<String>,
}

impl Farmer {
    /// The name, when present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// First letter of the name, used as an avatar when there is no image.
    pub fn initial(&self) -> char {
        self.display_name()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_directory_entry() {
        let farmer: Farmer = serde_json::from_value(json!({
            "_id": "f1",
            "name": "asha",
            "farmName": "Green Acres",
            "location": { "city": "Pune" }
        }))
        .unwrap();

        assert_eq!(farmer.display_name(), Some("asha"));
        assert_eq!(farmer.farm_name.as_deref(), Some("Green Acres"));
        assert_eq!(farmer.location, None);
        assert_eq!(farmer.initial(), 'A');
    }

    #[test]
    fn nameless_farmer_has_placeholder_initial() {
        let farmer = Farmer { name: Some(String::new()), ..Farmer::default() };
        assert_eq!(farmer.display_name(), None);
        assert_eq!(farmer.initial(), '?');
    }
}
