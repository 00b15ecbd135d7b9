use serde::{Deserialize, Serialize};

/// A person whose address may be unknown.
///
/// # Optional Chain
/// Every hop of `HumanPerson -> Address -> Country -> code` is an `Option`,
/// so any link can be missing independently of the others. Each record owns
/// its nested field outright; there is no sharing and no cycle.
///
/// See [`crate::chain`] for the ways of walking this chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanPerson {
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Postal address; the country may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: u32,
    #[serde(default)]
    pub country: Option<Country>,
}

/// Country with an optional ISO-style code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub code: Option<String>,
}

impl HumanPerson {
    /// Creates a person with the given address.
    pub fn new(name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Builds a person whose whole chain is present, ending in `code`.
    ///
    /// # Example
    /// ```
    /// use idiom_recipe::model::HumanPerson;
    ///
    /// let bobby = HumanPerson::located("bobby", 3, "UK");
    /// assert_eq!(bobby.address.unwrap().country.unwrap().code.as_deref(), Some("UK"));
    /// ```
    pub fn located(name: impl Into<String>, address_id: u32, code: impl Into<String>) -> Self {
        Self::new(
            name,
            Some(Address::new(address_id, Some(Country::new(Some(code.into()))))),
        )
    }
}

impl Address {
    pub fn new(id: u32, country: Option<Country>) -> Self {
        Self { id, country }
    }
}

impl Country {
    pub fn new(code: Option<String>) -> Self {
        Self { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_deserialize_as_absent() {
        let json = r#"{ "name": "alice", "address": { "id": 3 } }"#;
        let person: HumanPerson = serde_json::from_str(json).unwrap();
        assert_eq!(person.address, Some(Address::new(3, None)));
    }

    #[test]
    fn test_null_address_deserializes_as_absent() {
        let json = r#"{ "name": "alice", "address": null }"#;
        let person: HumanPerson = serde_json::from_str(json).unwrap();
        assert!(person.address.is_none());
    }

    #[test]
    fn test_located_person_serializes_full_chain() {
        let person = HumanPerson::located("bobby", 3, "UK");
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["address"]["country"]["code"], "UK");
        assert_eq!(value["address"]["id"], 3);
    }
}
