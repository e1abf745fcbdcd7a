use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address embedded in a [`Person`]. Every part is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Non-blank parts joined with `", "`, or `No address` when nothing is filled in.
    pub fn summary(&self) -> String {
        let parts: Vec<&str> = [&self.street, &self.city, &self.state, &self.zip_code, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.trim().is_empty())
            .collect();
        if parts.is_empty() {
            "No address".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A submitted person record, stored as decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::age::lenient")]
    pub age: i32,
    pub address: Option<Address>,
    pub children: Option<Vec<String>>,
}

impl Person {
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn address_summary(&self) -> String {
        self.address
            .as_ref()
            .map(Address::summary)
            .unwrap_or_else(|| "No address".to_string())
    }

    /// `None` when there are no children; absent and empty lists read the same.
    pub fn children_summary(&self) -> Option<String> {
        match self.children.as_deref() {
            Some(children) if !children.is_empty() => Some(children.join(", ")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ann() -> serde_json::Value {
        json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "age": 30,
            "address": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zipCode": "62701",
                "country": "US"
            },
            "children": ["Sam", "Max"]
        })
    }

    #[test]
    fn decodes_camel_case_payload() {
        let p: Person = serde_json::from_value(ann()).unwrap();
        assert_eq!(p.first_name.as_deref(), Some("Ann"));
        assert_eq!(p.age, 30);
        let address = p.address.as_ref().unwrap();
        assert_eq!(address.zip_code.as_deref(), Some("62701"));
        assert_eq!(p.children, Some(vec!["Sam".to_string(), "Max".to_string()]));
    }

    #[test]
    fn encodes_back_to_the_same_shape() {
        let p: Person = serde_json::from_value(ann()).unwrap();
        assert_eq!(serde_json::to_value(&p).unwrap(), ann());
    }

    #[test]
    fn missing_optionals_decode_as_none_and_encode_as_null() {
        let p: Person = serde_json::from_value(json!({"firstName": "Bo", "lastName": "K", "age": 5})).unwrap();
        assert_eq!(p.address, None);
        assert_eq!(p.children, None);
        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["address"], serde_json::Value::Null);
        assert_eq!(out["children"], serde_json::Value::Null);
    }

    #[test]
    fn empty_object_is_a_valid_person() {
        let p: Person = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, Person::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: Person = serde_json::from_value(json!({"firstName": "Ann", "nickname": "A"})).unwrap();
        assert_eq!(p.first_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn wrong_field_types_fail() {
        assert!(serde_json::from_value::<Person>(json!({"firstName": 12})).is_err());
        assert!(serde_json::from_value::<Person>(json!({"children": "Sam"})).is_err());
        assert!(serde_json::from_value::<Person>(json!({"address": "1 Main St"})).is_err());
    }

    #[test]
    fn text_fields_do_not_coerce_scalars() {
        for payload in [
            json!({"firstName": 12}),
            json!({"lastName": true}),
            json!({"address": {"zipCode": 62701}}),
            json!({"children": ["Sam", 7]}),
        ] {
            assert!(serde_json::from_value::<Person>(payload.clone()).is_err(), "{payload} should fail");
        }
    }

    #[test]
    fn address_summary_skips_blank_parts() {
        let a = Address {
            street: Some("1 Main St".into()),
            city: Some("  ".into()),
            state: None,
            zip_code: Some("62701".into()),
            country: Some("".into()),
        };
        assert_eq!(a.summary(), "1 Main St, 62701");
        assert_eq!(Address::default().summary(), "No address");
        assert_eq!(Person::default().address_summary(), "No address");
    }

    #[test]
    fn children_summary_treats_empty_as_absent() {
        let mut p = Person::default();
        assert_eq!(p.children_summary(), None);
        p.children = Some(vec![]);
        assert_eq!(p.children_summary(), None);
        p.children = Some(vec!["Sam".into(), "Max".into()]);
        assert_eq!(p.children_summary().as_deref(), Some("Sam, Max"));
    }

    #[test]
    fn full_name_joins_present_parts() {
        let mut p = Person { first_name: Some("Bo".into()), last_name: Some("K".into()), ..Person::default() };
        assert_eq!(p.full_name(), "Bo K");
        p.last_name = None;
        assert_eq!(p.full_name(), "Bo");
    }
}
