//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Food plate record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(deserialize_with = "price_from_json")]
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodPlate {
    /// Same plate with the availability flag flipped
    pub fn with_availability_toggled(&self) -> Self {
        Self {
            available: !self.available,
            ..self.clone()
        }
    }

    /// Same plate carrying the form's fields; id and availability are kept
    pub fn with_draft(&self, draft: NewFoodPlate) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available: self.available,
        }
    }

    /// Price as shown on the card, e.g. `R$ 19.90`
    pub fn display_price(&self) -> String {
        format!("R$ {}", self.price)
    }
}

/// Creation payload: a plate before the backend assigns `id` and `available`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl NewFoodPlate {
    /// Name and price are the only fields the form insists on
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }
}

// json-server happily stores prices as numbers when they were typed that way
fn price_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ravioli() -> FoodPlate {
        FoodPlate {
            id: 1,
            name: "Ravioli".to_string(),
            image: "https://example.com/ravioli.png".to_string(),
            price: "19.90".to_string(),
            description: "Ravioli de queijo".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_decode_backend_plate() {
        let json = r#"{
            "id": 1,
            "name": "Ravioli",
            "image": "https://example.com/ravioli.png",
            "price": "19.90",
            "description": "Ravioli de queijo",
            "available": true
        }"#;
        let plate: FoodPlate = serde_json::from_str(json).unwrap();
        assert_eq!(plate, ravioli());
    }

    #[test]
    fn test_numeric_price_is_kept_as_text() {
        let json = r#"{"id":3,"name":"Pizza","image":"x","price":25.5,"description":"y","available":false}"#;
        let plate: FoodPlate = serde_json::from_str(json).unwrap();
        assert_eq!(plate.price, "25.5");
    }

    #[test]
    fn test_draft_has_no_id_or_availability() {
        let draft = NewFoodPlate {
            name: "Pizza".to_string(),
            image: "x".to_string(),
            price: "25.00".to_string(),
            description: "y".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("available"));
    }

    #[test]
    fn test_toggle_availability_keeps_other_fields() {
        let plate = ravioli();
        let toggled = plate.with_availability_toggled();
        assert!(!toggled.available);
        assert_eq!(toggled.id, plate.id);
        assert_eq!(toggled.name, plate.name);
        assert_eq!(toggled.with_availability_toggled(), plate);
    }

    #[test]
    fn test_with_draft_keeps_identity_and_availability() {
        let mut plate = ravioli();
        plate.available = false;
        let edited = plate.with_draft(NewFoodPlate {
            name: "Ravioli de carne".to_string(),
            image: "https://example.com/carne.png".to_string(),
            price: "22.50".to_string(),
            description: String::new(),
        });
        assert_eq!(edited.id, 1);
        assert!(!edited.available);
        assert_eq!(edited.name, "Ravioli de carne");
        assert_eq!(edited.image, "https://example.com/carne.png");
        assert_eq!(edited.price, "22.50");
        assert_eq!(edited.description, "");
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = NewFoodPlate::default();
        assert!(!draft.is_complete());
        draft.name = "Pizza".to_string();
        assert!(!draft.is_complete());
        draft.price = "  ".to_string();
        assert!(!draft.is_complete());
        draft.price = "25.00".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_display_price() {
        assert_eq!(ravioli().display_price(), "R$ 19.90");
    }
}
