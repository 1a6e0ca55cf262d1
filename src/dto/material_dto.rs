use crate::utils::validation::validate_non_negative_quantity;
use serde::Deserialize;
use validator::Validate;

// Request para agregar material al estoque
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaterialRequest {
    #[serde(default)]
    pub name: String,
    #[validate(custom = "validate_non_negative_quantity")]
    pub quantity: i64,
    // ex: L, kg, un
    #[serde(default)]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_must_not_be_negative() {
        let request: CreateMaterialRequest =
            serde_json::from_str(r#"{"name":"Primer","quantity":-2,"unit":"L"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));

        let request: CreateMaterialRequest =
            serde_json::from_str(r#"{"name":"Primer","quantity":0,"unit":"L"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
