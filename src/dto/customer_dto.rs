use serde::Deserialize;

// Request para cadastrar un cliente; los campos vacíos se aceptan tal cual
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub plate: String,
}
