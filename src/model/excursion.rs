use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExcursionDto {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateExcursionDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateExcursionDto {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub enabled: Option<bool>,
}
