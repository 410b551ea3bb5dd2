use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub slug: Category,
    pub label: String,
    pub option_label: String,
    pub color: String,
    pub display_order: i32,
}

impl CategoryResponseDto {
    pub fn new(category: Category, display_order: i32) -> Self {
        Self {
            slug: category,
            label: category.label().to_string(),
            option_label: category.option_label().to_string(),
            color: category.color().to_string(),
            display_order,
        }
    }
}
