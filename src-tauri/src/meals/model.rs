//! Wire types for TheMealDB.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of indexed `strIngredientN` / `strMeasureN` pairs in a record.
pub const MAX_INGREDIENTS: usize = 20;

#[derive(Deserialize, Debug, Default)]
pub struct MealsResponse {
    /// `null` when nothing matched.
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Everything else, including the indexed ingredient and measure fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Meal {
    /// `"measure ingredient"` lines for every pair whose ingredient is present.
    pub fn ingredients(&self) -> Vec<String> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let ingredient = self.text_field(&format!("strIngredient{}", i))?;
                let line = match self.text_field(&format!("strMeasure{}", i)) {
                    Some(measure) => format!("{} {}", measure, ingredient),
                    None => ingredient.to_string(),
                };
                Some(line)
            })
            .collect()
    }

    /// Short card description: category and area, whichever are known.
    pub fn summary(&self) -> String {
        [self.category.as_deref(), self.area.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Treat empty strings the way the API's `null`s are treated.
pub fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
