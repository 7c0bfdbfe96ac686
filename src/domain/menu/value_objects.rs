use serde::{Deserialize, Serialize};

// ============================================================================
// Menu Value Objects
// ============================================================================

/// A single orderable catalog entry. `id` is the stable key other records
/// reference; `image` is a URI served by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// The fixed set written into an empty catalog on first read.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "margherita-pizza".to_string(),
            name: "Margherita Pizza".to_string(),
            description: "Classic pizza with fresh mozzarella, basil, and tomato sauce."
                .to_string(),
            price: 10.99,
            image: "/images/margherita.jpg".to_string(),
        },
        MenuItem {
            id: "cheeseburger".to_string(),
            name: "Cheeseburger".to_string(),
            description: "Juicy beef patty, cheddar cheese, lettuce, and tomato.".to_string(),
            price: 8.49,
            image: "/images/cheeseburger.jpg".to_string(),
        },
        MenuItem {
            id: "veggie-bowl".to_string(),
            name: "Veggie Bowl".to_string(),
            description: "Roasted vegetables with quinoa and tahini drizzle.".to_string(),
            price: 9.25,
            image: "/images/veggie-bowl.jpg".to_string(),
        },
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================
