//! Products and gallery images shown on the page.

use inkshop_commerce::cart::Product;
use inkshop_commerce::gallery::GalleryImage;
use serde::Deserialize;

/// One product card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    /// The attributes the cart reads when "add" is pressed.
    pub fn to_product(&self) -> Product {
        Product::new(self.id.as_str(), self.name.as_str(), self.price, self.icon.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<CatalogEntry>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl Catalog {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::from_toml_str(include_str!("../catalog.toml")).unwrap();
        assert!(!catalog.products.is_empty());
        assert!(catalog.products.iter().all(|p| p.price > 0));
        assert!(!catalog.gallery.is_empty());
        // Tiles without a photo fall back to a placeholder.
        assert!(catalog.gallery.iter().any(|g| g.src.is_none()));
    }

    #[test]
    fn test_entry_to_product() {
        let entry = CatalogEntry {
            id: "a".to_string(),
            name: "Sleeve".to_string(),
            price: 5000,
            icon: "🖊".to_string(),
            description: String::new(),
        };
        let product = entry.to_product();
        assert_eq!(product.id.as_str(), "a");
        assert_eq!(product.unit_price, 5000);
    }
}
