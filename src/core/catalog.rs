use crate::domain::model::Product;
use rand::seq::SliceRandom;
use rand::Rng;

const STANDARD_PRODUCTS: [(&str, f64); 20] = [
    ("Яблоко", 1.0),
    ("Банан", 0.5),
    ("Апельсин", 1.5),
    ("Киви", 2.0),
    ("Виноград", 3.0),
    ("Персик", 1.2),
    ("Лимон", 1.2),
    ("Груша", 1.1),
    ("Арбуз", 5.0),
    ("Дыня", 4.5),
    ("Слива", 2.0),
    ("Гранат", 3.0),
    ("Малина", 3.5),
    ("Черника", 4.0),
    ("Клубника", 2.5),
    ("Грейпфрут", 1.8),
    ("Манго", 2.8),
    ("Фейхоа", 3.2),
    ("Персик", 1.6),
    ("Апельсин", 2.1),
];

/// Immutable, ordered list of products that receipts are sampled from.
///
/// Names are not unique: the standard catalog lists "Апельсин" and "Персик"
/// twice with different prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Returns `None` for an empty product list.
    pub fn new(products: Vec<Product>) -> Option<Self> {
        if products.is_empty() {
            return None;
        }
        Some(Self { products })
    }

    pub fn standard() -> Self {
        Self {
            products: STANDARD_PRODUCTS
                .iter()
                .map(|&(name, price)| Product::new(name, price))
                .collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Uniform draw with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Product {
        self.products
            .choose(rng)
            .expect("catalog is non-empty by construction")
    }

    pub fn contains(&self, name: &str, price: f64) -> bool {
        self.products
            .iter()
            .any(|p| p.name == name && p.price.value() == price)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_catalog_has_twenty_entries_in_order() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.products()[0], Product::new("Яблоко", 1.0));
        assert_eq!(catalog.products()[19], Product::new("Апельсин", 2.1));
    }

    #[test]
    fn test_duplicate_names_keep_distinct_prices() {
        let catalog = Catalog::standard();
        assert!(catalog.contains("Персик", 1.2));
        assert!(catalog.contains("Персик", 1.6));
        assert!(catalog.contains("Апельсин", 1.5));
        assert!(catalog.contains("Апельсин", 2.1));
        assert!(!catalog.contains("Персик", 1.5));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(Catalog::new(vec![]).is_none());
    }

    #[test]
    fn test_choose_returns_catalog_entries() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let product = catalog.choose(&mut rng);
            assert!(catalog.contains(&product.name, product.price.value()));
        }
    }
}
