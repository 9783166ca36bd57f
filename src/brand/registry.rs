//! In-memory brand registry shared across request handlers.

use dashmap::DashMap;

use crate::brand::profile::{BrandProfile, BrandVoice, Industry};
use crate::error::BrandError;

/// Thread-safe map of brand name to profile.
#[derive(Debug, Default)]
pub struct BrandRegistry {
    brands: DashMap<String, BrandProfile>,
}

impl BrandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            brands: DashMap::new(),
        }
    }

    /// Create a registry seeded with the default brand from configuration.
    pub fn with_default_brand(config: &crate::config::Config) -> Self {
        let registry = Self::new();
        let mut rng = rand::thread_rng();

        // Seeding cannot fail: the config validator rejects empty names.
        if let Ok(brand) = BrandProfile::new(
            config.default_brand_name.clone(),
            Industry::parse_or_general(&config.default_industry),
            BrandVoice::parse_or_friendly(&config.default_voice),
            config.default_audience.clone(),
            vec![
                "product_features".to_string(),
                "customer_stories".to_string(),
                "tips_tricks".to_string(),
                "behind_scenes".to_string(),
            ],
            3,
            &mut rng,
        ) {
            registry.brands.insert(brand.name.clone(), brand);
        }

        registry
    }

    /// Register a brand. Errors if the name is already taken.
    pub fn insert(&self, brand: BrandProfile) -> Result<(), BrandError> {
        if self.brands.contains_key(&brand.name) {
            return Err(BrandError::Duplicate {
                name: brand.name.clone(),
            });
        }
        self.brands.insert(brand.name.clone(), brand);
        Ok(())
    }

    /// Look up a brand by name.
    pub fn get(&self, name: &str) -> Result<BrandProfile, BrandError> {
        self.brands
            .get(name)
            .map(|entry| entry.clone())
            .ok_or_else(|| BrandError::NotFound {
                name: name.to_string(),
            })
    }

    /// Snapshot of all registered brands, sorted by name.
    pub fn list(&self) -> Vec<BrandProfile> {
        let mut brands: Vec<BrandProfile> =
            self.brands.iter().map(|entry| entry.value().clone()).collect();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        brands
    }

    /// Number of registered brands.
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_brand(name: &str) -> BrandProfile {
        let mut rng = StdRng::seed_from_u64(7);
        BrandProfile::new(
            name,
            Industry::Marketing,
            BrandVoice::Professional,
            "entrepreneurs",
            vec!["email marketing".to_string(), "automation".to_string()],
            5,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let registry = BrandRegistry::new();
        registry.insert(test_brand("BlazeIgnite")).unwrap();

        let brand = registry.get("BlazeIgnite").unwrap();
        assert_eq!(brand.industry, Industry::Marketing);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let registry = BrandRegistry::new();
        registry.insert(test_brand("BlazeIgnite")).unwrap();

        let result = registry.insert(test_brand("BlazeIgnite"));
        assert!(matches!(result, Err(BrandError::Duplicate { .. })));
    }

    #[test]
    fn missing_brand_is_not_found() {
        let registry = BrandRegistry::new();
        let result = registry.get("Nobody");
        assert!(matches!(result, Err(BrandError::NotFound { .. })));
    }

    #[test]
    fn default_brand_is_seeded_from_config() {
        let config = crate::config::Config::default();
        let registry = BrandRegistry::with_default_brand(&config);

        assert_eq!(registry.len(), 1);
        let brand = registry.get("Default Brand").unwrap();
        assert_eq!(brand.industry, Industry::Ecommerce);
        assert_eq!(brand.voice, BrandVoice::Friendly);
        assert_eq!(brand.content_pillars.len(), 4);
    }

    #[test]
    fn list_is_sorted_by_name() {
        let registry = BrandRegistry::new();
        registry.insert(test_brand("Zeta")).unwrap();
        registry.insert(test_brand("Alpha")).unwrap();

        let names: Vec<String> = registry.list().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Alpha".to_string(), "Zeta".to_string()]);
    }
}
