use shared::catalog::{CategoryFilter, catalog, filter_catalog, find_shoe, shoe_details};
use shared::{CatalogItem, ShoeDetail};

use crate::error::CatalogError;

/// Read-only footwear catalog served by the API.
#[derive(Clone)]
pub struct CatalogService {
    items: Vec<CatalogItem>,
    details: Vec<ShoeDetail>,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(catalog(), shoe_details())
    }
}

impl CatalogService {
    pub fn new(items: Vec<CatalogItem>, details: Vec<ShoeDetail>) -> Self {
        Self { items, details }
    }

    pub fn list(&self, category: Option<&str>) -> Result<Vec<CatalogItem>, CatalogError> {
        let filter = match category {
            None => CategoryFilter::All,
            Some(raw) => raw
                .parse::<CategoryFilter>()
                .map_err(|_| CatalogError::UnknownCategory(raw.to_string()))?,
        };
        Ok(filter_catalog(&self.items, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Unlike the detail screen, the API does not fall back to the first
    /// record for an unknown id.
    pub fn detail(&self, id: &str) -> Result<ShoeDetail, CatalogError> {
        find_shoe(&self.details, id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    #[test]
    fn test_list_filters() {
        let service = CatalogService::default();
        assert_eq!(service.list(None).unwrap().len(), 4);
        let casual = service.list(Some("casual")).unwrap();
        assert_eq!(casual.len(), 1);
        assert_eq!(casual[0].category, Category::Casual);
        assert!(matches!(
            service.list(Some("sandals")),
            Err(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_detail_lookup() {
        let service = CatalogService::default();
        assert_eq!(service.detail("1").unwrap().name, "Orthotic Support Walker");
        assert!(matches!(service.detail("4"), Err(CatalogError::NotFound(_))));
    }
}
