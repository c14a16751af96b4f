use std::collections::HashSet;
use std::rc::Rc;

use log::{error, info};
use thiserror::Error;

use super::models::PortfolioItem;

const PORTFOLIO_JSON: &str = include_str!("../../assets/portfolio.json");

/// The fixed portfolio list. Shared read-only between renders.
pub type Catalog = Rc<[PortfolioItem]>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("portfolio content is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio item id {0} is used more than once")]
    DuplicateId(u32),
    #[error("portfolio item {id} has an empty title")]
    MissingTitle { id: u32 },
    #[error("portfolio item {id} has an unusable url {url:?}")]
    BadUrl { id: u32, url: String },
}

pub fn load() -> Result<Catalog, CatalogError> {
    parse(PORTFOLIO_JSON)
}

/// Loads the embedded catalog, logging and degrading to an empty list on failure.
pub fn load_or_empty() -> Catalog {
    match load() {
        Ok(catalog) => {
            info!("Loaded {} portfolio items", catalog.len());
            catalog
        }
        Err(e) => {
            error!("Failed to load portfolio: {}", e);
            Rc::from(Vec::new())
        }
    }
}

pub fn parse(raw: &str) -> Result<Catalog, CatalogError> {
    let items: Vec<PortfolioItem> = serde_json::from_str(raw)?;
    validate(&items)?;
    Ok(items.into())
}

fn validate(items: &[PortfolioItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        if item.title.trim().is_empty() {
            return Err(CatalogError::MissingTitle { id: item.id });
        }
        for url in item.media.urls() {
            if !url.starts_with("https://") || url.len() <= "https://".len() {
                return Err(CatalogError::BadUrl { id: item.id, url: url.to_string() });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::{Category, Media};

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].id, 17);
        assert!(catalog.iter().any(|i| matches!(i.media, Media::ShortVideo { .. })));
        assert!(catalog.iter().any(|i| matches!(i.media, Media::PhotoPost { .. })));
        for category in Category::ALL {
            assert!(catalog.iter().any(|i| i.category == category));
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": 5, "type": "instagram", "title": "A", "description": "", "category": "social",
             "media_url": "https://www.instagram.com/p/a/"},
            {"id": 5, "type": "instagram", "title": "B", "description": "", "category": "social",
             "media_url": "https://www.instagram.com/p/b/"}
        ]"#;
        assert!(matches!(parse(raw), Err(CatalogError::DuplicateId(5))));
    }

    #[test]
    fn non_https_urls_are_rejected() {
        let raw = r#"[
            {"id": 1, "type": "gallery_link", "title": "G", "description": "", "category": "photography",
             "thumbnail_url": "https://a/t.png", "link": "http://photos.example/g"}
        ]"#;
        match parse(raw) {
            Err(CatalogError::BadUrl { id, url }) => {
                assert_eq!(id, 1);
                assert_eq!(url, "http://photos.example/g");
            }
            other => panic!("expected BadUrl, got {:?}", other),
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let raw = r#"[
            {"id": 3, "type": "tiktok", "title": "  ", "description": "", "category": "videography",
             "media_url": "https://www.tiktok.com/@x/video/1"}
        ]"#;
        assert!(matches!(parse(raw), Err(CatalogError::MissingTitle { id: 3 })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse("{"), Err(CatalogError::Parse(_))));
    }
}
