// file: src/models/collection.rs
// description: search collection envelope returned by the image library API
// reference: https://images.nasa.gov/docs/images.nasa.gov_api_docs.pdf

use serde::{Deserialize, Serialize};

/// Relation tag of the pagination link pointing at the following page.
pub const NEXT_REL: &str = "next";

/// Top-level body of `/search` and of every page reached through a `next` link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub collection: SearchResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub metadata: CollectionMetadata,

    #[serde(default)]
    pub items: Vec<Item>,

    /// Absent on the last page.
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionMetadata {
    #[serde(default)]
    pub total_hits: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// URL of the per-asset file listing (`collection.json`).
    pub href: String,

    #[serde(default, rename = "data")]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub media_type: String,
    pub nasa_id: String,

    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,

    #[serde(default)]
    pub prompt: Option<String>,
}

impl SearchResult {
    pub fn total_hits(&self) -> usize {
        self.metadata.total_hits
    }

    pub fn next_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == NEXT_REL)
            .map(|link| link.href.as_str())
    }
}

impl Item {
    pub fn assets_of_type<'a>(&'a self, media_type: &'a str) -> impl Iterator<Item = &'a Asset> {
        self.assets
            .iter()
            .filter(move |asset| asset.media_type == media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "collection": {
            "version": "1.0",
            "href": "https://images-api.nasa.gov/search?q=Ilan%20Ramon",
            "items": [
                {
                    "href": "https://images-assets.nasa.gov/image/sts107-s-001/collection.json",
                    "data": [
                        {"center": "JSC", "title": "STS-107 crew", "nasa_id": "sts107-s-001", "media_type": "image"}
                    ],
                    "links": [{"href": "https://images-assets.nasa.gov/image/sts107-s-001/sts107-s-001~thumb.jpg", "rel": "preview", "render": "image"}]
                },
                {
                    "href": "https://images-assets.nasa.gov/video/sts107-launch/collection.json",
                    "data": [{"nasa_id": "sts107-launch", "media_type": "video"}]
                }
            ],
            "metadata": {"total_hits": 120},
            "links": [
                {"rel": "prev", "prompt": "Previous", "href": "https://images-api.nasa.gov/search?q=Ilan%20Ramon&page=1"},
                {"rel": "next", "prompt": "Next", "href": "https://images-api.nasa.gov/search?q=Ilan%20Ramon&page=3"}
            ]
        }
    }"#;

    #[test]
    fn test_parse_search_page() {
        let envelope: SearchEnvelope = serde_json::from_str(PAGE).unwrap();
        let result = envelope.collection;

        assert_eq!(result.total_hits(), 120);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].assets[0].nasa_id, "sts107-s-001");
        assert_eq!(result.items[0].assets[0].title.as_deref(), Some("STS-107 crew"));
        assert_eq!(
            result.next_link(),
            Some("https://images-api.nasa.gov/search?q=Ilan%20Ramon&page=3")
        );
    }

    #[test]
    fn test_last_page_without_links() {
        let body = r#"{"collection": {"items": [], "metadata": {"total_hits": 0}}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.collection.total_hits(), 0);
        assert!(envelope.collection.next_link().is_none());
    }

    #[test]
    fn test_assets_of_type_skips_other_media() {
        let item = Item {
            href: "https://example.com/collection.json".to_string(),
            assets: vec![
                Asset {
                    media_type: "video".to_string(),
                    nasa_id: "a".to_string(),
                    title: None,
                },
                Asset {
                    media_type: "image".to_string(),
                    nasa_id: "b".to_string(),
                    title: None,
                },
                Asset {
                    media_type: "audio".to_string(),
                    nasa_id: "c".to_string(),
                    title: None,
                },
                Asset {
                    media_type: "image".to_string(),
                    nasa_id: "d".to_string(),
                    title: None,
                },
            ],
        };

        let ids: Vec<&str> = item
            .assets_of_type("image")
            .map(|asset| asset.nasa_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "d"]);
    }
}
