use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Photography,
    Videography,
    Social,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Photography, Category::Videography, Category::Social];

    pub fn id(self) -> &'static str {
        match self {
            Category::Photography => "photography",
            Category::Videography => "videography",
            Category::Social => "social",
        }
    }

    /// Capitalised id shown on the card badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            Category::Photography => "Photography",
            Category::Videography => "Videography",
            Category::Social => "Social",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Photography => "badge badge-photo",
            Category::Videography => "badge badge-video",
            Category::Social => "badge badge-social",
        }
    }
}

/// What a portfolio entry links to, and therefore how it is rendered.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Media {
    GalleryLink { thumbnail_url: String, link: String },
    #[serde(rename = "tiktok")]
    ShortVideo { media_url: String },
    #[serde(rename = "instagram")]
    PhotoPost { media_url: String },
}

impl Media {
    /// Where the card's outbound link points.
    pub fn external_url(&self) -> &str {
        match self {
            Media::GalleryLink { link, .. } => link,
            Media::ShortVideo { media_url } | Media::PhotoPost { media_url } => media_url,
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            Media::GalleryLink { .. } => "View Gallery",
            Media::ShortVideo { .. } => "View on TikTok",
            Media::PhotoPost { .. } => "View on Instagram",
        }
    }

    /// The TikTok video id: last path segment of the post URL, query dropped.
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Media::ShortVideo { media_url } => {
                let path = media_url.split('?').next().unwrap_or_default();
                path.trim_end_matches('/').rsplit('/').next().filter(|id| !id.is_empty())
            }
            _ => None,
        }
    }

    pub fn urls(&self) -> Vec<&str> {
        match self {
            Media::GalleryLink { thumbnail_url, link } => vec![thumbnail_url, link],
            Media::ShortVideo { media_url } | Media::PhotoPost { media_url } => vec![media_url],
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(flatten)]
    pub media: Media,
}
