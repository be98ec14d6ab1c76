use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Category, DanceVideo, Difficulty};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Video not found")]
    NotFound(String),
    #[error("duplicate video id in catalog: {0}")]
    DuplicateId(String),
}

pub static DANCE_VIDEOS: [DanceVideo; 5] = [
    DanceVideo {
        id: "urban-electric",
        title: "Urban Electric Groove",
        choreographer: "Nova Chen",
        difficulty: Difficulty::Intermediate,
        duration: "1:12",
        category: Category::Urban,
        description: "A high-energy routine that blends locking, popping, and modern urban grooves. Perfect for performers who love bold musicality.",
        preview_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
        cover_image: "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?auto=format&fit=crop&w=1200&q=80",
        storage_object_key: "videos/urban-electric-groove.mp4",
    },
    DanceVideo {
        id: "latin-sunrise",
        title: "Latin Sunrise Flow",
        choreographer: "Camila Reyes",
        difficulty: Difficulty::Beginner,
        duration: "0:58",
        category: Category::Latin,
        description: "A vibrant reggaeton-inspired combo with smooth isolations and plenty of room for personal flair.",
        preview_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        cover_image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1200&q=80",
        storage_object_key: "videos/latin-sunrise-flow.mp4",
    },
    DanceVideo {
        id: "kpop-nebula",
        title: "Nebula Pop Sequence",
        choreographer: "Ji-eun Park",
        difficulty: Difficulty::Advanced,
        duration: "1:26",
        category: Category::KPop,
        description: "A polished K-pop routine with precise angles, synchronized footwork, and cinematic transitions.",
        preview_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
        cover_image: "https://images.unsplash.com/photo-1533109721029-5048e1b6b002?auto=format&fit=crop&w=1200&q=80",
        storage_object_key: "videos/nebula-pop-sequence.mp4",
    },
    DanceVideo {
        id: "ballet-lumina",
        title: "Lumina Ballet Variation",
        choreographer: "Elena Morozova",
        difficulty: Difficulty::Intermediate,
        duration: "1:05",
        category: Category::Ballet,
        description: "A neoclassical ballet phrase featuring sweeping adagios and delicate footwork inspired by moonlit performances.",
        preview_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
        cover_image: "https://images.unsplash.com/photo-1464965911861-746a04b4bca6?auto=format&fit=crop&w=1200&q=80",
        storage_object_key: "videos/lumina-ballet-variation.mp4",
    },
    DanceVideo {
        id: "hiphop-stratos",
        title: "Stratos Hip-Hop Routine",
        choreographer: "Dante Miles",
        difficulty: Difficulty::Advanced,
        duration: "1:18",
        category: Category::HipHop,
        description: "An explosive hip-hop set with athletic floorwork, sharp dynamics, and glitched-out beats for dramatic stage moments.",
        preview_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
        cover_image: "https://images.unsplash.com/photo-1521334884684-d80222895322?auto=format&fit=crop&w=1200&q=80",
        storage_object_key: "videos/stratos-hiphop-routine.mp4",
    },
];

/// Read-only view over a fixed, ordered video table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    videos: &'static [DanceVideo],
}

impl Catalog {
    pub fn new(videos: &'static [DanceVideo]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(videos.len());
        for video in videos {
            if !seen.insert(video.id) {
                return Err(CatalogError::DuplicateId(video.id.to_string()));
            }
        }
        Ok(Self { videos })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(&DANCE_VIDEOS)
    }

    pub fn list(&self) -> &'static [DanceVideo] {
        self.videos
    }

    /// Exact, case-sensitive id match.
    pub fn get(&self, id: &str) -> Result<&'static DanceVideo, CatalogError> {
        self.videos
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_has_unique_ids_in_fixed_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.list().iter().map(|v| v.id).collect();
        assert_eq!(
            ids,
            vec!["urban-electric", "latin-sunrise", "kpop-nebula", "ballet-lumina", "hiphop-stratos"]
        );
    }

    #[test]
    fn list_is_stable_across_calls() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.list();
        let second = catalog.list();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn get_returns_video_with_requested_id() {
        let catalog = Catalog::builtin().unwrap();
        for video in catalog.list() {
            assert_eq!(catalog.get(video.id).unwrap().id, video.id);
        }
    }

    #[test]
    fn get_requires_exact_match() {
        let catalog = Catalog::builtin().unwrap();
        for id in ["does-not-exist", "URBAN-ELECTRIC", "urban", "urban-electric ", ""] {
            assert_eq!(catalog.get(id), Err(CatalogError::NotFound(id.to_string())));
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let duplicated: &'static [DanceVideo] = Box::leak(Box::new([DANCE_VIDEOS[0], DANCE_VIDEOS[0]]));
        assert_eq!(
            Catalog::new(duplicated).unwrap_err(),
            CatalogError::DuplicateId("urban-electric".into())
        );
    }
}
