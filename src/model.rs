//! Wire data model
//!
//! Records and pagination metadata as returned by the character API.
//! Records are immutable once fetched; `PageInfo` is replaced wholesale
//! on every successful fetch, never merged field-by-field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Character
// ============================================================================

/// Life status reported for a character
///
/// The API capitalizes `Alive` and `Dead` on the wire but not `unknown`;
/// aliases accept both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    #[serde(alias = "Alive")]
    Alive,
    #[serde(alias = "Dead")]
    Dead,
    #[serde(alias = "Unknown")]
    Unknown,
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// A named API resource reference (origin or last known location)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Display name of the resource
    pub name: String,
    /// URL of the resource, empty when the API has no record
    pub url: String,
}

/// A single character record
///
/// `id` is the unique identifier the merge policy deduplicates on. The
/// descriptive fields past `image` are carried through untouched for
/// consumers; the core never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Life status
    pub status: CharacterStatus,
    /// Species label
    pub species: String,
    /// Subtype or variant, frequently empty
    #[serde(rename = "type")]
    pub kind: String,
    /// Gender label
    pub gender: String,
    /// World of origin
    pub origin: ResourceRef,
    /// Last known location
    pub location: ResourceRef,
    /// Portrait image URI
    pub image: String,
    /// Episode URLs the character appears in
    pub episode: Vec<String>,
    /// Canonical URL of this record
    pub url: String,
    /// Creation timestamp of the record in the API database
    pub created: DateTime<Utc>,
}

// ============================================================================
// Pagination Metadata
// ============================================================================

/// Pagination metadata returned alongside every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total records matching the query
    pub count: u64,
    /// Total pages available
    pub pages: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub prev: Option<String>,
}

impl PageInfo {
    /// Check whether a page exists after the given one
    pub fn has_page_after(&self, page: u32) -> bool {
        page < self.pages
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// One page of the paginated character listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata
    pub info: PageInfo,
    /// Records on this page
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character_json(id: u64, name: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "status": status,
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
            "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        })
    }

    #[test]
    fn test_character_deserialize() {
        let character: Character =
            serde_json::from_value(character_json(1, "Rick Sanchez", "Alive")).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, CharacterStatus::Alive);
        assert_eq!(character.species, "Human");
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.episode.len(), 1);
    }

    #[test]
    fn test_character_status_wire_spellings() {
        // Capitalized for Alive/Dead, lowercase for unknown, as the API sends them
        for (wire, expected) in [
            ("Alive", CharacterStatus::Alive),
            ("Dead", CharacterStatus::Dead),
            ("unknown", CharacterStatus::Unknown),
        ] {
            let character: Character =
                serde_json::from_value(character_json(1, "Rick Sanchez", wire)).unwrap();
            assert_eq!(character.status, expected);
        }
    }

    #[test]
    fn test_character_status_rejects_garbage() {
        let result: std::result::Result<Character, _> =
            serde_json::from_value(character_json(1, "Rick Sanchez", "zombie"));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_deserialize() {
        let page: CharacterPage = serde_json::from_value(json!({
            "info": {"count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null},
            "results": [character_json(1, "Rick Sanchez", "Alive")]
        }))
        .unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.pages, 42);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_page_info_has_page_after() {
        let info = PageInfo {
            count: 60,
            pages: 3,
            next: None,
            prev: None,
        };
        assert!(info.has_page_after(1));
        assert!(info.has_page_after(2));
        assert!(!info.has_page_after(3));
        assert!(!info.has_page_after(4));
    }
}
