//! Static reference tables: facilities, categories and which categories each
//! facility offers. Fixed configuration, not persisted or mutable at runtime;
//! array order is display order.

use serde::Serialize;

/// Renderer tag for a facility or category icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    #[serde(rename = "building")]
    Building,
    #[serde(rename = "building-2")]
    Building2,
    #[serde(rename = "school")]
    School,
    #[serde(rename = "waves")]
    Waves,
    #[serde(rename = "dumbbell")]
    Dumbbell,
    #[serde(rename = "bike")]
    Bike,
    #[serde(rename = "circle-dot")]
    CircleDot,
    #[serde(rename = "book-open")]
    BookOpen,
    #[serde(rename = "activity")]
    Activity,
}

impl Icon {
    /// Total mapping from a stored tag; unknown tags render as a generic building.
    pub fn from_tag(tag: &str) -> Icon {
        match tag {
            "building" => Icon::Building,
            "building-2" => Icon::Building2,
            "school" => Icon::School,
            "waves" => Icon::Waves,
            "dumbbell" => Icon::Dumbbell,
            "bike" => Icon::Bike,
            "circle-dot" => Icon::CircleDot,
            "book-open" => Icon::BookOpen,
            "activity" => Icon::Activity,
            _ => Icon::Building2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Center {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Icon,
}

pub const CENTERS: &[Center] = &[
    Center {
        id: "center4",
        name: "문화체육센터",
        icon: Icon::Building2,
        address: Some("용산구 백범로 350"),
        phone: Some("02-707-2494"),
    },
    Center {
        id: "center2",
        name: "용산청소년센터",
        icon: Icon::School,
        address: Some("용산구 이촌로71길 24"),
        phone: Some("070-4906-2606"),
    },
    Center {
        id: "center1",
        name: "꿈나무종합타운",
        icon: Icon::Building2,
        address: Some("용산구 백범로 329"),
        phone: Some("02-707-0704"),
    },
    Center {
        id: "center5",
        name: "이태원초등학교수영장",
        icon: Icon::Waves,
        address: Some("용산구 녹사평대로 40길 19"),
        phone: Some("02-797-2492"),
    },
    Center {
        id: "center6",
        name: "한강로피트니스센터",
        icon: Icon::Dumbbell,
        address: Some("용산구 서빙고로17 지하1층"),
        phone: Some("02-798-5019"),
    },
    Center {
        id: "center3",
        name: "원효로다목적체육관",
        icon: Icon::Building,
        address: Some("용산구 원효로3가 51-26"),
        phone: Some("02-707-2492"),
    },
];

pub const CATEGORIES: &[Category] = &[
    Category { id: "cat1", name: "수영", icon: Icon::Waves },
    Category { id: "cat2", name: "헬스", icon: Icon::Dumbbell },
    Category { id: "cat3", name: "생활체육", icon: Icon::Bike },
    Category { id: "cat4", name: "기구필라테스", icon: Icon::CircleDot },
    Category { id: "cat5", name: "문화강좌", icon: Icon::BookOpen },
    Category { id: "cat6", name: "서킷핏", icon: Icon::Activity },
];

const CENTER_CATEGORY_NAMES: &[(&str, &[&str])] = &[
    ("꿈나무종합타운", &["생활체육", "문화강좌"]),
    ("용산청소년센터", &["수영", "헬스", "생활체육", "문화강좌"]),
    ("원효로다목적체육관", &["생활체육"]),
    ("문화체육센터", &["수영", "헬스", "생활체육", "기구필라테스", "문화강좌"]),
    ("이태원초등학교수영장", &["수영", "서킷핏", "기구필라테스"]),
    ("한강로피트니스센터", &["헬스", "생활체육", "기구필라테스"]),
];

/// Categories offered at the given facility, in category display order.
/// Unknown facility names yield an empty list.
pub fn categories_for_center(center_name: &str) -> Vec<&'static Category> {
    let Some((_, names)) = CENTER_CATEGORY_NAMES
        .iter()
        .find(|(name, _)| *name == center_name)
    else {
        return Vec::new();
    };

    CATEGORIES
        .iter()
        .filter(|category| names.contains(&category.name))
        .collect()
}
