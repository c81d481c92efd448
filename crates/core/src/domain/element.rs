use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five phases (오행) a birth date is mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

/// Presentation metadata shown next to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementTheme {
    pub title: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

// Indexed by `Element::index`.
static THEMES: [ElementTheme; 5] = [
    ElementTheme {
        title: "뿌리 깊은 나무 (木)",
        color: "#27ae60",
        icon: "/assets/wood_element.png",
    },
    ElementTheme {
        title: "타오르는 불꽃 (火)",
        color: "#e67e22",
        icon: "/assets/fire_element.png",
    },
    ElementTheme {
        title: "풍요로운 대지 (土)",
        color: "#d35400",
        icon: "/assets/earth_element.png",
    },
    ElementTheme {
        title: "단단한 황금 (金)",
        color: "#f1c40f",
        icon: "/assets/metal_element.png",
    },
    ElementTheme {
        title: "고요한 바다 (水)",
        color: "#2980b9",
        icon: "/assets/water_element.png",
    },
];

impl Element {
    /// Fixed ordering used by the classifier and the catalog.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element used when an external label does not name any element.
    pub const DEFAULT: Element = Element::Wood;

    pub fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// Hanja label, e.g. `木`.
    pub fn label(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Hangul reading of the label, e.g. `목`.
    pub fn korean_name(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn theme(self) -> &'static ElementTheme {
        &THEMES[self.index()]
    }

    /// Parses a hanja, hangul or English label. Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Element> {
        let label = label.trim();
        Element::ALL.into_iter().find(|e| {
            e.label() == label
                || e.korean_name() == label
                || e.english_name().eq_ignore_ascii_case(label)
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, element) in Element::ALL.into_iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn from_label_accepts_every_spelling() {
        assert_eq!(Element::from_label("木"), Some(Element::Wood));
        assert_eq!(Element::from_label("화"), Some(Element::Fire));
        assert_eq!(Element::from_label(" Earth "), Some(Element::Earth));
        assert_eq!(Element::from_label("METAL"), Some(Element::Metal));
        assert_eq!(Element::from_label("水"), Some(Element::Water));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(Element::from_label(""), None);
        assert_eq!(Element::from_label("風"), None);
        assert_eq!(Element::from_label("aether"), None);
    }

    #[test]
    fn serializes_as_hanja() {
        assert_eq!(serde_json::to_string(&Element::Metal).unwrap(), "\"金\"");
        let parsed: Element = serde_json::from_str("\"土\"").unwrap();
        assert_eq!(parsed, Element::Earth);
    }

    #[test]
    fn theme_title_carries_the_label() {
        for element in Element::ALL {
            assert!(element.theme().title.contains(element.label()));
            assert!(element.theme().color.starts_with('#'));
        }
    }
}
