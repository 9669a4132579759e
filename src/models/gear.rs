use serde::{Deserialize, Serialize};

/// One line of the equipment checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearItem {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

/// Value shape stored per key inside the `myGrowthApp_gear` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GearEntry {
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

const DEFAULT_GEAR: [(&str, &str); 10] = [
    ("gun", "נשק אישי"),
    ("ammo", "תחמושת (מחסניות)"),
    ("license", "רישיון נשק / תעודה"),
    ("uniform", "מדים ייצוגיים"),
    ("boots", "נעליים טקטיות"),
    ("water", "מים (3 ליטר)"),
    ("food", "אוכל למשמרת"),
    ("coffee", "פק\"ל קפה"),
    ("powerbank", "סוללה ניידת (מטען)"),
    ("headphones", "אוזניות"),
];

pub fn default_gear() -> Vec<GearItem> {
    DEFAULT_GEAR
        .iter()
        .map(|(key, label)| GearItem {
            key: key.to_string(),
            label: label.to_string(),
            checked: false,
        })
        .collect()
}
