use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armour,
    Jewellery,
    Flask,
    Jewel,
    #[default]
    Other,
}

impl ItemCategory {
    /// Upstream overview type string for this category, if it has one.
    pub fn overview_type(&self) -> Option<&'static str> {
        match self {
            ItemCategory::Weapon => Some("UniqueWeapon"),
            ItemCategory::Armour => Some("UniqueArmour"),
            ItemCategory::Jewellery => Some("UniqueAccessory"),
            ItemCategory::Flask => Some("UniqueFlask"),
            ItemCategory::Jewel => Some("UniqueJewel"),
            ItemCategory::Other => None,
        }
    }

    // Map upstream overview type strings to our categories
    pub fn from_overview_type(value: &str) -> Self {
        match value {
            "UniqueWeapon" => ItemCategory::Weapon,
            "UniqueArmour" => ItemCategory::Armour,
            "UniqueAccessory" => ItemCategory::Jewellery,
            "UniqueFlask" => ItemCategory::Flask,
            "UniqueJewel" => ItemCategory::Jewel,
            _ => ItemCategory::Other,
        }
    }

    /// Categories with a priced overview worth pulling each run.
    pub fn priced_categories() -> &'static [ItemCategory] {
        &[
            ItemCategory::Weapon,
            ItemCategory::Armour,
            ItemCategory::Jewellery,
            ItemCategory::Flask,
            ItemCategory::Jewel,
        ]
    }

    // Catalysts only apply quality to rings, amulets and belts
    pub fn is_jewellery(&self) -> bool {
        matches!(self, ItemCategory::Jewellery)
    }
}
