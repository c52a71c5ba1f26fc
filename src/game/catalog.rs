// Sample equipment available from the equip hotkeys

use std::rc::Rc;

use crate::game::characters::{Equipment, EquipmentSlot, StatBonus};

/// Fixed list of equippable items, one per slot
#[derive(Debug, Clone)]
pub struct EquipmentCatalog {
    items: Vec<Rc<Equipment>>,
}

impl EquipmentCatalog {
    pub fn new(items: Vec<Equipment>) -> Self {
        Self {
            items: items.into_iter().map(Rc::new).collect(),
        }
    }

    /// Handle to the item at `index`, shared with whoever equips it
    pub fn get(&self, index: usize) -> Option<Rc<Equipment>> {
        self.items.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Equipment>> {
        self.items.iter()
    }
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        use EquipmentSlot::*;

        Self::new(vec![
            Equipment::new(
                "Sword of Power",
                Weapon,
                StatBonus {
                    str: 10,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Iron Helmet",
                Head,
                StatBonus {
                    vit: 5,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Steel Armor",
                Body,
                StatBonus {
                    vit: 10,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Gauntlets",
                Arm,
                StatBonus {
                    str: 3,
                    agi: 2,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Boots of Speed",
                Feet,
                StatBonus {
                    agi: 7,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Lucky Ring",
                AccessoryLeft,
                StatBonus {
                    luk: 8,
                    ..Default::default()
                },
            ),
            Equipment::new(
                "Magic Amulet",
                AccessoryRight,
                StatBonus {
                    int: 6,
                    ..Default::default()
                },
            ),
        ])
    }
}
