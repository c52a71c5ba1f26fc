// Equipment items and the per-slot loadout a player wears

use std::fmt;
use std::rc::Rc;

use super::stats::Stat;

/// Attachment points on a character; each holds at most one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    Weapon,
    Head,
    Body,
    Arm,
    Feet,
    AccessoryLeft,
    AccessoryRight,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Head,
        EquipmentSlot::Body,
        EquipmentSlot::Arm,
        EquipmentSlot::Feet,
        EquipmentSlot::AccessoryLeft,
        EquipmentSlot::AccessoryRight,
    ];

    fn index(&self) -> usize {
        match self {
            Self::Weapon => 0,
            Self::Head => 1,
            Self::Body => 2,
            Self::Arm => 3,
            Self::Feet => 4,
            Self::AccessoryLeft => 5,
            Self::AccessoryRight => 6,
        }
    }

    /// Short label used by the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Head => "Head",
            Self::Body => "Body",
            Self::Arm => "Arm",
            Self::Feet => "Feet",
            Self::AccessoryLeft => "AccL",
            Self::AccessoryRight => "AccR",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-attribute bonus granted while an item is worn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatBonus {
    pub str: i32,
    pub vit: i32,
    pub agi: i32,
    pub int: i32,
    pub luk: i32,
    pub dex: i32,
}

impl StatBonus {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Str => self.str,
            Stat::Vit => self.vit,
            Stat::Agi => self.agi,
            Stat::Int => self.int,
            Stat::Luk => self.luk,
            Stat::Dex => self.dex,
        }
    }
}

/// An equippable item. Immutable once created; shared by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    name: String,
    slot: EquipmentSlot,
    bonus: StatBonus,
}

impl Equipment {
    pub fn new(name: &str, slot: EquipmentSlot, bonus: StatBonus) -> Self {
        Self {
            name: name.to_string(),
            slot,
            bonus,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> EquipmentSlot {
        self.slot
    }

    pub fn bonus(&self) -> &StatBonus {
        &self.bonus
    }
}

/// What a character currently wears: one optional item handle per slot
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    slots: [Option<Rc<Equipment>>; 7],
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item into its slot, dropping whatever was there
    pub fn equip(&mut self, item: Rc<Equipment>) {
        let index = item.slot().index();
        self.slots[index] = Some(item);
    }

    /// Empty a slot (no-op if already empty)
    pub fn unequip(&mut self, slot: EquipmentSlot) {
        self.slots[slot.index()] = None;
    }

    /// The item in a slot, if any
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Rc<Equipment>> {
        self.slots[slot.index()].as_ref()
    }

    /// Sum of one stat's bonus across every worn item (empty slots count 0)
    pub fn bonus(&self, stat: Stat) -> i32 {
        self.slots
            .iter()
            .flatten()
            .map(|item| item.bonus().get(stat))
            .sum()
    }

    /// Iterate over (slot, item) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, Option<&Rc<Equipment>>)> {
        EquipmentSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}
