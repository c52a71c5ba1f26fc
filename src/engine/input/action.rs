// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

use crate::game::characters::{EquipmentSlot, Stat};

/// Number of skill hotkeys (F2..F11)
pub const SKILL_HOTKEYS: usize = 10;

/// Points spent by one batch-allocation key press
pub const BATCH_ALLOCATION: u32 = 5;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (level-triggered)
    MoveLeft,
    MoveRight,
    Jump,

    // Character commands (edge-triggered)
    AllocateStat(Stat),
    /// Spend up to this many points on a stat at once
    AllocateStatPoints(Stat, u32),
    /// Stat panel: queue one point without spending it
    StageStat(Stat),
    /// Stat panel: take one queued point back
    UnstageStat(Stat),
    /// Stat panel: spend everything queued
    CommitStats,
    /// Stat panel: drop everything queued
    ClearStaged,
    /// Equip the catalog item at this index
    Equip(usize),
    Unequip(EquipmentSlot),
    /// Fire the n-th currently unlocked skill
    UseSkill(usize),
    /// Debug: grant experience
    GainExperience,

    // Meta actions
    Pause,
    Menu,
}

impl Action {
    /// Movement actions are read every tick while held; everything else fires
    /// once per press.
    pub fn is_movement(&self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight | Action::Jump)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    let mut bindings = vec![
        // Movement (arrows or WASD-style, space to jump)
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::KeyW, Action::Jump),
        // Stats
        (KeyCode::Digit1, Action::AllocateStat(Stat::Str)),
        (KeyCode::Digit2, Action::AllocateStat(Stat::Vit)),
        (KeyCode::Digit3, Action::AllocateStat(Stat::Agi)),
        (KeyCode::Digit4, Action::AllocateStat(Stat::Int)),
        (KeyCode::Digit5, Action::AllocateStat(Stat::Luk)),
        (KeyCode::KeyT, Action::AllocateStat(Stat::Dex)),
        // Stat panel
        (KeyCode::Enter, Action::CommitStats),
        (KeyCode::NumpadEnter, Action::CommitStats),
        (KeyCode::Backspace, Action::ClearStaged),
        // Equip sample items
        (KeyCode::Digit6, Action::Equip(0)),
        (KeyCode::Digit7, Action::Equip(1)),
        (KeyCode::Digit8, Action::Equip(2)),
        (KeyCode::Digit9, Action::Equip(3)),
        (KeyCode::Digit0, Action::Equip(4)),
        (KeyCode::KeyO, Action::Equip(5)),
        (KeyCode::KeyP, Action::Equip(6)),
        // Unequip
        (KeyCode::KeyU, Action::Unequip(EquipmentSlot::Weapon)),
        (KeyCode::KeyI, Action::Unequip(EquipmentSlot::Head)),
        (KeyCode::KeyJ, Action::Unequip(EquipmentSlot::Body)),
        (KeyCode::KeyK, Action::Unequip(EquipmentSlot::Arm)),
        (KeyCode::KeyL, Action::Unequip(EquipmentSlot::Feet)),
        (KeyCode::KeyM, Action::Unequip(EquipmentSlot::AccessoryLeft)),
        (KeyCode::KeyN, Action::Unequip(EquipmentSlot::AccessoryRight)),
        // Meta
        (KeyCode::F1, Action::GainExperience),
        (KeyCode::Pause, Action::Pause),
        (KeyCode::Escape, Action::Menu),
    ];

    let skill_keys = [
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
    ];
    // Batch allocation (Q E R Y F H), staging (numpad 1-6) and unstaging (Z X C V B G),
    // each row in STR VIT AGI INT LUK DEX order
    let batch_keys = [
        KeyCode::KeyQ,
        KeyCode::KeyE,
        KeyCode::KeyR,
        KeyCode::KeyY,
        KeyCode::KeyF,
        KeyCode::KeyH,
    ];
    let stage_keys = [
        KeyCode::Numpad1,
        KeyCode::Numpad2,
        KeyCode::Numpad3,
        KeyCode::Numpad4,
        KeyCode::Numpad5,
        KeyCode::Numpad6,
    ];
    let unstage_keys = [
        KeyCode::KeyZ,
        KeyCode::KeyX,
        KeyCode::KeyC,
        KeyCode::KeyV,
        KeyCode::KeyB,
        KeyCode::KeyG,
    ];
    for (i, stat) in Stat::ALL.into_iter().enumerate() {
        bindings.push((batch_keys[i], Action::AllocateStatPoints(stat, BATCH_ALLOCATION)));
        bindings.push((stage_keys[i], Action::StageStat(stat)));
        bindings.push((unstage_keys[i], Action::UnstageStat(stat)));
    }

    bindings.extend(
        skill_keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, Action::UseSkill(i))),
    );

    bindings
}
