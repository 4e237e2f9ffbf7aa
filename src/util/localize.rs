//! Closed localization tables used to derive display fields.
//!
//! Every lookup here is a total function over a fixed enumeration with an explicit default
//! branch: stat names fall back to the raw PokeAPI key, type colors fall back to a neutral
//! gray, and sprite slots that are absent are skipped.

use crate::model::pokeapi::Sprites;

/// Neutral color used when a localized type name has no entry in the type table.
pub const DEFAULT_TYPE_COLOR: &str = "#6B7280";

/// Display name used for a type whose localized record lacks the target language.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Translate a PokeAPI stat key into its Korean display name.
///
/// Unrecognized keys pass through unchanged.
pub fn stat_display_name(stat: &str) -> &str {
    match stat {
        "hp" => "HP",
        "attack" => "공격",
        "defense" => "방어",
        "special-attack" => "특수공격",
        "special-defense" => "특수방어",
        "speed" => "스피드",
        other => other,
    }
}

/// Upper bound used to scale a stat bar, keyed by display name.
pub fn stat_max_value(display_name: &str) -> u32 {
    match display_name {
        "HP" => 255,
        "방어" | "특수방어" => 230,
        _ => 200,
    }
}

/// The eighteen elemental types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Korean display name, matching PokeAPI's `ko` localization.
    pub fn korean_name(self) -> &'static str {
        match self {
            PokemonType::Normal => "노말",
            PokemonType::Fire => "불꽃",
            PokemonType::Water => "물",
            PokemonType::Electric => "전기",
            PokemonType::Grass => "풀",
            PokemonType::Ice => "얼음",
            PokemonType::Fighting => "격투",
            PokemonType::Poison => "독",
            PokemonType::Ground => "땅",
            PokemonType::Flying => "비행",
            PokemonType::Psychic => "에스퍼",
            PokemonType::Bug => "벌레",
            PokemonType::Rock => "바위",
            PokemonType::Ghost => "고스트",
            PokemonType::Dragon => "드래곤",
            PokemonType::Dark => "악",
            PokemonType::Steel => "강철",
            PokemonType::Fairy => "페어리",
        }
    }

    /// Badge color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            PokemonType::Normal => "#9FA19F",
            PokemonType::Fire => "#E62829",
            PokemonType::Water => "#2980EF",
            PokemonType::Electric => "#FAC000",
            PokemonType::Grass => "#3FA129",
            PokemonType::Ice => "#3DCEF3",
            PokemonType::Fighting => "#FF8000",
            PokemonType::Poison => "#9141CB",
            PokemonType::Ground => "#915121",
            PokemonType::Flying => "#81B9EF",
            PokemonType::Psychic => "#EF4179",
            PokemonType::Bug => "#91A119",
            PokemonType::Rock => "#AFA981",
            PokemonType::Ghost => "#704170",
            PokemonType::Dragon => "#5060E1",
            PokemonType::Dark => "#624D4E",
            PokemonType::Steel => "#60A1B8",
            PokemonType::Fairy => "#EF70EF",
        }
    }

    pub fn from_korean_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.korean_name() == name)
    }
}

/// Color for a localized type name, or [`DEFAULT_TYPE_COLOR`] when the name is unknown.
pub fn type_color(localized_name: &str) -> &'static str {
    PokemonType::from_korean_name(localized_name)
        .map(PokemonType::color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

/// Gallery sprite slots in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSlot {
    OfficialArtwork,
    DreamWorld,
    NormalFront,
    NormalBack,
    ShinyFront,
    ShinyBack,
}

impl SpriteSlot {
    /// Slots in gallery order; artwork always comes first.
    pub const ORDERED: [SpriteSlot; 6] = [
        SpriteSlot::OfficialArtwork,
        SpriteSlot::DreamWorld,
        SpriteSlot::NormalFront,
        SpriteSlot::NormalBack,
        SpriteSlot::ShinyFront,
        SpriteSlot::ShinyBack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpriteSlot::OfficialArtwork => "Official Artwork",
            SpriteSlot::DreamWorld => "Dream World",
            SpriteSlot::NormalFront => "Normal Front",
            SpriteSlot::NormalBack => "Normal Back",
            SpriteSlot::ShinyFront => "Shiny Front",
            SpriteSlot::ShinyBack => "Shiny Back",
        }
    }

    /// URL stored in this slot, if the sprite set has one.
    pub fn url(self, sprites: &Sprites) -> Option<&str> {
        let url = match self {
            SpriteSlot::OfficialArtwork => sprites
                .other
                .as_ref()
                .and_then(|other| other.official_artwork.as_ref())
                .and_then(|artwork| artwork.front_default.as_ref()),
            SpriteSlot::DreamWorld => sprites
                .other
                .as_ref()
                .and_then(|other| other.dream_world.as_ref())
                .and_then(|dream_world| dream_world.front_default.as_ref()),
            SpriteSlot::NormalFront => sprites.front_default.as_ref(),
            SpriteSlot::NormalBack => sprites.back_default.as_ref(),
            SpriteSlot::ShinyFront => sprites.front_shiny.as_ref(),
            SpriteSlot::ShinyBack => sprites.back_shiny.as_ref(),
        };

        url.map(String::as_str).filter(|url| !url.is_empty())
    }
}
