use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    BlockState,
    block_state::IS_AIR,
    tag::{RegistryKey, Tagable},
};

#[derive(Debug)]
pub struct Block {
    pub id: u16,
    /// Path part of the registry key, e.g. `rubber_log`.
    pub name: &'static str,
    /// Full registry key, e.g. `terrestria:rubber_log`.
    pub registry_key: &'static str,
    pub default_state: &'static BlockState,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.registry_key)
    }
}

impl Tagable for Block {
    #[inline]
    fn tag_key() -> RegistryKey {
        RegistryKey::Block
    }

    #[inline]
    fn registry_key(&self) -> &str {
        self.registry_key
    }
}

macro_rules! blocks {
    ($($id:tt => $ident:ident($key:tt, $name:tt, $flags:expr)),* $(,)?) => {
        impl Block {
            $(
                pub const $ident: Block = Block {
                    id: $id,
                    name: $name,
                    registry_key: $key,
                    default_state: &BlockState {
                        id: $id,
                        block_id: $id,
                        state_flags: $flags,
                    },
                };
            )*
        }

        static BLOCKS: &[&Block] = &[$(&Block::$ident),*];

        static BLOCKS_BY_KEY: phf::Map<&'static str, &'static Block> = phf::phf_map! {
            $($key => &Block::$ident),*
        };
    };
}

blocks! {
    0 => AIR("minecraft:air", "air", IS_AIR),
    1 => CAVE_AIR("minecraft:cave_air", "cave_air", IS_AIR),
    2 => STONE("minecraft:stone", "stone", 0),
    3 => GRASS_BLOCK("minecraft:grass_block", "grass_block", 0),
    4 => DIRT("minecraft:dirt", "dirt", 0),
    5 => COARSE_DIRT("minecraft:coarse_dirt", "coarse_dirt", 0),
    6 => PODZOL("minecraft:podzol", "podzol", 0),
    7 => SAND("minecraft:sand", "sand", 0),
    8 => GRAVEL("minecraft:gravel", "gravel", 0),
    9 => BEDROCK("minecraft:bedrock", "bedrock", 0),
    10 => WATER("minecraft:water", "water", 0),
    11 => SHORT_GRASS("minecraft:short_grass", "short_grass", 0),
    12 => VINE("minecraft:vine", "vine", 0),
    13 => OAK_LOG("minecraft:oak_log", "oak_log", 0),
    14 => OAK_LEAVES("minecraft:oak_leaves", "oak_leaves", 0),
    15 => OAK_SAPLING("minecraft:oak_sapling", "oak_sapling", 0),
    16 => RUBBER_LOG("terrestria:rubber_log", "rubber_log", 0),
    17 => RUBBER_LEAVES("terrestria:rubber_leaves", "rubber_leaves", 0),
    18 => RUBBER_SAPLING("terrestria:rubber_sapling", "rubber_sapling", 0),
}

impl Block {
    pub fn from_id(id: u16) -> Option<&'static Block> {
        BLOCKS.get(id as usize).copied()
    }

    /// Every block has a single state whose id equals the block id.
    pub fn from_state_id(id: u16) -> Option<&'static Block> {
        Self::from_id(id)
    }

    /// Resolves `namespace:path`, or a bare path in the `minecraft` namespace.
    pub fn from_registry_key(key: &str) -> Option<&'static Block> {
        if key.contains(':') {
            BLOCKS_BY_KEY.get(key).copied()
        } else {
            BLOCKS_BY_KEY.get(format!("minecraft:{key}").as_str()).copied()
        }
    }

    pub fn all() -> &'static [&'static Block] {
        BLOCKS
    }
}

#[cfg(test)]
mod tests {
    use crate::{Block, BlockState};

    #[test]
    fn ids_match_catalog_positions() {
        for (index, block) in Block::all().iter().enumerate() {
            assert_eq!(block.id as usize, index, "{block}");
            assert_eq!(block.default_state.block(), *block);
            assert_eq!(BlockState::from_id(block.id), Some(block.default_state));
        }
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(
            Block::from_registry_key("terrestria:rubber_log"),
            Some(&Block::RUBBER_LOG)
        );
        assert_eq!(Block::from_registry_key("stone"), Some(&Block::STONE));
        assert_eq!(
            Block::from_registry_key("minecraft:stone"),
            Some(&Block::STONE)
        );
        assert!(Block::from_registry_key("rubber_log").is_none());
        assert!(Block::from_registry_key("this_block_does_not_exist").is_none());
    }

    #[test]
    fn air_flags() {
        assert!(Block::AIR.default_state.is_air());
        assert!(Block::CAVE_AIR.default_state.is_air());
        assert!(!Block::STONE.default_state.is_air());
        assert!(!Block::WATER.default_state.is_air());
    }
}
