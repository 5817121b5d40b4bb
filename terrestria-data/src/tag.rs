#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryKey {
    Block,
}

pub trait Tagable {
    fn tag_key() -> RegistryKey;
    fn registry_key(&self) -> &str;

    /// `None` when the tag does not exist for this registry.
    fn is_tagged_with(&self, tag: &str) -> Option<bool> {
        let values = get_tag_values(Self::tag_key(), tag)?;
        Some(values.contains(&self.registry_key()))
    }
}

pub fn get_tag_values(key: RegistryKey, tag: &str) -> Option<&'static [&'static str]> {
    match key {
        RegistryKey::Block => BLOCK_TAGS.get(tag).copied(),
    }
}

pub mod block {
    pub const LOGS: &str = "minecraft:logs";
    pub const LEAVES: &str = "minecraft:leaves";
    pub const SAPLINGS: &str = "minecraft:saplings";
    /// Dirt variants that trees treat as their natural soil. Grass is checked separately.
    pub const NATURAL_DIRT: &str = "terrestria:natural_dirt";
}

static BLOCK_TAGS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "minecraft:logs" => &["minecraft:oak_log", "terrestria:rubber_log"],
    "minecraft:leaves" => &["minecraft:oak_leaves", "terrestria:rubber_leaves"],
    "minecraft:saplings" => &["minecraft:oak_sapling", "terrestria:rubber_sapling"],
    "terrestria:natural_dirt" => &["minecraft:dirt", "minecraft:coarse_dirt", "minecraft:podzol"],
};
