use serde::Deserialize;
use terrestria_util::math::vector3::Vector3;

#[repr(u8)]
#[derive(PartialEq, Clone, Copy, Debug, Hash, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockDirection {
    Down = 0,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockDirection {
    pub fn to_offset(&self) -> Vector3<i32> {
        match self {
            BlockDirection::Down => (0, -1, 0),
            BlockDirection::Up => (0, 1, 0),
            BlockDirection::North => (0, 0, -1),
            BlockDirection::South => (0, 0, 1),
            BlockDirection::West => (-1, 0, 0),
            BlockDirection::East => (1, 0, 0),
        }
        .into()
    }

    /// Every direction, in id order.
    pub fn all() -> [BlockDirection; 6] {
        [
            BlockDirection::Down,
            BlockDirection::Up,
            BlockDirection::North,
            BlockDirection::South,
            BlockDirection::West,
            BlockDirection::East,
        ]
    }
}

#[cfg(test)]
mod tests {
    use terrestria_util::math::vector3::Vector3;

    use super::BlockDirection;

    #[test]
    fn offsets_are_unit_and_paired() {
        for direction in BlockDirection::all() {
            let offset = direction.to_offset();
            assert_eq!(offset.x.abs() + offset.y.abs() + offset.z.abs(), 1);
        }
        for pair in BlockDirection::all().chunks(2) {
            assert_eq!(pair[0].to_offset() + pair[1].to_offset(), Vector3::new(0, 0, 0));
        }
    }

    #[test]
    fn ids_follow_declaration_order() {
        for (index, direction) in BlockDirection::all().into_iter().enumerate() {
            assert_eq!(direction as usize, index);
        }
        assert_eq!(BlockDirection::North.to_offset(), Vector3::new(0, 0, -1));
        assert_eq!(BlockDirection::East.to_offset(), Vector3::new(1, 0, 0));
    }

    #[test]
    fn deserializes_lowercase() {
        let direction: BlockDirection = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(direction, BlockDirection::North);
    }
}
