//! Depth-clamped decoding of outline JSON.
//!
//! # Responsibility
//! - Decode only the levels the Things mapping reads; skip deeper subtrees unparsed.
//! - Read item fields leniently so malformed values never fail the whole run.
//!
//! # Invariants
//! - Items below `MAPPED_DEPTH` are decoded without `children`, whatever their nesting.
//! - Scalar `id`/`type`/`body`/`parentId` values decode as text; null and nested values as empty.

use crate::model::outline::{OutlineItem, OutlineItemType};
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt::Formatter;

/// Deepest level whose items are read by the mapping.
///
/// Root is 0; checklist entries under a heading's to-do sit at 3.
pub(crate) const MAPPED_DEPTH: usize = 3;

/// Seed decoding one item at a known depth.
pub(crate) struct ItemSeed {
    depth: usize,
}

impl ItemSeed {
    pub(crate) fn root() -> Self {
        Self { depth: 0 }
    }
}

impl<'de> DeserializeSeed<'de> for ItemSeed {
    type Value = OutlineItem;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<OutlineItem, D::Error> {
        deserializer.deserialize_map(ItemVisitor { depth: self.depth })
    }
}

struct ItemVisitor {
    depth: usize,
}

impl<'de> Visitor<'de> for ItemVisitor {
    type Value = OutlineItem;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("an outline item object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OutlineItem, A::Error> {
        let mut item = OutlineItem::new("", OutlineItemType::Unknown, "", "");
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => item.id = map.next_value::<LenientText>()?.0,
                "type" => {
                    item.kind = OutlineItemType::from_tag(&map.next_value::<LenientText>()?.0)
                }
                "body" => item.body = map.next_value::<LenientText>()?.0,
                "parentId" => item.parent_id = map.next_value::<LenientText>()?.0,
                "children" if self.depth < MAPPED_DEPTH => {
                    item.children = map.next_value_seed(ChildrenSeed {
                        depth: self.depth + 1,
                    })?;
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(item)
    }
}

struct ChildrenSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ChildrenSeed {
    type Value = Vec<OutlineItem>;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Vec<OutlineItem>, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ChildrenSeed {
    type Value = Vec<OutlineItem>;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a sequence of outline items")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec<OutlineItem>, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Vec<OutlineItem>, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<OutlineItem>, A::Error> {
        let mut children = Vec::new();
        while let Some(child) = seq.next_element_seed(ItemSeed { depth: self.depth })? {
            children.push(child);
        }
        Ok(children)
    }
}

/// Text field that tolerates null, numbers, booleans, and nested values.
struct LenientText(String);

impl<'de> Deserialize<'de> for LenientText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientTextVisitor)
    }
}

struct LenientTextVisitor;

impl<'de> Visitor<'de> for LenientTextVisitor {
    type Value = LenientText;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a text value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<LenientText, E> {
        Ok(LenientText(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<LenientText, E> {
        Ok(LenientText(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<LenientText, E> {
        Ok(LenientText(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<LenientText, E> {
        Ok(LenientText(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<LenientText, E> {
        Ok(LenientText(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<LenientText, E> {
        Ok(LenientText(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<LenientText, E> {
        Ok(LenientText(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<LenientText, E> {
        Ok(LenientText(String::new()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LenientText, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(LenientText(String::new()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LenientText, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(LenientText(String::new()))
    }
}
