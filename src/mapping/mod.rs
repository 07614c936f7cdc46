//! Mapping trees and the longest-match engine behind both conversion
//! directions.

pub mod cache;
mod custom;
mod kana_to_romaji;
mod parse;
mod romaji_to_kana;
mod tree;

pub use custom::CustomMapping;
pub use parse::{apply_mapping, MatchSpan};
pub use tree::MapNode;

use std::sync::Arc;

use crate::convert::Romanization;

use cache::TreeKey;

/// The romaji → kana tree, shared and immutable. Custom overrides merge
/// onto a clone of the cached base; the base itself is never mutated.
pub(crate) fn romaji_to_kana_tree(
    use_obsolete_kana: bool,
    custom: Option<&CustomMapping>,
) -> Arc<MapNode> {
    let base_key = TreeKey::RomajiToKana {
        use_obsolete_kana,
        custom: None,
    };
    let base = cache::get_or_build(base_key, || {
        let tree = romaji_to_kana::build();
        if use_obsolete_kana {
            romaji_to_kana::obsolete_kana_mapping().merge_into(&tree)
        } else {
            tree
        }
    });
    match custom {
        None => base,
        Some(mapping) if mapping.is_empty() => base,
        Some(mapping) => {
            let key = TreeKey::RomajiToKana {
                use_obsolete_kana,
                custom: Some(mapping.fingerprint()),
            };
            cache::get_or_build(key, || mapping.merge_into(&base))
        }
    }
}

/// The kana → romaji tree for a romanisation scheme.
pub(crate) fn kana_to_romaji_tree(
    romanization: Romanization,
    custom: Option<&CustomMapping>,
) -> Arc<MapNode> {
    let base_key = TreeKey::KanaToRomaji {
        romanization,
        custom: None,
    };
    let base = cache::get_or_build(base_key, || kana_to_romaji::build(romanization));
    match custom {
        None => base,
        Some(mapping) if mapping.is_empty() => base,
        Some(mapping) => {
            let key = TreeKey::KanaToRomaji {
                romanization,
                custom: Some(mapping.fingerprint()),
            };
            cache::get_or_build(key, || mapping.merge_into(&base))
        }
    }
}
