use std::collections::HashMap;

use enumg_core::keys;

#[test]
fn key_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keys::KeyId> = HashMap::new();

    for info in keys::KEYS {
        assert_eq!(
            keys::from_str(info.canonical),
            Some(info.id),
            "key canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keys::as_str(info.id), info.canonical, "key as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate key spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }

        for &alias in info.aliases {
            assert_eq!(keys::from_str(alias), Some(info.id), "key alias not resolvable: {}", alias);
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!("duplicate key spelling {:?}: {:?} and {:?}", alias, prev, info.id);
            }
        }
    }
}

#[test]
fn key_ids_have_single_registry_entry() {
    for info in keys::KEYS {
        let count = keys::KEYS.iter().filter(|k| k.id == info.id).count();
        assert_eq!(count, 1, "key {:?} registered {} times", info.id, count);
        assert!(!info.description.is_empty(), "key {:?} has no description", info.id);
    }
}
