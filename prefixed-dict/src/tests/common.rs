// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use matches::assert_matches;

use super::*;

pub fn test_basic_set_get<M: Mapping<Value = String>>(m: &mut M) {
    let k = "foo";
    let v = "Hello Dict!".to_string();
    m.set(k.to_string(), v.clone());

    assert!(m.contains(k));
    assert_eq!(m.len(), 1);

    let out = m.get(k).unwrap();
    assert_eq!(out, v);
    // again after get
    assert!(m.contains(k));
    assert_eq!(m.len(), 1);

    let removed = m.delete(k).unwrap();
    assert_eq!(removed, v);

    assert!(!m.contains(k));
    assert!(m.is_empty());
    assert_matches!(m.get(k), Err(DictError::NotFound(_)));
}

pub fn test_not_founds<M: Mapping<Value = String>>(m: &mut M) {
    m.set("real".to_string(), "value".to_string());

    let badk = "notreal";
    assert_matches!(m.get(badk), Err(DictError::NotFound(_)));
    assert!(!m.contains(badk));
    assert_matches!(m.delete(badk), Err(DictError::NotFound(_)));

    // a failed delete leaves everything else alone
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("real").unwrap(), "value");
    m.delete("real").unwrap();
}

pub fn test_overwrite<M: Mapping<Value = String>>(m: &mut M) {
    m.set("k".to_string(), "first".to_string());
    m.set("k".to_string(), "second".to_string());

    assert_eq!(m.len(), 1);
    assert_eq!(m.get("k").unwrap(), "second");
    m.delete("k").unwrap();
}

pub fn test_clear<M: Mapping<Value = String>>(m: &mut M) {
    let mut keys = vec![];
    for _ in 0..20 {
        let key: String = random_key!();
        keys.push(key.clone());
        m.set(key, "v".to_string());
    }
    keys.sort();
    keys.dedup();

    let mut listed: Vec<String> = m.keys().collect();
    listed.sort();
    assert_eq!(listed, keys);

    m.clear();
    assert!(m.is_empty());
    for k in keys.iter() {
        assert!(!m.contains(k));
    }
}
