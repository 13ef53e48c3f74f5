// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

macro_rules! random_key {
    () => {{
        use rand::distributions::Alphanumeric;
        use rand::Rng;
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .collect::<String>()
    }};
}

mod common;
mod transform_test;

use super::*;

fn basic_sub_tests<M: Mapping<Value = String>>(m: &mut M) {
    common::test_basic_set_get(m);
    common::test_not_founds(m);
    common::test_overwrite(m);
    common::test_clear(m);
}
