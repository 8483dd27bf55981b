//! Identifier allocation under concurrent rendering.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use ngtag::{
    reset_id_generator, seed_id, set_id_generator, AttributeSet, SequentialIds, TreeTable,
};
use serial_test::serial;

const THREADS: usize = 8;
const RENDERS: usize = 200;

fn collect_ids<F>(render: F) -> Vec<String>
where
    F: Fn() -> String + Send + Sync + 'static,
{
    let render = Arc::new(render);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let render = Arc::clone(&render);
            thread::spawn(move || (0..RENDERS).map(|_| render()).collect::<Vec<_>>())
        })
        .collect();

    handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect()
}

#[test]
fn shared_renderer_never_repeats_ids() {
    let table = TreeTable::with_ids(SequentialIds::new());
    let ids = collect_ids(move || table.markup(&AttributeSet::new()).unwrap().id().to_string());

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS * RENDERS);
}

#[test]
#[serial]
fn global_generator_never_repeats_ids() {
    reset_id_generator();
    let ids = collect_ids(|| {
        TreeTable::new()
            .markup(&AttributeSet::new())
            .unwrap()
            .id()
            .to_string()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS * RENDERS);
}

#[test]
#[serial]
fn swapping_generator_mid_flight_is_safe() {
    set_id_generator(SequentialIds::with_prefix("a"));
    let swapper = thread::spawn(|| {
        for _ in 0..50 {
            seed_id("fixed");
            set_id_generator(SequentialIds::with_prefix("b"));
        }
    });

    let ids = collect_ids(|| {
        TreeTable::new()
            .markup(&AttributeSet::new())
            .unwrap()
            .id()
            .to_string()
    });
    swapper.join().unwrap();
    reset_id_generator();

    assert_eq!(ids.len(), THREADS * RENDERS);
    assert!(ids
        .iter()
        .all(|id| id == "fixed" || id.starts_with('a') || id.starts_with('b')));
}
