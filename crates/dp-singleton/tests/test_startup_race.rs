//! Fifty threads race for the printer before anyone has touched it.
//!
//! Kept alone in its own test binary so that no other test can initialize the
//! printer first.

use std::sync::Barrier;
use std::thread;

use dp_singleton::Printer;

#[test]
fn test_fifty_threads_share_one_printer() {
    const THREADS: usize = 50;

    assert_eq!(Printer::constructions(), 0);

    let barrier = Barrier::new(THREADS);
    let records: Vec<(usize, usize)> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let printer = Printer::instance();
                    (printer.id(), Printer::constructions())
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(Printer::constructions(), 1);
    assert_eq!(records.len(), THREADS);
    let first = records[0].0;
    for (id, snapshot) in &records {
        assert_eq!(*id, first);
        assert_eq!(*snapshot, 1);
    }
    assert_eq!(Printer::instance().id(), first);
}
