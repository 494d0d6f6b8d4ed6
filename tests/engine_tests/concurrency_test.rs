use std::thread;

use pcomb::prelude::*;

use super::arithmetic;

#[test]
fn test_shared_grammar_across_threads() {
    let grammar = arithmetic();
    let whole = end_of_input(&grammar);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|n| {
                let whole = &whole;
                scope.spawn(move || {
                    let text = format!("{} * ({} + 1)", n, n);
                    (0..100)
                        .map(|_| whole.parse_str(&text).map(|(_, value)| value))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let n = n as i64;
            let values = handle.join().unwrap().unwrap();
            assert!(values.iter().all(|value| *value == n * (n + 1)));
        }
    });
}
