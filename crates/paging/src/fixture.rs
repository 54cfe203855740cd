use crate::process::ProcessInput;

/// The stock 14-process workload: arrivals spread over 0.0..13.9, sizes between 80 and 200
/// bytes.
pub fn default_processes() -> Vec<ProcessInput> {
    [
        (1, 0.0, 100),
        (2, 1.2, 150),
        (3, 2.5, 80),
        (4, 3.0, 200),
        (5, 4.7, 120),
        (6, 5.1, 110),
        (7, 6.3, 90),
        (8, 7.8, 140),
        (9, 8.0, 130),
        (10, 9.4, 160),
        (11, 10.0, 170),
        (12, 11.6, 95),
        (13, 12.3, 105),
        (14, 13.9, 115),
    ]
    .into_iter()
    .map(|(pid, arrival, size)| ProcessInput { pid, arrival, size })
    .collect()
}
