//! Closed-form thickness of complete graphs.
//!
//! Alekseev and Gončakov (1976), completed by Beineke and Harary: the
//! thickness of K_n is floor((n + 7) / 6), except K_9 and K_10 which need
//! three layers.

/// Thickness of the complete graph on `n` vertices
pub fn complete_graph_thickness(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        9 | 10 => 3,
        n => (n + 7) / 6,
    }
}
