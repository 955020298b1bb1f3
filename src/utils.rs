// For testing purposes: easily creates a Vec of squares from (row, col)
// pairs. Not meant for hot paths.
#[macro_export]
macro_rules! squares {
    ( $( ($r:expr, $c:expr) ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut base: Vec<Square> = Vec::new();
            $(
                base.push(Square::new($r, $c));
            )*
            base
        }
    };
}

// Functions relevant for tests

/// Fixed-seed rng so randomized tests replay the same move sequences.
#[cfg(test)]
pub fn test_rng() -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(42)
}
