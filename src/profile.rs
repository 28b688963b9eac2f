//! Profiling zones. With the `tracy` feature these are tracy zones, otherwise they vanish.

#[cfg(feature = "tracy")]
macro_rules! zone {
    ($name:literal) => {
        tracy_full::zone!($name)
    };
}

#[cfg(not(feature = "tracy"))]
macro_rules! zone {
    ($name:literal) => {};
}
