//! Unit test harness mirroring the source module tree

mod carve {
    mod carver;
}
mod io {
    mod cli;
    mod error;
}
mod topology {
    mod grid;
    mod ring;
    mod tracks;
}
