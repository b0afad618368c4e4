//! Sector-count schedules for polar tracks
//!
//! A polar maze keeps its cells close to square by doubling the number of
//! sectors per track as radius grows. The schedule below reproduces the
//! classic subdivision: counts start at four spokes-per-quadrant groups and
//! double each time the cumulative track tally (seeded by the central
//! room's width in tracks) reaches twice its previous doubling point, so a
//! sector's arc length never drifts far from the track width.

/// Compute the number of sectors on each of `track_count` tracks
///
/// `room_tracks` is the central room's radius measured in track widths; it
/// seeds the tally so the first doubling lands where the innermost track's
/// circumference has roughly doubled. Each resulting entry is either equal
/// to or exactly double its predecessor, never anything else.
pub fn sector_schedule(
    spokes_per_quadrant: usize,
    track_count: usize,
    room_tracks: usize,
) -> Vec<usize> {
    let mut counts = Vec::with_capacity(track_count);
    let mut sector_count = 4 * spokes_per_quadrant;
    let mut doubling_point = room_tracks;
    let mut tally = room_tracks;

    for _ in 0..track_count {
        counts.push(sector_count);
        tally += 1;
        if tally >= doubling_point * 2 {
            doubling_point = tally;
            sector_count *= 2;
        }
    }

    counts
}
