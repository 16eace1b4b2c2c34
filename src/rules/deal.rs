//! Tile set generation, shuffling, dealing, and choosing who leads.

use im::Vector;

use crate::core::{check_deal, ConfigError, GameRng, Hand, Player, PlayerId, PlayerMap, Tile, MAX_PIP};

/// Hands in seat order plus the undealt pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub pool: Vector<Tile>,
}

/// The 28 tiles `(i, j)`, `0 <= i <= j <= 6`, ascending `i` then `j`.
#[must_use]
pub fn generate_universe() -> Vec<Tile> {
    (0..=MAX_PIP)
        .flat_map(|i| (i..=MAX_PIP).filter_map(move |j| Tile::from_pips(i, j)))
        .collect()
}

/// Fisher–Yates: from the last index down to 1, swap with a uniform index
/// in `[0, index]`.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    for index in (1..items.len()).rev() {
        let other = rng.index_up_to(index);
        items.swap(index, other);
    }
}

/// Shuffle a fresh set and hand `tiles_per_hand` tiles to each seat in
/// order; the rest is the pool.
pub fn deal(player_count: usize, tiles_per_hand: usize, rng: &mut GameRng) -> Result<Deal, ConfigError> {
    check_deal(player_count, tiles_per_hand)?;

    let mut tiles = generate_universe();
    shuffle(&mut tiles, rng);

    let hands = tiles
        .chunks(tiles_per_hand)
        .take(player_count)
        .map(|chunk| Hand::new(chunk.iter().copied()))
        .collect();
    let pool = tiles[player_count * tiles_per_hand..].iter().copied().collect();

    Ok(Deal { hands, pool })
}

/// Who plays first.
///
/// The holder of the highest double leads. Without any double, the holder of
/// the highest pip sum leads. Scanning is seat order then hand order and a
/// later tile only takes over when strictly higher, so the first maximum
/// wins. With every hand empty, seat 0 leads.
#[must_use]
pub fn choose_starter(players: &PlayerMap<Player>) -> PlayerId {
    let tiles = || {
        players
            .iter()
            .flat_map(|(id, player)| player.hand.iter().map(move |&tile| (id, tile)))
    };

    let highest_double = first_max(
        tiles()
            .filter(|(_, tile)| tile.is_double())
            .map(|(id, tile)| (id, u32::from(tile.first()))),
    );
    if let Some((id, _)) = highest_double {
        return id;
    }

    first_max(tiles().map(|(id, tile)| (id, tile.pip_sum()))).map_or(PlayerId::new(0), |(id, _)| id)
}

/// First candidate with the strictly greatest value.
fn first_max(candidates: impl Iterator<Item = (PlayerId, u32)>) -> Option<(PlayerId, u32)> {
    candidates.fold(None, |best, (id, value)| match best {
        Some((_, top)) if value <= top => best,
        _ => Some((id, value)),
    })
}
