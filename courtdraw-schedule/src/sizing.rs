//! Bracket sizing
//!
//! Level 4 - Utilities

use courtdraw_core::{Error, Result};

/// Smallest power of two that holds `player_count` players (never below 2)
pub fn bracket_size(player_count: usize) -> Result<usize> {
    if player_count == 0 {
        return Err(Error::invalid("a bracket needs at least one player"));
    }

    let mut size = 2usize;
    while size < player_count {
        size = size
            .checked_mul(2)
            .ok_or_else(|| Error::invalid(format!("{player_count} players is too many for a bracket")))?;
    }
    Ok(size)
}

/// Number of rounds in a bracket of the given size
pub fn round_count(bracket_size: usize) -> Result<u32> {
    ensure_bracket_size(bracket_size)?;
    Ok(bracket_size.trailing_zeros())
}

/// Fail unless `size` is a power of two of at least 2
pub(crate) fn ensure_bracket_size(size: usize) -> Result<()> {
    if size < 2 || !size.is_power_of_two() {
        return Err(Error::invalid(format!(
            "bracket size must be a power of two of at least 2, got {size}"
        )));
    }
    Ok(())
}
