#![cfg(feature = "std")]

//! Console views of a player's boards for the binaries.

use std::fmt::Write;
use std::string::String;

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coordinate::Coordinate;
use crate::player::Player;

fn header(out: &mut String) {
    out.push_str("   ");
    for x in 0..BOARD_WIDTH {
        let _ = write!(out, " {}", x);
    }
    out.push('\n');
}

/// Own fleet: `S` ship, `X` ship we lost, `.` water.
pub fn render_fleet(player: &Player) -> String {
    let fleet = player.fleet_board();
    let mut out = String::new();
    header(&mut out);
    for y in 0..BOARD_HEIGHT {
        let _ = write!(out, "{:2} ", y);
        for x in 0..BOARD_WIDTH {
            let ch = match Coordinate::new(x, y) {
                Ok(c) if fleet.was_struck(c) => 'X',
                Ok(c) if fleet.is_occupied(c) => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Shots fired: `X` hit, `o` miss, `.` untried.
pub fn render_targets(player: &Player) -> String {
    let target = player.target_board();
    let mut out = String::new();
    header(&mut out);
    for y in 0..BOARD_HEIGHT {
        let _ = write!(out, "{:2} ", y);
        for x in 0..BOARD_WIDTH {
            let ch = match Coordinate::new(x, y) {
                Ok(c) if target.scored_hit(c) => 'X',
                Ok(c) if target.attempted(c) => 'o',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards of a player under a title line.
pub fn render_player_view(player: &Player) -> String {
    let remaining = player.fleet_board().remaining_segments();
    format!(
        "== {} ({} segments afloat) ==\nFleet:\n{}Targets:\n{}",
        player.name(),
        remaining,
        render_fleet(player),
        render_targets(player)
    )
}
