// Author: Dustin Pilgrim
// License: MIT

use eventline::debug;

use paintkit_core::{Colour, Direction, Shade, ShadeCache, is_dark};

/// Lines printed by `paintkit shade`.
pub fn report(colour: Colour, shade: Option<Shade>, percent: Option<f32>) -> Vec<String> {
    let cache = ShadeCache::global();

    let lines = match (shade, percent) {
        (Some(s), None) => vec![line(s.name(), cache.shade(colour, s))],
        (Some(s), Some(p)) => vec![line(s.name(), cache.adjust(colour, s.direction(), p))],
        (None, Some(p)) => vec![
            line("lighter", cache.adjust(colour, Direction::Lighter, p)),
            line("darker", cache.adjust(colour, Direction::Darker, p)),
        ],
        (None, None) => {
            let mut lines: Vec<String> = Shade::ALL
                .iter()
                .map(|&s| line(s.name(), cache.shade(colour, s)))
                .collect();
            lines.push(format!("{:<12}{}", "is-dark", is_dark(colour)));
            lines
        }
    };

    debug!("shade cache holds {} entries", cache.len());
    lines
}

fn line(label: &str, c: Colour) -> String {
    format!("{label:<12}{c}")
}
