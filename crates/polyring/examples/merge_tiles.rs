//! Merge a row of unit tiles one at a time and print the running outline.
//!
//! Usage:
//!   cargo run -p polyring --example merge_tiles -- 5
//!
//! Each step unions the accumulated outline with the next tile to its right.
//! Shared edges disappear and the outline stays a 4-vertex rectangle.

use polyring::prelude::*;

fn tile(i: usize) -> Ring2 {
    let x = i as f64;
    Ring2::from_xy(&[[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 1.0]])
}

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4)
        .max(1);
    let mut outline = tile(0);
    for i in 1..count {
        let next = tile(i);
        match outline.try_union(&next) {
            Ok(merged) => outline = merged,
            Err(err) => {
                eprintln!("tile {}: {}", i, err);
                return;
            }
        }
        let b = outline.bounds().unwrap_or(Rect2::new(0.0, 0.0, 0.0, 0.0));
        println!(
            "tiles={:>2} vertices={:>2} area={:.3} bounds=({}, {}, {}, {}) ccw={}",
            i + 1,
            outline.len(),
            outline.area(),
            b.x(),
            b.y(),
            b.width(),
            b.height(),
            outline.is_anticlockwise()
        );
    }
}
