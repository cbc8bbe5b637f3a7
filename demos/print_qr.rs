//! Prints a QR symbol to the terminal.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example print_qr -- "Hello, world!"
//! ```

use qrcraft::{encode, Drawable, EncodeOptions};

static QUIET_ZONE: usize = 4;

fn render<D: Drawable>(symbol: &D) -> String {
    let w = symbol.module_count();
    let is_dark = |r: usize, c: usize| {
        let in_bounds = (QUIET_ZONE..QUIET_ZONE + w).contains(&r)
            && (QUIET_ZONE..QUIET_ZONE + w).contains(&c);
        in_bounds && symbol.is_dark(r - QUIET_ZONE, c - QUIET_ZONE)
    };

    // Two module rows per line using half block characters
    let full = w + 2 * QUIET_ZONE;
    let mut res = String::new();
    for r in (0..full).step_by(2) {
        for c in 0..full {
            let ch = match (is_dark(r, c), r + 1 < full && is_dark(r + 1, c)) {
                (true, true) => ' ',
                (true, false) => '▄',
                (false, true) => '▀',
                (false, false) => '█',
            };
            res.push(ch);
        }
        res.push('\n');
    }
    res
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "https://www.rust-lang.org".to_string());
    let symbol = encode(&text, &EncodeOptions::default())?;

    println!("{}", symbol.metadata());
    print!("{}", render(&symbol));
    Ok(())
}
