//! Reshapes a preset colormap and prints it as a `.cmap` table.
//!
//! Run with: cargo run --example design_colormap
//! Add `RUST_LOG=debug` to see compose and clean point counts.

use chromaline::*;

fn main() -> Result<()> {
    init_logging();

    let mut cmap = load_preset("hot")?;

    // Square-root curve, sampled at three points
    let mut curve = UnitMap::identity();
    curve.add_point(0.5, 0.5)?;
    curve.make_power(0.5)?;

    // Push red up early: red(curve(t))
    let red = cmap.channel(Channel::Red).compose(&curve)?;
    *cmap.channel_mut(Channel::Red) = red;
    cmap.set_name("hot-sqrt");

    let luminance = cmap.luminance(&LuminanceWeights::default())?;
    println!(
        "luminance: {} points, monotonic = {}",
        luminance.num_points(),
        luminance.is_monotonic()
    );
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let c = cmap.sample(t)?;
        println!("t = {t:.2}: ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
    }

    print!("{}", write_table(&cmap, &TableOptions::default())?);
    Ok(())
}
