//! `espforge boards` / `espforge variants` — registry listings.

use anyhow::Result;

use espforge_targets::{boards, Variant, ALL_VARIANTS};

/// List known boards, optionally restricted to one variant.
pub fn list(variant: Option<&str>) -> Result<()> {
    let filter = variant.map(|token| token.parse::<Variant>()).transpose()?;

    println!("Known boards:");
    println!();
    for (name, board_variant) in boards::known_boards() {
        if filter.map_or(true, |f| f == board_variant) {
            println!("  {name:<32} {board_variant}");
        }
    }
    println!();
    println!("Boards not listed here need an explicit 'variant' in the manifest.");
    Ok(())
}

/// List the closed variant set.
pub fn variants() -> Result<()> {
    println!("Supported variants:");
    println!();
    for variant in ALL_VARIANTS {
        let count = boards::boards_for_variant(*variant).count();
        println!(
            "  {:<10} {:<10} {count} known board(s)",
            variant.as_str(),
            variant.friendly_name()
        );
    }
    Ok(())
}
