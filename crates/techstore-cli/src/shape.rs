//! Offline description of the 3D stand-in shape a product page would render.

use anyhow::Context;
use techstore_core::{color_name, select_shape, try_select_shape, Spin};

/// # Errors
///
/// With `strict`, returns an error for product types that have no dedicated
/// shape.
pub(crate) fn run_shape(
    product_type: &str,
    color: &str,
    scale: f32,
    strict: bool,
    rotating: bool,
) -> anyhow::Result<()> {
    let shape = if strict {
        try_select_shape(product_type, color, scale)
            .with_context(|| format!("no shape for product type {product_type:?}"))?
    } else {
        select_shape(product_type, color, scale)
    }
    .with_rotation(rotating)
    .clamped();

    println!("geometry: {}", shape.geometry);
    match color_name(&shape.color) {
        Some(name) => println!("colour:   {name} ({})", shape.color),
        None => println!("colour:   {}", shape.color),
    }
    println!("scale:    {}", shape.scale);
    if shape.rotating {
        let mut spin = Spin::default();
        println!("rotation: {:.2} rad after 1s", spin.advance(&shape, 1.0));
    } else {
        println!("rotation: off");
    }
    Ok(())
}
