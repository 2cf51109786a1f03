//! Table validation report.

use tracing::info;
use ziggurat_rs::{
    constants::{BLOCK_COUNT, NOR_SECTION_AREA, ZIGGURAT_NOR_R},
    tables,
};

use crate::error::Result;

pub fn run() -> Result<()> {
    let t = tables::get();
    t.validate()?;
    info!("ziggurat tables are consistent");

    println!("blocks      {BLOCK_COUNT}");
    println!("R           {ZIGGURAT_NOR_R}");
    println!("A           {NOR_SECTION_AREA:e}");
    println!("A / y[0]    {}", t.a_div_y0);
    println!("x[{}]      {}", BLOCK_COUNT - 1, t.x[BLOCK_COUNT - 1]);
    println!("top drift   {:e}", t.top_edge_drift());
    Ok(())
}
