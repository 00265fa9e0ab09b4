//! Generates the three sample workbooks of the product ordering demo:
//! `products.xlsx`, `size_and_colors.xlsx` and `orders.xlsx`.
//!
//! Every row is hard-coded. Orders for products flagged One Size or One
//! Color carry `"N/A"` in the matching field; see [`model::conforms`].

pub mod model;
pub mod orders;
pub mod products;
pub mod sheet;
pub mod variants;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

/// One generated file and how many data rows it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub path: PathBuf,
    pub data_rows: usize,
}

/// Builds all three workbooks into `dir`, overwriting existing files.
/// Stops at the first write failure.
pub fn generate(dir: &Path) -> Result<Vec<Created>> {
    let steps: [(fn(&Path) -> Result<PathBuf>, usize); 3] = [
        (products::create, products::rows().len()),
        (variants::create, variants::rows().len()),
        (orders::create, orders::rows().len()),
    ];

    let mut created = Vec::with_capacity(steps.len());
    for (create, data_rows) in steps {
        let path = create(dir)?;
        println!("Created {}", path.display());
        created.push(Created { path, data_rows });
    }
    Ok(created)
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let extra: Vec<_> = args.collect();
    if !extra.is_empty() {
        return Err(anyhow!(
            "expected at most one output directory, got {} extra argument(s): {:?}",
            extra.len(),
            extra
        ));
    }
    if !dir.is_dir() {
        return Err(anyhow!("output directory does not exist: {}", dir.display()));
    }

    println!("Creating Excel sheets for product ordering system...");
    let created = generate(&dir)?;

    println!();
    println!("All Excel sheets created successfully!");
    for file in &created {
        println!("  {} ({} data rows)", file.path.display(), file.data_rows);
    }
    Ok(())
}
