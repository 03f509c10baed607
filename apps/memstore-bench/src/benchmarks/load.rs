use anyhow::Context;
use memstore_core::data::{CsvLoader, DataLoader};
use memstore_core::table::render_table;
use memstore_core::{StoreConfig, Table};

use crate::cli::LoadArgs;
use crate::utils::timed;

/// Load a CSV file and run each query shape once.
pub fn run(args: &LoadArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => StoreConfig::from_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => StoreConfig::for_layout(args.layout),
    };

    let (loader, parse_time) = timed(|| CsvLoader::from_path(&args.path));
    let loader = loader.with_context(|| format!("failed to parse {}", args.path.display()))?;
    tracing::info!(
        rows = loader.num_rows(),
        cols = loader.num_cols(),
        ?parse_time,
        "Parsed input"
    );

    let (table, load_time) = timed(|| config.build(&loader));
    let mut table = table?;
    tracing::info!(layout = %config.layout, ?load_time, "Loaded table");

    println!("Layout: {}", table.layout());
    println!("Rows: {}, Columns: {}", table.num_rows(), table.num_cols());
    println!("SUM(col0) = {}", table.column_sum());
    println!(
        "SUM(col0) WHERE col1 > {} AND col2 < {} = {}",
        args.threshold1,
        args.threshold2,
        table.predicated_column_sum(args.threshold1, args.threshold2)
    );
    println!(
        "SUM(all columns) WHERE col0 > {} = {}",
        args.sum_threshold,
        table.predicated_all_columns_sum(args.sum_threshold)
    );
    println!(
        "UPDATE col3 = col3 + col2 WHERE col0 < {}: {} rows updated",
        args.update_threshold,
        table.predicated_update(args.update_threshold)
    );

    if args.dump {
        println!("\nTable\n");
        print!("{}", render_table(&*table));
        if let Some(indexes) = table.render_indexes() {
            print!("{}", indexes);
        }
    }
    Ok(())
}
