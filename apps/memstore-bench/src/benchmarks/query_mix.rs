use std::hint::black_box;

use anyhow::{bail, Context};
use memstore_core::data::MemoryLoader;
use memstore_core::table::QUERY_COLUMNS;
use memstore_core::{Layout, StoreConfig, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::cli::QueryMixArgs;
use crate::utils::{generate_rows, nanos_per_op, timed};

/// Per-layout timings and result checksum.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub layout: Layout,
    pub load_ms: f64,
    pub column_sum_ns: f64,
    pub predicated_column_sum_ns: f64,
    pub predicated_all_columns_sum_ns: f64,
    pub predicated_update_ns: f64,
    /// Wrapping sum of every query result, equal across correct layouts
    pub checksum: i64,
}

#[derive(Debug, Serialize)]
pub struct QueryMixReport {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    pub iterations: usize,
    pub layouts: Vec<LayoutReport>,
    pub layouts_agree: bool,
}

/// Thresholds shared by every layout so their results are comparable.
struct Thresholds {
    filter: Vec<i32>,
    range: Vec<i32>,
    sum: Vec<i32>,
    update: Vec<i32>,
}

impl Thresholds {
    fn generate(seed: u64, iterations: usize, max_value: i32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let mut draw = |n: usize| -> Vec<i32> { (0..n).map(|_| rng.gen_range(0..=max_value)).collect() };
        Self {
            filter: draw(iterations),
            range: draw(iterations),
            sum: draw(iterations),
            update: draw(iterations),
        }
    }
}

/// Run the query-mix benchmark.
pub fn run(args: &QueryMixArgs) -> anyhow::Result<()> {
    if args.cols < QUERY_COLUMNS {
        bail!("--cols must be at least {}", QUERY_COLUMNS);
    }
    if args.max_value <= 0 {
        bail!("--max-value must be greater than 0");
    }

    let layouts = if args.layouts.is_empty() {
        Layout::ALL.to_vec()
    } else {
        args.layouts.clone()
    };

    tracing::info!(
        rows = args.rows,
        cols = args.cols,
        seed = args.seed,
        "Generating dataset"
    );
    let loader = MemoryLoader::new(
        args.cols,
        generate_rows(args.seed, args.rows, args.cols, args.max_value),
    )?;
    let thresholds = Thresholds::generate(args.seed, args.iterations, args.max_value);

    let mut reports = Vec::with_capacity(layouts.len());
    for layout in layouts {
        let config = StoreConfig {
            layout,
            indexed_columns: args.indexed_columns.clone(),
        };
        let (table, load_time) = timed(|| config.build(&loader));
        let mut table = table.with_context(|| format!("failed to load {} table", layout))?;
        tracing::info!(%layout, ?load_time, "Loaded table");

        let mut report = run_layout(&mut *table, &thresholds);
        report.load_ms = load_time.as_secs_f64() * 1000.0;
        reports.push(report);
    }

    let layouts_agree = reports.windows(2).all(|w| w[0].checksum == w[1].checksum);
    if !layouts_agree {
        tracing::error!("Layouts returned different results");
    }

    let report = QueryMixReport {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        iterations: args.iterations,
        layouts: reports,
        layouts_agree,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_layout(table: &mut dyn Table, thresholds: &Thresholds) -> LayoutReport {
    let iterations = thresholds.sum.len();
    let mut checksum = 0i64;

    let (sum, column_sum_time) = timed(|| {
        (0..iterations).fold(0i64, |acc, _| acc.wrapping_add(black_box(table.column_sum())))
    });
    checksum = checksum.wrapping_add(sum);

    let (sum, predicated_column_sum_time) = timed(|| {
        thresholds
            .filter
            .iter()
            .zip(&thresholds.range)
            .fold(0i64, |acc, (&t1, &t2)| {
                acc.wrapping_add(black_box(table.predicated_column_sum(t1, t2)))
            })
    });
    checksum = checksum.wrapping_add(sum);

    let (sum, predicated_all_columns_sum_time) = timed(|| {
        thresholds.sum.iter().fold(0i64, |acc, &t| {
            acc.wrapping_add(black_box(table.predicated_all_columns_sum(t)))
        })
    });
    checksum = checksum.wrapping_add(sum);

    let (updated, predicated_update_time) = timed(|| {
        thresholds
            .update
            .iter()
            .map(|&t| black_box(table.predicated_update(t)) as i64)
            .sum::<i64>()
    });
    checksum = checksum.wrapping_add(updated);
    // Fold the post-update state in so divergent writes show up.
    checksum = checksum.wrapping_add(table.predicated_all_columns_sum(i32::MIN));

    LayoutReport {
        layout: table.layout(),
        load_ms: 0.0,
        column_sum_ns: nanos_per_op(column_sum_time, iterations),
        predicated_column_sum_ns: nanos_per_op(predicated_column_sum_time, iterations),
        predicated_all_columns_sum_ns: nanos_per_op(predicated_all_columns_sum_time, iterations),
        predicated_update_ns: nanos_per_op(predicated_update_time, iterations),
        checksum,
    }
}

fn print_report(report: &QueryMixReport) {
    println!(
        "Query mix: {} rows x {} cols, seed {}, {} iterations per query",
        report.rows, report.cols, report.seed, report.iterations
    );
    println!("{}", "=".repeat(96));
    println!(
        "{:<12} {:>10} {:>16} {:>20} {:>20} {:>14}",
        "layout", "load ms", "sum ns/op", "pred sum ns/op", "all cols ns/op", "update ns/op"
    );
    for r in &report.layouts {
        println!(
            "{:<12} {:>10.2} {:>16.0} {:>20.0} {:>20.0} {:>14.0}",
            r.layout.name(),
            r.load_ms,
            r.column_sum_ns,
            r.predicated_column_sum_ns,
            r.predicated_all_columns_sum_ns,
            r.predicated_update_ns
        );
    }
    println!("{}", "=".repeat(96));
    if report.layouts_agree {
        println!("✅ PASS: all layouts returned identical results");
    } else {
        println!("❌ FAIL: layouts returned different results");
    }
}
