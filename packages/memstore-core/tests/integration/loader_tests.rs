//! Loading tables from files and building them from configuration.

use std::io::Write;

use memstore_core::data::{CsvLoader, DataLoader};
use memstore_core::table::render_table;
use memstore_core::{DbError, Layout, StoreConfig};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_csv_file_to_every_layout() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "5,10,1,0")?;
    writeln!(file, "15,2,9,0")?;
    writeln!(file, "3,20,0,0")?;

    let loader = CsvLoader::from_path(file.path())?;
    assert_eq!(loader.num_rows(), 3);

    for layout in Layout::ALL {
        let mut table = StoreConfig::for_layout(layout).build(&loader)?;
        assert_eq!(table.column_sum(), 23);
        assert_eq!(table.predicated_column_sum(5, 5), 8);
        assert_eq!(table.predicated_all_columns_sum(4), 42);
        assert_eq!(table.predicated_update(10), 2);
        assert_eq!(render_table(&*table).lines().next(), Some("00. 5\t10\t1\t1"));
    }
    Ok(())
}

#[test]
fn test_config_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{ "layout": "indexed", "indexed_columns": [0] }"#)?;

    let config = StoreConfig::from_path(&path)?;
    assert_eq!(config.layout, Layout::IndexedRow);
    assert_eq!(config.indexed_columns, vec![0]);

    let loader = CsvLoader::parse_str("1,2,3,4\n-1,5,1,0\n")?;
    let table = config.build(&loader)?;
    assert_eq!(table.predicated_column_sum(0, 2), -1);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let err = StoreConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DbError::IoError(_)));
}
