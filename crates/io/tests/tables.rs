//! Reading a realistic mini input directory: index tables plus a cluster
//! CSV, aligned against the canonical monthly calendar.

use std::fs;
use std::io::Write as _;

use typhon_calendar::monthly_sequence;
use typhon_io::{read_cluster_averages, read_index_table};

#[test]
fn index_and_cluster_files_align_on_the_calendar() {
    let dir = tempfile::tempdir().unwrap();

    let index_path = dir.path().join("nino34.txt");
    let mut f = fs::File::create(&index_path).unwrap();
    for year in 1990..=1991 {
        write!(f, "{year}").unwrap();
        for month in 1..=12 {
            write!(f, " {}", year as f64 + month as f64 / 100.0).unwrap();
        }
        writeln!(f).unwrap();
    }
    drop(f);

    let cluster_path = dir.path().join("averages_sst.csv");
    let mut f = fs::File::create(&cluster_path).unwrap();
    writeln!(f, "date,value").unwrap();
    for year in 1990..=1991 {
        for month in 1..=12 {
            writeln!(f, "{year}-{month:02}-01,{}.5", month).unwrap();
        }
    }
    drop(f);

    let table = read_index_table(&index_path).unwrap();
    let averages = read_cluster_averages(&cluster_path).unwrap();
    let calendar = monthly_sequence(1990, 1991).unwrap();

    assert_eq!(averages.len(), calendar.len());
    for (stamp, (cluster_stamp, value)) in calendar.iter().zip(&averages) {
        assert_eq!(stamp, cluster_stamp);
        assert_eq!(*value, stamp.month() as f64 + 0.5);
        let indexed = table.value(stamp.year(), stamp.month()).unwrap();
        assert_eq!(indexed, stamp.year() as f64 + stamp.month() as f64 / 100.0);
    }
}

#[test]
fn index_table_lookup_outside_span_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdo.txt");
    fs::write(&path, "1985 1 2 3 4 5 6 7 8 9 10 11 12\n").unwrap();

    let table = read_index_table(&path).unwrap();
    assert_eq!(table.value(1984, 6), None);
    assert_eq!(table.value(1986, 6), None);
}
