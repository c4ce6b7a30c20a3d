use std::fs;

use clap::Parser;

use separator_search::cli::{Cli, Commands};
use separator_search::commands::{cdf, optimize, separate};
use separator_search::io::{cdf as distribution, read_edge_list, read_values, read_wardens};

/// Two triangles {1, 2, 3} and {4, 5, 6} joined by the bridge 3 - 4.
const EDGES: &str = "# from|to|rel\n1|2|0\n2|3|0\n3|1|-1\n3|4|0\n4|5|0\n5|6|0\n6|4|-1\n";

fn write_inputs(dir: &std::path::Path) {
    fs::write(dir.join("edges.txt"), EDGES).unwrap();
    fs::write(dir.join("wardens.txt"), "1\n").unwrap();
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("separator-search").chain(args.iter().copied())).unwrap()
}

#[test]
fn loaders_read_the_input_files() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let graph = read_edge_list(&dir.path().join("edges.txt")).unwrap();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(read_wardens(&dir.path().join("wardens.txt")).unwrap(), vec![1]);
    assert!(read_edge_list(&dir.path().join("missing.txt")).is_err());
}

#[test]
fn separate_writes_one_count_per_trial() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("out");
    let edges = dir.path().join("edges.txt");
    let wardens = dir.path().join("wardens.txt");

    let cli = parse(&[
        "separate", "--edges", edges.to_str().unwrap(), "--wardens", wardens.to_str().unwrap(),
        "--seed", "3", "--trials", "12", "--out", out.to_str().unwrap(),
    ]);
    let Commands::Separate(args) = &cli.command else { panic!("expected separate") };
    separate::run(args).unwrap();

    let separators = read_values(&out.join("separator_counts.txt")).unwrap();
    let wardens = read_values(&out.join("warden_counts.txt")).unwrap();
    assert_eq!(separators.len(), 12);
    assert_eq!(wardens.len(), 12);
    assert!(separators.iter().all(|&s| s >= 1.0 && s <= 5.0));

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["trials"], 12);
    assert_eq!(summary["config"]["warden"], "random");

    // A second run refuses to overwrite without --force.
    assert!(separate::run(args).is_err());
}

#[test]
fn optimize_writes_trends_and_ratios() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("out");
    let edges = dir.path().join("edges.txt");
    let wardens = dir.path().join("wardens.txt");

    let cli = parse(&[
        "optimize", "--edges", edges.to_str().unwrap(), "--wardens", wardens.to_str().unwrap(),
        "--warden-strategy", "bfs", "--seed", "1", "--rounds", "3", "--threshold", "10",
        "--out", out.to_str().unwrap(),
    ]);
    let Commands::Optimize(args) = &cli.command else { panic!("expected optimize") };
    optimize::run(args).unwrap();

    for round in 1..=3 {
        let trend = fs::read_to_string(out.join(format!("separator_trend_{round}.txt"))).unwrap();
        assert!(trend.lines().next().unwrap().ends_with(",0"));
    }
    assert_eq!(read_values(&out.join("ratio.txt")).unwrap().len(), 3);
    assert!(out.join("summary.json").is_file());
}

#[test]
fn cdf_command_writes_distribution() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("values.txt");
    let output = dir.path().join("cdf.txt");
    fs::write(&input, "4\n2\n2\n8\n").unwrap();

    let cli = parse(&["cdf", input.to_str().unwrap(), "--output", output.to_str().unwrap()]);
    let Commands::Cdf(args) = &cli.command else { panic!("expected cdf") };
    cdf::run(args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "0.5,2\n0.75,4\n1,8\n");
    assert_eq!(distribution(&[2.0, 2.0, 4.0, 8.0]).unwrap().len(), 3);

    fs::write(&input, "# nothing\n").unwrap();
    let cli = parse(&["cdf", input.to_str().unwrap(), "--output", output.to_str().unwrap(), "--force"]);
    let Commands::Cdf(args) = &cli.command else { panic!("expected cdf") };
    assert!(cdf::run(args).is_err());
}
