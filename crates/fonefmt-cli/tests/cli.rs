use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(config_home: &Path, args: &[&str], stdin: &str) -> Output {
    cargo_bin_cmd!("fonefmt")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("run command")
}

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = run_raw(config_home, args, "");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_raw(config_home, &full, "");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_normalize_arguments() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_cmd(
        temp.path(),
        &["normalize", "11987654321", "1187654321", "31987654321", "abc"],
    );
    assert_eq!(
        out,
        "+5511987654321\n+5511987654321\n+553187654321\nabc\n"
    );
}

#[test]
fn cli_normalize_reads_stdin_lines() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(temp.path(), &["normalize"], "3187654321\r\n05511987654321\n");
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "+553187654321\n+5511987654321\n"
    );
}

#[test]
fn cli_normalize_json_flags_rejected_numbers() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_cmd_json(temp.path(), &["normalize", "(11) 8765-4321", "123"]);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["output"], "+5511987654321");
    assert_eq!(items[0]["formatted"], true);
    assert_eq!(items[1]["output"], "123");
    assert_eq!(items[1]["formatted"], false);
}

#[test]
fn cli_format_writes_default_output_path() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "nome,telefone\nAna,1187654321\nBia,-\n").expect("write input");

    let report = run_cmd_json(temp.path(), &["format", input.to_str().expect("path")]);
    assert_eq!(report["rows"], 2);
    assert_eq!(report["formatted"], 1);
    assert_eq!(report["rejected"], 1);
    assert_eq!(report["column"], "telefone");

    let output = temp.path().join("contatos_formatado.csv");
    assert_eq!(report["output"], output.display().to_string());
    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "nome,telefone\nAna,+5511987654321\nBia,-\n");
}

#[test]
fn cli_format_stdin_to_stdout() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(
        temp.path(),
        &["format", "-", "--format", "tsv", "--column", "fone"],
        "fone\tnome\n31 9 8765 4321\tCaio\n",
    );
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "fone\tnome\n+553187654321\tCaio\n"
    );
}

#[test]
fn cli_format_dry_run_leaves_no_output() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "telefone\n1187654321\n").expect("write input");

    let out = run_cmd(
        temp.path(),
        &["format", input.to_str().expect("path"), "--dry-run"],
    );
    assert!(out.contains("Would format 1 of 1 rows"));
    assert!(!temp.path().join("contatos_formatado.csv").exists());
}

#[test]
fn cli_format_uses_config_column() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("fonefmt");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "phone_column = \"celular\"\noutput_suffix = \".novo\"\n",
    )
    .expect("write config");

    let input = temp.path().join("lista.csv");
    fs::write(&input, "celular\n3187654321\n").expect("write input");
    run_cmd(temp.path(), &["format", input.to_str().expect("path")]);

    let written = fs::read_to_string(temp.path().join("lista.novo.csv")).expect("read output");
    assert_eq!(written, "celular\n+553187654321\n");
}

#[test]
fn cli_format_missing_column_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "nome\nAna\n").expect("write input");

    let output = run_raw(temp.path(), &["format", input.to_str().expect("path")], "");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("telefone"), "stderr: {stderr}");
}

#[test]
fn cli_format_unsupported_extension_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.json");
    fs::write(&input, "{}").expect("write input");

    let output = run_raw(temp.path(), &["format", input.to_str().expect("path")], "");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_format_missing_input_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("nada.csv");
    let output = run_raw(temp.path(), &["format", input.to_str().expect("path")], "");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_format_refuses_to_overwrite_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "telefone\n1187654321\n").expect("write input");
    let path = input.to_str().expect("path");

    let output = run_raw(temp.path(), &["format", path, "--out", path], "");
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        fs::read_to_string(&input).expect("read input"),
        "telefone\n1187654321\n"
    );
}

#[test]
fn cli_format_refuses_json_with_table_on_stdout() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "telefone\n1187654321\n").expect("write input");

    let output = run_raw(
        temp.path(),
        &["--json", "format", input.to_str().expect("path"), "--out", "-"],
        "",
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_format_ragged_rows_need_flexible() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.csv");
    fs::write(&input, "nome,telefone\nAna\nBia,1187654321\n").expect("write input");
    let path = input.to_str().expect("path");

    let output = run_raw(temp.path(), &["format", path], "");
    assert_eq!(output.status.code(), Some(3));

    run_cmd(temp.path(), &["format", path, "--flexible"]);
    let written =
        fs::read_to_string(temp.path().join("contatos_formatado.csv")).expect("read output");
    assert_eq!(written, "nome,telefone\nAna\nBia,+5511987654321\n");
}

#[test]
fn cli_format_flexible_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("fonefmt");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(config_dir.join("config.toml"), "[table]\nflexible = true\n").expect("write config");

    let input = temp.path().join("contatos.csv");
    fs::write(&input, "telefone,nome\n3187654321\n").expect("write input");
    run_cmd(temp.path(), &["format", input.to_str().expect("path")]);

    let written =
        fs::read_to_string(temp.path().join("contatos_formatado.csv")).expect("read output");
    assert_eq!(written, "telefone,nome\n+553187654321\n");
}

#[test]
fn cli_format_flag_overrides_extension() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("export.dat");
    fs::write(&input, "nome\ttelefone\nEva\t(31) 98765-4321\n").expect("write input");
    let path = input.to_str().expect("path");

    let output = run_raw(temp.path(), &["format", path], "");
    assert_eq!(output.status.code(), Some(3));

    run_cmd(temp.path(), &["format", path, "--format", "tsv"]);
    let written =
        fs::read_to_string(temp.path().join("export_formatado.tsv")).expect("read output");
    assert_eq!(written, "nome\ttelefone\nEva\t+553187654321\n");
}

#[cfg(feature = "xlsx")]
#[test]
fn cli_format_xlsx_workbook() {
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use rust_xlsxwriter::{Format, Workbook};

    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("contatos.xlsx");
    let mut workbook = Workbook::new();
    let date = Format::new().set_num_format("yyyy-mm-dd");
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "nome").expect("cell");
    worksheet.write_string(0, 1, "telefone").expect("cell");
    worksheet.write_string(0, 2, "cadastro").expect("cell");
    worksheet.write_string(1, 0, "Ana").expect("cell");
    worksheet.write_number(1, 1, 1187654321.0).expect("cell");
    worksheet
        .write_number_with_format(1, 2, 45292.0, &date)
        .expect("cell");
    workbook.save(&input).expect("save workbook");

    let report = run_cmd_json(temp.path(), &["format", input.to_str().expect("path")]);
    assert_eq!(report["format"], "xlsx");
    assert_eq!(report["formatted"], 1);

    let output = temp.path().join("contatos_formatado.xlsx");
    let mut written: Xlsx<_> = open_workbook(&output).expect("open output");
    let range = written.worksheet_range_at(0).expect("sheet").expect("range");
    assert_eq!(
        range.get_value((1, 1)),
        Some(&Data::String("+5511987654321".to_string()))
    );
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("Ana".to_string())));
    assert!(matches!(range.get_value((1, 2)), Some(Data::DateTime(_))));
}
