use arsip_rename::{cli, config, error, export, pipeline, reference, scanner};
use arsip_rename_common::{extract_code, MatchResult};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{ArsipError, Result};
use tracing_subscriber::EnvFilter;

fn print_summary(result: &MatchResult) {
    let summary = result.summary();
    println!("📊 照合結果");
    println!("  総数:     {}", summary.total);
    println!("  一致:     {} ({:.1}%)", summary.matched, summary.matched_percent());
    println!("  未一致:   {} ({:.1}%)", summary.unmatched, summary.unmatched_percent());
}

fn print_inputs(files: &[arsip_rename_common::FileEntry]) {
    println!("📂 入力ファイル一覧");
    for line in scanner::listing_lines(files) {
        println!("{}", line);
    }
    println!();
}

fn print_details(result: &MatchResult) {
    if !result.rename_mapping.is_empty() {
        println!("\n✅ 一致したファイル ({}件)", result.rename_mapping.len());
        for (i, entry) in result.rename_mapping.iter().enumerate() {
            println!(
                "  {:>4}. {} [{}] → {}",
                i + 1,
                entry.original_name,
                entry.code,
                entry.new_name
            );
        }
    }

    if !result.unmatched.is_empty() {
        println!("\n⚠ 一致しなかったファイル ({}件)", result.unmatched.len());
        for file in &result.unmatched {
            println!("  - {}", file.filename);
        }
    }
}

/// 0件エラー時の診断表示
fn report_error(err: &ArsipError) {
    eprintln!("❌ {}", err);

    if let ArsipError::NoFilesFound { found_items, .. } = err {
        eprintln!("考えられる原因:");
        eprintln!("  - ZIP/フォルダが空");
        eprintln!("  - すべて隠しファイル（先頭が `.`）");
        eprintln!("  - `__MACOSX` フォルダ内のファイル（macOSのメタデータ）");
        if !found_items.is_empty() {
            eprintln!("検出された全項目（除外分を含む）:");
            for item in found_items {
                eprintln!("  {}", item);
            }
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Validate { input, json } => {
            println!("📦 arsip-rename - 検証\n");

            let request = input.to_request(config.resolve_column(input.column.as_deref()));
            println!("[1/2] ファイル収集・参照値読み込み中...");
            let validated = pipeline::validate_and_match(&request)?;
            println!(
                "✔ {}件のファイル / {}件の参照値\n",
                validated.inputs.files.len(),
                validated.reference_values.len()
            );
            print_inputs(&validated.inputs.files);

            println!("[2/2] 照合結果");
            print_summary(&validated.result);
            print_details(&validated.result);

            if let Some(json_path) = json {
                validated.save_result(&json_path)?;
                println!("\n✔ 結果を保存: {}", json_path.display());
            }
        }

        Commands::Run { input, output, individual, preview, json } => {
            println!("🚀 arsip-rename - 一括リネーム\n");

            let request = input.to_request(config.resolve_column(input.column.as_deref()));

            println!("[1/3] ファイル収集・参照値読み込み中...");
            let validated = pipeline::validate_and_match(&request)?;
            println!(
                "✔ {}件のファイル / {}件の参照値\n",
                validated.inputs.files.len(),
                validated.reference_values.len()
            );
            print_inputs(&validated.inputs.files);

            println!("[2/3] 照合中...");
            print_summary(&validated.result);
            println!();

            println!("[3/3] 出力中...");
            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let options = export::ExportOptions {
                individual,
                preview,
                show_progress: !cli.verbose,
            };
            export::export_results(&validated.result, &output_dir, &config, &options)?;

            if let Some(json_path) = json {
                validated.save_result(&json_path)?;
                println!("✔ 結果を保存: {}", json_path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Columns { reference: path, sheet } => {
            let table = reference::load_reference_table(&path, sheet.as_deref())?;
            println!("列一覧 ({}行):", table.row_count());
            for (i, column) in table.columns().iter().enumerate() {
                println!("  {}) {}", i + 1, column);
            }
        }

        Commands::Code { filenames } => {
            for name in filenames {
                println!("{}\t{}", name, extract_code(&name));
            }
        }

        Commands::Config { set_column, show } => {
            let mut config = config;

            if let Some(column) = set_column {
                config.set_default_column(column)?;
                println!("✔ 参照列名の既定値を設定しました");
            }

            if show {
                println!("設定:");
                println!("  参照列名: {}", config.default_column.as_deref().unwrap_or("未設定"));
                println!("  ZIP名: {}", config.archive_name);
                println!("  レポート名: {}", config.report_name);
                println!("  プレビュー名: {}", config.preview_name);
                println!(
                    "  出力先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| ".".into())
                );
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("arsip_rename=debug,arsip_rename_common=debug,info")
    } else {
        EnvFilter::new("arsip_rename=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::load()?;

    if let Err(err) = run(cli, config) {
        report_error(&err);
        std::process::exit(1);
    }

    Ok(())
}
